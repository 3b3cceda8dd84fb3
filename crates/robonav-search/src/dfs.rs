//! Depth-first search.

use std::collections::HashSet;

use robonav_core::{Grid, Position};

use crate::result::SearchResult;

/// Depth-first search from `start`.
///
/// LIFO frontier. Neighbors are pushed in reverse priority order so that
/// the pop order follows up, down, left, right; a position is finalized the
/// first time it pops and later stale stack entries are dropped. The path
/// found is the first one discovered, not a shortest one.
pub fn dfs(grid: &Grid, start: Position) -> SearchResult {
    let mut stack: Vec<(Position, Vec<Position>)> = vec![(start, vec![start])];
    let mut visited: HashSet<Position> = HashSet::new();
    let mut trace: Vec<Position> = Vec::new();

    while let Some((current, path)) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        trace.push(current);
        if grid.is_goal(current) {
            return SearchResult::found(path, trace);
        }
        for next in grid.neighbors(current).rev() {
            if !visited.contains(&next) {
                let mut longer = path.clone();
                longer.push(next);
                stack.push((next, longer));
            }
        }
    }
    SearchResult::unreachable(trace)
}
