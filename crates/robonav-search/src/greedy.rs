//! Greedy best-first search.

use std::collections::{BinaryHeap, HashSet};

use robonav_core::{Grid, Position};

use crate::distance::manhattan;
use crate::frontier::PathEntry;
use crate::result::SearchResult;

/// Greedy best-first search from `start`, steered by Manhattan distance to
/// the grid's primary goal.
///
/// Positions are marked visited when enqueued, so each enters the frontier
/// at most once with the first path that discovered it. Fast in practice,
/// with no optimality promise, and drawn toward the primary goal even when
/// another goal is closer.
pub fn gbfs(grid: &Grid, start: Position) -> SearchResult {
    let goal = grid.primary_goal();
    let mut open: BinaryHeap<PathEntry> = BinaryHeap::new();
    let mut visited: HashSet<Position> = HashSet::new();
    let mut trace: Vec<Position> = Vec::new();

    visited.insert(start);
    open.push(PathEntry::new(0, start, vec![start]));

    while let Some(PathEntry { pos: current, path, .. }) = open.pop() {
        trace.push(current);
        if grid.is_goal(current) {
            return SearchResult::found(path, trace);
        }
        for next in grid.neighbors(current) {
            if visited.insert(next) {
                let mut longer = path.clone();
                longer.push(next);
                open.push(PathEntry::new(manhattan(next, goal), next, longer));
            }
        }
    }
    SearchResult::unreachable(trace)
}
