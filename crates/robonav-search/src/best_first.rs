//! Lazily deduplicated best-first search, the second custom method
//! (`cus_2`).

use std::collections::{BinaryHeap, HashSet};

use robonav_core::{Grid, Position};

use crate::distance::manhattan;
use crate::frontier::PathEntry;
use crate::result::SearchResult;

/// Best-first search from `start` with lazy duplicate elimination, steered
/// by Manhattan distance to the grid's primary goal.
///
/// Unlike [`gbfs`](crate::gbfs), nothing is marked when enqueued: a
/// position may sit in the frontier several times with different paths, and
/// only the best-ranked copy wins when it pops. The others are discarded as
/// stale. The path finalized for each position is therefore the one the
/// heap ranked best, not the one discovered first.
pub fn best_first(grid: &Grid, start: Position) -> SearchResult {
    let goal = grid.primary_goal();
    let mut open: BinaryHeap<PathEntry> = BinaryHeap::new();
    let mut visited: HashSet<Position> = HashSet::new();
    let mut trace: Vec<Position> = Vec::new();

    open.push(PathEntry::new(0, start, vec![start]));

    while let Some(PathEntry { pos: current, path, .. }) = open.pop() {
        if !visited.insert(current) {
            continue;
        }
        trace.push(current);
        if grid.is_goal(current) {
            return SearchResult::found(path, trace);
        }
        for next in grid.neighbors(current) {
            if !visited.contains(&next) {
                let mut longer = path.clone();
                longer.push(next);
                open.push(PathEntry::new(manhattan(next, goal), next, longer));
            }
        }
    }
    SearchResult::unreachable(trace)
}
