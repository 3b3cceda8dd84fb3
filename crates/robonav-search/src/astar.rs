//! A* search.

use std::collections::{BinaryHeap, HashMap, HashSet};

use robonav_core::{Grid, Position};

use crate::distance::manhattan;
use crate::frontier::PathEntry;
use crate::result::SearchResult;

/// A* search from `start`, with Manhattan distance to the grid's primary
/// goal as the heuristic.
///
/// Entries compete on `g + h`: moves taken so far plus the heuristic
/// estimate. A neighbor is re-queued only when reached strictly cheaper
/// than its best known cost, and a position is expanded at most once, so
/// the returned path has minimal move count to the primary goal.
///
/// The goal test runs on pop before the duplicate check; reaching any goal
/// cell ends the search even if a stale entry carries it there.
pub fn a_star(grid: &Grid, start: Position) -> SearchResult {
    let goal = grid.primary_goal();
    let mut open: BinaryHeap<PathEntry> = BinaryHeap::new();
    let mut expanded: HashSet<Position> = HashSet::new();
    let mut cost_so_far: HashMap<Position, i32> = HashMap::new();
    let mut trace: Vec<Position> = Vec::new();

    cost_so_far.insert(start, 0);
    open.push(PathEntry::new(0, start, vec![start]));

    while let Some(PathEntry { pos: current, path, .. }) = open.pop() {
        if grid.is_goal(current) {
            trace.push(current);
            return SearchResult::found(path, trace);
        }
        if !expanded.insert(current) {
            continue;
        }
        trace.push(current);

        // Unit step costs make the entry's own path length its g value.
        let cost = path.len() as i32 - 1;
        for next in grid.neighbors(current) {
            let next_cost = cost + 1;
            // Expanded positions already hold their cheapest cost, so the
            // strictly-cheaper test also filters them out.
            let cheaper = match cost_so_far.get(&next) {
                Some(&known) => next_cost < known,
                None => true,
            };
            if cheaper {
                cost_so_far.insert(next, next_cost);
                let mut longer = path.clone();
                longer.push(next);
                open.push(PathEntry::new(next_cost + manhattan(next, goal), next, longer));
            }
        }
    }
    SearchResult::unreachable(trace)
}
