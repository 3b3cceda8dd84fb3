//! Iterative deepening search, the first custom method (`cus_1`).

use std::collections::HashSet;

use robonav_core::{Grid, Position};

use crate::result::SearchResult;

/// Outcome of one depth-limited pass.
struct Pass {
    found: Option<Vec<Position>>,
    new_positions: bool,
}

/// Iterative deepening search from `start`.
///
/// Runs depth-limited passes with limits 0, 1, 2, ... until a goal is found
/// or a pass finalizes no position it had not already finalized in an
/// earlier pass, which means the whole reachable component has been covered
/// and deeper passes cannot reach anything new.
///
/// Each pass explores every simple path of at most `limit` moves, so the
/// first pass that reaches a goal does it with a minimal-length path. The
/// trace records each position once, at its first finalization across all
/// passes.
pub fn ids(grid: &Grid, start: Position) -> SearchResult {
    let mut seen: HashSet<Position> = HashSet::new();
    let mut trace: Vec<Position> = Vec::new();

    for limit in 0.. {
        let pass = depth_limited(grid, start, limit, &mut seen, &mut trace);
        if let Some(path) = pass.found {
            return SearchResult::found(path, trace);
        }
        if !pass.new_positions {
            break;
        }
    }
    SearchResult::unreachable(trace)
}

fn depth_limited(
    grid: &Grid,
    start: Position,
    limit: usize,
    seen: &mut HashSet<Position>,
    trace: &mut Vec<Position>,
) -> Pass {
    let mut stack: Vec<(Position, Vec<Position>)> = vec![(start, vec![start])];
    let mut new_positions = false;

    while let Some((current, path)) = stack.pop() {
        if seen.insert(current) {
            trace.push(current);
            new_positions = true;
        }
        if grid.is_goal(current) {
            return Pass {
                found: Some(path),
                new_positions,
            };
        }
        if path.len() - 1 < limit {
            for next in grid.neighbors(current).rev() {
                // The branch itself is the visited set; positions may recur
                // across sibling branches but never within one.
                if !path.contains(&next) {
                    let mut longer = path.clone();
                    longer.push(next);
                    stack.push((next, longer));
                }
            }
        }
    }
    Pass {
        found: None,
        new_positions,
    }
}
