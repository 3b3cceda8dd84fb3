//! Text and JSON reports for a finished search.

use std::fmt::Write as _;

use robonav_core::{Direction, Position};
use robonav_search::{Method, SearchResult};

/// Render the plain-text report.
///
/// ```text
/// The goal (0, 7) is reachable.
/// Path: (1, 0), (1, 1), ...
/// Directions: right, down, ...
/// Number of nodes traversed: 22
/// Traversal Path: (1, 0), (0, 0), ...
/// ```
///
/// An unreachable goal drops the path lines and opens with
/// `No goal is reachable.` instead; the traversal lines are reported either
/// way.
pub fn text(result: &SearchResult) -> String {
    let mut out = String::new();
    match (&result.path, result.goal()) {
        (Some(path), Some(goal)) => {
            let _ = writeln!(out, "The goal {goal} is reachable.");
            let _ = writeln!(out, "Path: {}", positions(path));
            let _ = writeln!(out, "Directions: {}", directions(&Direction::decode(path)));
        }
        _ => {
            let _ = writeln!(out, "No goal is reachable.");
        }
    }
    let _ = writeln!(out, "Number of nodes traversed: {}", result.visited.len());
    let _ = writeln!(out, "Traversal Path: {}", positions(&result.visited));
    out
}

/// The same facts as [`text`], as a JSON object.
pub fn json(method: Method, result: &SearchResult) -> serde_json::Value {
    serde_json::json!({
        "method": method.name(),
        "reachable": result.is_reachable(),
        "goal": result.goal(),
        "path": result.path,
        "directions": result.path.as_deref().map(Direction::decode),
        "nodes_traversed": result.visited.len(),
        "traversal": result.visited,
    })
}

fn positions(cells: &[Position]) -> String {
    let rendered: Vec<String> = cells.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}

fn directions(moves: &[Direction]) -> String {
    let rendered: Vec<String> = moves.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}
