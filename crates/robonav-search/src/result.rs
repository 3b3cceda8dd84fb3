//! Search outcome types.

use robonav_core::Position;

/// The outcome of one search run.
///
/// `path` is the start-to-goal route when a goal was reached, including both
/// endpoints; it is `None` when no goal is reachable. `visited` records
/// every position the algorithm finalized, in finalization order, and is
/// filled in either case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Option<Vec<Position>>,
    pub visited: Vec<Position>,
}

impl SearchResult {
    pub(crate) fn found(path: Vec<Position>, visited: Vec<Position>) -> Self {
        Self {
            path: Some(path),
            visited,
        }
    }

    pub(crate) fn unreachable(visited: Vec<Position>) -> Self {
        Self {
            path: None,
            visited,
        }
    }

    /// Whether a goal was reached.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }

    /// The goal the path ends at, when one was reached.
    pub fn goal(&self) -> Option<Position> {
        self.path.as_ref().and_then(|p| p.last().copied())
    }

    /// Number of moves along the path, one less than its cell count.
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}
