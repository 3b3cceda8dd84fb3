//! The priority frontier entry shared by the best-first search family.

use std::cmp::Ordering;

use robonav_core::Position;

/// One frontier entry: a candidate position, the path that reached it and
/// the priority it competes with.
///
/// Ordering is a three-key comparison: priority, then position, then path,
/// the latter two row-major lexicographic. Equal-priority entries therefore
/// leave the frontier in one fixed order no matter how the heap happened to
/// arrange them, which keeps every heuristic search fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathEntry {
    pub(crate) priority: i32,
    pub(crate) pos: Position,
    pub(crate) path: Vec<Position>,
}

impl PathEntry {
    #[inline]
    pub(crate) fn new(priority: i32, pos: Position, path: Vec<Position>) -> Self {
        Self {
            priority,
            pos,
            path,
        }
    }
}

impl Ord for PathEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest key first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.pos.cmp(&self.pos))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for PathEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
