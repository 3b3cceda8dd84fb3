//! The immutable grid world: dimensions, start cell, goals and walls.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::geom::{Direction, Position};

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned block of wall cells.
///
/// `Rect::new(x, y, w, h)` covers `(x + i, y + j)` for `0 <= i < w` and
/// `0 <= j < h`, with the first coordinate on the row axis. Overlapping
/// rectangles simply union when expanded into a wall set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle anchored at `(x, y)` spanning `w` rows and
    /// `h` columns.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Every cell covered by the rectangle. Empty when `w` or `h` is not
    /// positive.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (0..self.w.max(0)).flat_map(move |i| {
            (0..self.h.max(0)).map(move |j| Position::new(self.x + i, self.y + j))
        })
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An immutable rectangular world for a single searching agent.
///
/// Construction validates the configuration once; afterwards the grid only
/// answers queries, so searches can share it freely by reference.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: i32,
    cols: i32,
    start: Position,
    goals: BTreeSet<Position>,
    primary_goal: Position,
    walls: HashSet<Position>,
}

impl Grid {
    /// Build a grid from its dimensions, start cell, goal cells and wall
    /// rectangles.
    ///
    /// The start and every goal must lie inside the `rows` x `cols` area and
    /// the goal set must be non-empty. Wall cells outside the area are kept
    /// but can never match a neighbor query. A goal may sit on a wall; such
    /// a goal is simply unreachable.
    pub fn new(
        rows: i32,
        cols: i32,
        start: Position,
        goals: impl IntoIterator<Item = Position>,
        walls: &[Rect],
    ) -> Result<Self, GridError> {
        let goals: BTreeSet<Position> = goals.into_iter().collect();
        let primary_goal = match goals.first() {
            Some(&g) => g,
            None => return Err(GridError::NoGoals),
        };

        let in_bounds =
            |p: Position| p.row >= 0 && p.row < rows && p.col >= 0 && p.col < cols;
        if !in_bounds(start) {
            return Err(GridError::StartOutOfBounds { start, rows, cols });
        }
        if let Some(&goal) = goals.iter().find(|&&g| !in_bounds(g)) {
            return Err(GridError::GoalOutOfBounds { goal, rows, cols });
        }

        let walls: HashSet<Position> = walls.iter().flat_map(|r| r.cells()).collect();
        Ok(Self {
            rows,
            cols,
            start,
            goals,
            primary_goal,
            walls,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The agent's configured start cell.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// All goal cells, ordered row-major.
    #[inline]
    pub fn goals(&self) -> &BTreeSet<Position> {
        &self.goals
    }

    /// The representative goal used by single-target heuristics: the
    /// row-major smallest member of the goal set.
    #[inline]
    pub fn primary_goal(&self) -> Position {
        self.primary_goal
    }

    /// Whether `p` lies inside the grid area.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Whether `p` is a wall cell.
    #[inline]
    pub fn is_wall(&self, p: Position) -> bool {
        self.walls.contains(&p)
    }

    /// Whether `p` is a goal cell.
    #[inline]
    pub fn is_goal(&self, p: Position) -> bool {
        self.goals.contains(&p)
    }

    /// The walkable neighbors of `p`, in the fixed expansion priority
    /// up, down, left, right.
    ///
    /// The order is load-bearing: equal-priority tie-breaking in every
    /// search algorithm reduces to it. The iterator is double-ended so
    /// stack-based searches can push in reverse and still pop in priority
    /// order.
    pub fn neighbors(&self, p: Position) -> impl DoubleEndedIterator<Item = Position> + '_ {
        Direction::ALL
            .iter()
            .map(move |&dir| p.step(dir))
            .filter(move |&q| self.contains(q) && !self.is_wall(q))
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Error building a [`Grid`] from an invalid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The goal set was empty.
    NoGoals,
    /// The start cell lies outside the grid area.
    StartOutOfBounds {
        start: Position,
        rows: i32,
        cols: i32,
    },
    /// A goal cell lies outside the grid area.
    GoalOutOfBounds {
        goal: Position,
        rows: i32,
        cols: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGoals => write!(f, "grid has no goal cells"),
            Self::StartOutOfBounds { start, rows, cols } => {
                write!(f, "start {start} is outside the {rows}x{cols} grid")
            }
            Self::GoalOutOfBounds { goal, rows, cols } => {
                write!(f, "goal {goal} is outside the {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        // 5 rows x 11 columns with two goals and a handful of wall blocks.
        Grid::new(
            5,
            11,
            Position::new(1, 0),
            [Position::new(0, 7), Position::new(3, 10)],
            &[
                Rect::new(0, 2, 2, 2),
                Rect::new(0, 8, 2, 1),
                Rect::new(0, 10, 1, 1),
                Rect::new(3, 2, 2, 1),
                Rect::new(4, 3, 1, 3),
                Rect::new(3, 9, 1, 1),
                Rect::new(4, 8, 1, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rect_expands_to_cells() {
        let cells: Vec<Position> = Rect::new(2, 3, 2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(2, 3),
                Position::new(2, 4),
                Position::new(3, 3),
                Position::new(3, 4),
            ]
        );
    }

    #[test]
    fn degenerate_rect_is_empty() {
        assert_eq!(Rect::new(1, 1, 0, 5).cells().count(), 0);
        assert_eq!(Rect::new(1, 1, 5, -2).cells().count(), 0);
    }

    #[test]
    fn wall_and_goal_queries() {
        let grid = sample_grid();
        assert!(grid.is_wall(Position::new(0, 2)));
        assert!(grid.is_wall(Position::new(1, 3)));
        assert!(!grid.is_wall(Position::new(1, 0)));
        assert!(grid.is_goal(Position::new(0, 7)));
        assert!(grid.is_goal(Position::new(3, 10)));
        assert!(!grid.is_goal(grid.start()));
    }

    #[test]
    fn primary_goal_is_row_major_smallest() {
        let grid = sample_grid();
        assert_eq!(grid.primary_goal(), Position::new(0, 7));

        let swapped = Grid::new(
            5,
            11,
            Position::new(1, 0),
            [Position::new(3, 10), Position::new(0, 7)],
            &[],
        )
        .unwrap();
        assert_eq!(swapped.primary_goal(), Position::new(0, 7));
    }

    #[test]
    fn neighbors_follow_priority_order() {
        let grid = Grid::new(3, 3, Position::new(1, 1), [Position::new(0, 0)], &[]).unwrap();
        let order: Vec<Position> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            order,
            vec![
                Position::new(0, 1), // up
                Position::new(2, 1), // down
                Position::new(1, 0), // left
                Position::new(1, 2), // right
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let grid = sample_grid();
        // (0, 0) has its right neighbor open and its down neighbor open,
        // while up and left fall off the grid.
        let from_corner: Vec<Position> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(from_corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        // (1, 1) sits against the wall block starting at column 2.
        let beside_wall: Vec<Position> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            beside_wall,
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn neighbors_reverse_for_stack_pushes() {
        let grid = Grid::new(3, 3, Position::new(1, 1), [Position::new(0, 0)], &[]).unwrap();
        let reversed: Vec<Position> = grid.neighbors(Position::new(1, 1)).rev().collect();
        assert_eq!(
            reversed,
            vec![
                Position::new(1, 2), // right
                Position::new(1, 0), // left
                Position::new(2, 1), // down
                Position::new(0, 1), // up
            ]
        );
    }

    #[test]
    fn empty_goal_set_is_rejected() {
        let err = Grid::new(5, 5, Position::new(0, 0), [], &[]).unwrap_err();
        assert_eq!(err, GridError::NoGoals);
    }

    #[test]
    fn out_of_bounds_start_is_rejected() {
        let err = Grid::new(5, 5, Position::new(5, 0), [Position::new(0, 0)], &[]).unwrap_err();
        assert!(matches!(err, GridError::StartOutOfBounds { .. }));
        assert_eq!(
            err.to_string(),
            "start (5, 0) is outside the 5x5 grid"
        );
    }

    #[test]
    fn out_of_bounds_goal_is_rejected() {
        let err = Grid::new(5, 5, Position::new(0, 0), [Position::new(2, 7)], &[]).unwrap_err();
        assert!(matches!(err, GridError::GoalOutOfBounds { .. }));
    }

    #[test]
    fn goal_on_wall_is_allowed() {
        let grid = Grid::new(
            5,
            5,
            Position::new(0, 0),
            [Position::new(2, 2)],
            &[Rect::new(2, 2, 1, 1)],
        )
        .unwrap();
        assert!(grid.is_goal(Position::new(2, 2)));
        assert!(grid.is_wall(Position::new(2, 2)));
    }

    #[test]
    fn out_of_range_walls_are_harmless() {
        let grid = Grid::new(
            3,
            3,
            Position::new(0, 0),
            [Position::new(2, 2)],
            &[Rect::new(2, 2, 4, 4)],
        )
        .unwrap();
        // Cells past the boundary never appear as neighbors anyway.
        assert!(grid.is_wall(Position::new(4, 4)));
        let from_edge: Vec<Position> = grid.neighbors(Position::new(1, 2)).collect();
        assert_eq!(from_edge, vec![Position::new(0, 2), Position::new(1, 1)]);
    }
}
