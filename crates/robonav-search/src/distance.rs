//! Distance metrics.

use robonav_core::Position;

/// Manhattan distance: moves needed with 4-way movement and no walls.
///
/// Never overestimates the true cost on a 4-connected grid, which is what
/// makes it usable as the A* heuristic.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        let origin = Position::new(0, 0);
        assert_eq!(manhattan(origin, origin), 0);
        assert_eq!(manhattan(origin, Position::new(3, 4)), 7);
        assert_eq!(manhattan(Position::new(3, 4), origin), 7);
        assert_eq!(manhattan(Position::new(-2, 1), Position::new(1, -3)), 7);
    }
}
