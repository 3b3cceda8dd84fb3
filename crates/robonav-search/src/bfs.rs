//! Breadth-first search.

use std::collections::{HashSet, VecDeque};

use robonav_core::{Grid, Position};

use crate::result::SearchResult;

/// Breadth-first search from `start`.
///
/// FIFO frontier. Positions are marked visited when enqueued and goal-tested
/// when dequeued, so the first goal reported is one at minimal move count
/// and ties among equally distant goals fall to enqueue order.
pub fn bfs(grid: &Grid, start: Position) -> SearchResult {
    let mut queue: VecDeque<(Position, Vec<Position>)> = VecDeque::new();
    let mut visited: HashSet<Position> = HashSet::new();
    let mut trace: Vec<Position> = Vec::new();

    visited.insert(start);
    queue.push_back((start, vec![start]));

    while let Some((current, path)) = queue.pop_front() {
        trace.push(current);
        if grid.is_goal(current) {
            return SearchResult::found(path, trace);
        }
        for next in grid.neighbors(current) {
            if visited.insert(next) {
                let mut longer = path.clone();
                longer.push(next);
                queue.push_back((next, longer));
            }
        }
    }
    SearchResult::unreachable(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use robonav_core::Rect;

    fn open_grid(rows: i32, cols: i32, start: Position, goal: Position) -> Grid {
        Grid::new(rows, cols, start, [goal], &[]).unwrap()
    }

    #[test]
    fn trivial_start_on_goal() {
        let grid = open_grid(3, 3, Position::new(1, 1), Position::new(1, 1));
        let result = bfs(&grid, grid.start());
        assert_eq!(result.path, Some(vec![Position::new(1, 1)]));
        assert_eq!(result.visited, vec![Position::new(1, 1)]);
    }

    #[test]
    fn shortest_path_on_open_grid() {
        let grid = open_grid(5, 5, Position::new(0, 0), Position::new(4, 4));
        let result = bfs(&grid, grid.start());
        assert_eq!(result.moves(), Some(8));
        assert_eq!(result.goal(), Some(Position::new(4, 4)));
    }

    #[test]
    fn open_ten_by_ten_takes_fourteen_moves() {
        let grid = open_grid(10, 10, Position::new(1, 1), Position::new(8, 8));
        let result = bfs(&grid, grid.start());
        assert_eq!(result.moves(), Some(14));
        let path = result.path.unwrap();
        assert_eq!(path.len(), 15);
        assert_eq!(path[path.len() - 1], Position::new(8, 8));
    }

    #[test]
    fn first_expansion_order_is_up_down_left_right() {
        let grid = open_grid(3, 3, Position::new(1, 1), Position::new(2, 2));
        let result = bfs(&grid, grid.start());
        assert_eq!(
            &result.visited[..5],
            &[
                Position::new(1, 1),
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn routes_around_a_wall() {
        // Vertical wall through column 1, open only at row 4.
        let grid = Grid::new(
            5,
            3,
            Position::new(0, 0),
            [Position::new(0, 2)],
            &[Rect::new(0, 1, 4, 1)],
        )
        .unwrap();
        let result = bfs(&grid, grid.start());
        assert_eq!(result.moves(), Some(10));
        let path = result.path.unwrap();
        assert_eq!(path[0], Position::new(0, 0));
        assert!(path.contains(&Position::new(4, 1)));
    }

    #[test]
    fn unreachable_goal_reports_all_reached_cells() {
        // Wall column seals the goal side completely.
        let grid = Grid::new(
            3,
            3,
            Position::new(0, 0),
            [Position::new(0, 2)],
            &[Rect::new(0, 1, 3, 1)],
        )
        .unwrap();
        let result = bfs(&grid, grid.start());
        assert_eq!(result.path, None);
        // Only the left column is reachable.
        assert_eq!(result.visited.len(), 3);
    }

    #[test]
    fn nearest_of_several_goals_wins() {
        let grid = Grid::new(
            10,
            10,
            Position::new(0, 0),
            [Position::new(9, 0), Position::new(0, 9), Position::new(9, 9)],
            &[],
        )
        .unwrap();
        let result = bfs(&grid, grid.start());
        // (9, 0) and (0, 9) tie at distance 9; the frontier reaches (9, 0)
        // first because each layer enqueues downward cells before rightward
        // ones.
        assert_eq!(result.goal(), Some(Position::new(9, 0)));
        assert_eq!(result.moves(), Some(9));
    }
}
