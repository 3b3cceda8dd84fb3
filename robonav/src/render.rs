//! ASCII rendering and terminal animation of a finished search.
//!
//! The legend: `#` wall, `S` start, `G` goal, `*` path, `·` explored,
//! `.` open. Goals and the start stay visible on top of the path.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};

use robonav_core::{Grid, Position};
use robonav_search::SearchResult;

const WALL: char = '#';
const OPEN: char = '.';
const START: char = 'S';
const GOAL: char = 'G';
const PATH: char = '*';
const EXPLORED: char = '·';

/// Render the grid with the full traversal and path overlaid.
pub fn frame(grid: &Grid, result: &SearchResult) -> String {
    compose(
        grid,
        &result.visited,
        result.path.as_deref().unwrap_or_default(),
    )
}

/// Replay the search in the terminal: the explored wave cell by cell, then
/// the path. Purely presentational, the search itself has already run.
pub fn animate(grid: &Grid, result: &SearchResult, delay: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide, terminal::Clear(ClearType::All))?;
    let played = play(&mut stdout, grid, result, delay);
    // Restore the cursor even when playback failed mid-way.
    let _ = execute!(stdout, cursor::Show);
    played
}

fn play(
    stdout: &mut io::Stdout,
    grid: &Grid,
    result: &SearchResult,
    delay: Duration,
) -> io::Result<()> {
    for step in 1..=result.visited.len() {
        show(stdout, &compose(grid, &result.visited[..step], &[]))?;
        thread::sleep(delay);
    }
    if let Some(path) = &result.path {
        for step in 1..=path.len() {
            show(stdout, &compose(grid, &result.visited, &path[..step]))?;
            thread::sleep(delay);
        }
    }
    Ok(())
}

fn show(stdout: &mut io::Stdout, frame: &str) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()
}

fn compose(grid: &Grid, explored: &[Position], path: &[Position]) -> String {
    let rows = grid.rows().max(0) as usize;
    let cols = grid.cols().max(0) as usize;
    let mut canvas = vec![vec![OPEN; cols]; rows];

    for (r, row) in canvas.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if grid.is_wall(Position::new(r as i32, c as i32)) {
                *cell = WALL;
            }
        }
    }
    for &p in explored {
        put(&mut canvas, p, EXPLORED);
    }
    for &p in path {
        put(&mut canvas, p, PATH);
    }
    for &g in grid.goals() {
        put(&mut canvas, g, GOAL);
    }
    put(&mut canvas, grid.start(), START);

    let mut out = String::with_capacity(rows * (cols + 1));
    for row in &canvas {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

fn put(canvas: &mut [Vec<char>], p: Position, ch: char) {
    if p.row >= 0 && p.col >= 0 {
        if let Some(cell) = canvas
            .get_mut(p.row as usize)
            .and_then(|row| row.get_mut(p.col as usize))
        {
            *cell = ch;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robonav_core::mapfile;
    use robonav_search::{search, Method};

    #[test]
    fn frame_overlays_in_order() {
        let grid = mapfile::parse("(3,3)\n(0,0)\n(2,2)\n(1,1,1,1)\n").unwrap();
        let result = search(&grid, Method::Bfs);
        let frame = frame(&grid, &result);
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 3);
        // Start and goal stay visible over the path and explored marks.
        assert_eq!(lines[0].chars().next(), Some(START));
        assert_eq!(lines[2].chars().last(), Some(GOAL));
        // The wall cell survives untouched.
        assert_eq!(lines[1].chars().nth(1), Some(WALL));
        // Some path cell is visible between the endpoints.
        assert!(frame.contains(PATH));
    }

    #[test]
    fn frame_without_path_still_shows_exploration() {
        let grid = mapfile::parse("(3,1)\n(0,0)\n(2,0)\n(1,0,1,1)\n").unwrap();
        let result = search(&grid, Method::Bfs);
        let frame = frame(&grid, &result);
        // Start is the only explored cell; the goal stays bare.
        assert_eq!(frame, "S#G\n");
    }

    #[test]
    fn explored_cells_are_marked() {
        let grid = mapfile::parse("(2,2)\n(0,0)\n(1,1)\n").unwrap();
        let result = search(&grid, Method::Bfs);
        // All four cells are touched: the path runs through (1, 0), so only
        // (0, 1) keeps its explored mark.
        assert_eq!(frame(&grid, &result), "S·\n*G\n");
    }
}
