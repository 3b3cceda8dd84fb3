//! Map file parsing.
//!
//! A map file is plain text, one map per file: the grid size `(columns,rows)`
//! on line 1, the start cell `(column,row)` on line 2, `|`-separated goal
//! cells on line 3, then one wall rectangle `(x,y,w,h)` per line:
//!
//! ```text
//! (11,5)
//! (0,1)
//! (7,0) | (10,3)
//! (2,0,2,2)
//! (8,0,1,2)
//! ```
//!
//! File coordinates are column-major `(col, row)` and wall rectangles are
//! `(leftmost column, topmost row, width in columns, height in rows)`;
//! everything is swapped into the grid's row-major convention here. Square
//! brackets are accepted in place of parentheses, and `#` starts a trailing
//! comment on wall lines only.
//!
//! The three header lines are mandatory and abort the parse when malformed.
//! A malformed wall line is only skipped, with a warning.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::geom::Position;
use crate::grid::{Grid, GridError, Rect};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Read and parse a map file from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, MapError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parse a map from its textual content.
pub fn parse(text: &str) -> Result<Grid, MapError> {
    let mut lines = text.lines();

    let (cols, rows) = header_pair(lines.next(), 1, "grid size")?;
    let (start_col, start_row) = header_pair(lines.next(), 2, "start cell")?;

    let goals_line = lines.next().filter(|l| !l.trim().is_empty());
    let goals_text = goals_line.ok_or(MapError::MissingLine {
        line: 3,
        what: "goal cells",
    })?;
    let mut goals = Vec::new();
    for field in goals_text.split('|') {
        let (c, r) = pair(field).ok_or_else(|| MapError::Malformed {
            line: 3,
            what: "goal cells",
            text: goals_text.trim().to_string(),
        })?;
        goals.push(Position::new(r, c));
    }

    let mut walls = Vec::new();
    for (idx, raw) in lines.enumerate() {
        let line_no = idx + 4;
        let stripped = match raw.split_once('#') {
            Some((before, _)) => before.trim(),
            None => raw.trim(),
        };
        if stripped.is_empty() {
            continue;
        }
        match quad(stripped) {
            // File rects are column-major; swap into row-major.
            Some((x, y, w, h)) => walls.push(Rect::new(y, x, h, w)),
            None => log::warn!("skipping malformed wall line {line_no}: {stripped:?}"),
        }
    }

    let grid = Grid::new(rows, cols, Position::new(start_row, start_col), goals, &walls)?;
    log::debug!(
        "parsed map: {}x{} grid, {} goal(s), {} wall rect(s)",
        grid.rows(),
        grid.cols(),
        grid.goals().len(),
        walls.len()
    );
    Ok(grid)
}

fn header_pair(
    line: Option<&str>,
    line_no: usize,
    what: &'static str,
) -> Result<(i32, i32), MapError> {
    let text = line.filter(|l| !l.trim().is_empty()).ok_or(MapError::MissingLine {
        line: line_no,
        what,
    })?;
    pair(text).ok_or_else(|| MapError::Malformed {
        line: line_no,
        what,
        text: text.trim().to_string(),
    })
}

/// Parse `(a,b)` or `[a,b]` into two integers.
fn pair(s: &str) -> Option<(i32, i32)> {
    match fields(s)?.as_slice() {
        &[a, b] => Some((a, b)),
        _ => None,
    }
}

/// Parse `(a,b,c,d)` or `[a,b,c,d]` into four integers.
fn quad(s: &str) -> Option<(i32, i32, i32, i32)> {
    match fields(s)?.as_slice() {
        &[a, b, c, d] => Some((a, b, c, d)),
        _ => None,
    }
}

/// Every comma-separated field as an integer; `None` when any field fails
/// to parse.
fn fields(s: &str) -> Option<Vec<i32>> {
    s.trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']'])
        .split(',')
        .map(|f| f.trim().parse().ok())
        .collect()
}

// ---------------------------------------------------------------------------
// MapError
// ---------------------------------------------------------------------------

/// Error reading or parsing a map file.
#[derive(Debug)]
pub enum MapError {
    /// The file could not be read.
    Io(io::Error),
    /// A mandatory header line is missing or blank.
    MissingLine { line: usize, what: &'static str },
    /// A mandatory header line did not parse.
    Malformed {
        line: usize,
        what: &'static str,
        text: String,
    },
    /// The parsed values do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read map file: {err}"),
            Self::MissingLine { line, what } => {
                write!(f, "map line {line} ({what}) is missing")
            }
            Self::Malformed { line, what, text } => {
                write!(f, "map line {line} ({what}) is malformed: {text:?}")
            }
            Self::Grid(err) => write!(f, "invalid map: {err}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<GridError> for MapError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
