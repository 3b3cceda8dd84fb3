//! robonav: route a robot across an obstacle grid from the command line.
//!
//! ```text
//! robonav maps/example.txt a_star
//! robonav maps/example.txt bfs --json
//! RUST_LOG=debug robonav maps/example.txt cus_1 --render
//! ```

mod render;
mod report;

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use robonav_core::{mapfile, Position};
use robonav_search::{search_from, Method};

/// Find a route for a robot across a walled grid.
#[derive(Parser, Debug)]
#[command(name = "robonav", version, about)]
struct Args {
    /// Map file describing the grid.
    map_file: PathBuf,

    /// Search method: bfs, dfs, gbfs, a_star, cus_1 (iterative deepening)
    /// or cus_2 (lazy best-first).
    method: Method,

    /// Override the map's start cell.
    #[arg(long, value_parser = parse_cell, value_name = "ROW,COL")]
    start: Option<Position>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Print an ASCII picture of the explored grid after the report.
    #[arg(long)]
    render: bool,

    /// Replay the traversal in the terminal before the report.
    #[arg(long, conflicts_with = "json")]
    animate: bool,

    /// Frame delay for --animate, in milliseconds.
    #[arg(long, default_value_t = 80, value_name = "MS")]
    delay: u64,
}

fn parse_cell(s: &str) -> Result<Position, String> {
    let trimmed = s
        .trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']']);
    let (row, col) = trimmed
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|_| format!("bad row in {s:?}"))?;
    let col = col.trim().parse().map_err(|_| format!("bad column in {s:?}"))?;
    Ok(Position::new(row, col))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let grid = mapfile::load(&args.map_file)?;
    let start = match args.start {
        Some(cell) if !grid.contains(cell) => {
            return Err(format!(
                "start {cell} is outside the {}x{} grid",
                grid.rows(),
                grid.cols()
            )
            .into());
        }
        Some(cell) => cell,
        None => grid.start(),
    };

    log::info!(
        "running {} on a {}x{} grid from {start}",
        args.method,
        grid.rows(),
        grid.cols()
    );
    let begin = Instant::now();
    let result = search_from(&grid, args.method, start);
    log::debug!(
        "{} finalized {} positions in {:?}",
        args.method,
        result.visited.len(),
        begin.elapsed()
    );

    if args.animate {
        render::animate(&grid, &result, Duration::from_millis(args.delay))?;
        print!("{}", report::text(&result));
        return Ok(());
    }

    if args.json {
        println!("{}", report::json(args.method, &result));
    } else {
        print!("{}", report::text(&result));
    }
    if args.render {
        print!("{}", render::frame(&grid, &result));
    }

    Ok(())
}
