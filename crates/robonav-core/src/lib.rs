//! Core grid model for the robonav navigation tools.
//!
//! This crate defines the world a searching agent moves through:
//!
//! - [`Position`] and [`Direction`], the (row, column) geometry
//! - [`Grid`], the immutable rectangular world with start, goals and walls
//! - [`mapfile`], the text map format the grids are loaded from
//!
//! Grids are built once, validated once and then only queried, so search
//! code can borrow them freely without synchronisation.

mod geom;
mod grid;
pub mod mapfile;

pub use geom::{Direction, Position};
pub use grid::{Grid, GridError, Rect};
pub use mapfile::MapError;
