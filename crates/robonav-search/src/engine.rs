//! Method selection and dispatch.

use std::fmt;
use std::str::FromStr;

use robonav_core::{Grid, Position};

use crate::astar::a_star;
use crate::best_first::best_first;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::greedy::gbfs;
use crate::ids::ids;
use crate::result::SearchResult;

// ---------------------------------------------------------------------------
// Method
// ---------------------------------------------------------------------------

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Greedy best-first search.
    Gbfs,
    /// A* search.
    AStar,
    /// Iterative deepening search, the first custom method.
    Ids,
    /// Lazily deduplicated best-first search, the second custom method.
    BestFirst,
}

impl Method {
    /// Every method, in presentation order.
    pub const ALL: [Method; 6] = [
        Self::Bfs,
        Self::Dfs,
        Self::Gbfs,
        Self::AStar,
        Self::Ids,
        Self::BestFirst,
    ];

    /// The canonical command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Gbfs => "gbfs",
            Self::AStar => "a_star",
            Self::Ids => "cus_1",
            Self::BestFirst => "cus_2",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Accepts the canonical names plus a few descriptive aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "gbfs" => Ok(Self::Gbfs),
            "a_star" | "astar" => Ok(Self::AStar),
            "cus_1" | "ids" => Ok(Self::Ids),
            "cus_2" | "best_first" => Ok(Self::BestFirst),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// Error parsing a [`Method`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search method {:?} (expected bfs, dfs, gbfs, a_star, cus_1 or cus_2)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMethod {}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run `method` from the grid's configured start cell.
pub fn search(grid: &Grid, method: Method) -> SearchResult {
    search_from(grid, method, grid.start())
}

/// Run `method` from an explicit start cell.
pub fn search_from(grid: &Grid, method: Method, start: Position) -> SearchResult {
    match method {
        Method::Bfs => bfs(grid, start),
        Method::Dfs => dfs(grid, start),
        Method::Gbfs => gbfs(grid, start),
        Method::AStar => a_star(grid, start),
        Method::Ids => ids(grid, start),
        Method::BestFirst => best_first(grid, start),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
