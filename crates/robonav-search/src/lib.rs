//! Search algorithms for robot navigation on grid worlds.
//!
//! Six strategies share one contract: given a [`Grid`](robonav_core::Grid)
//! and a start cell, return a [`SearchResult`] holding the path found (or
//! `None`) and the trace of finalized positions:
//!
//! - **BFS** ([`bfs`]), minimal move count
//! - **DFS** ([`dfs`]), first path found
//! - **Greedy best-first** ([`gbfs`]), heuristic-driven, eager dedup
//! - **A\*** ([`a_star`]), minimal move count to the primary goal
//! - **Iterative deepening** ([`ids`]), minimal move count, `cus_1`
//! - **Lazy best-first** ([`best_first`]), heuristic-driven, lazy dedup, `cus_2`
//!
//! All six expand neighbors in the fixed priority up, down, left, right and
//! break remaining ties deterministically, so every run of a method on a
//! grid yields the same result. [`Method`] names the strategies for
//! command-line use and [`search`]/[`search_from`] dispatch on it.
//!
//! # Guarantees
//!
//! | Method | Complete | Minimal moves |
//! |---|---|---|
//! | [`bfs`] | yes | yes |
//! | [`dfs`] | yes | no |
//! | [`gbfs`] | yes | no |
//! | [`a_star`] | yes | yes (to the primary goal) |
//! | [`ids`] | yes | yes |
//! | [`best_first`] | yes | no |
//!
//! Complete means the search terminates on every finite grid and finds a
//! goal whenever one is reachable.

mod astar;
mod best_first;
mod bfs;
mod dfs;
mod distance;
mod engine;
mod frontier;
mod greedy;
mod ids;
mod result;

pub use astar::a_star;
pub use best_first::best_first;
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use engine::{search, search_from, Method, UnknownMethod};
pub use greedy::gbfs;
pub use ids::ids;
pub use result::SearchResult;
