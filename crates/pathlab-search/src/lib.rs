//! **pathlab-search** — search algorithms over a pathlab grid.
//!
//! Four strategies share one contract: given a mutable
//! [`Grid`](pathlab_core::Grid) and the start/end positions, produce a
//! [`SearchResult`] holding the settlement trace and the reconstructed
//! path, both as coordinates.
//!
//! - [`bfs`]: FIFO level-order expansion, shortest path on unit-cost grids
//! - [`dijkstra`]: global minimum-distance selection over the full node set
//! - [`astar`]: best-first on `g + h` with the Manhattan heuristic, optimal
//! - [`greedy`]: best-first on `h` alone, fast but not optimal
//!
//! [`Algorithm`] dispatches between them by name.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod greedy;
mod neighbors;
mod open;
mod path;
mod result;

pub use astar::astar;
pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use greedy::greedy;
pub use neighbors::neighbors;
pub use path::reconstruct_path;
pub use result::{Algorithm, SearchError, SearchResult};
