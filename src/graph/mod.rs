//! The eroding lattice and path search over it.
//!
//! - `grid`: `GridGraph`, edges with fixed identity and a mutable active flag
//! - `path`: breadth-first shortest paths and reachability

pub mod grid;
pub mod path;

pub use grid::{Edge, EdgeId, GridGraph};
pub use path::{reachable, shortest_path, Path};
