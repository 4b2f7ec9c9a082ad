//! Grid topologies backed by the arena graph.
//!
//! A [`SquareGraph`] wires a rectangular lattice with four-way or
//! eight-way adjacency; a [`HexGraph`] wires six-way adjacency in one of
//! four orientations. Both are built empty, populate their cells and
//! derive adjacency in [`initialize`](tilegraph_core::Topology::initialize),
//! translate between coordinates and vertex handles, and answer
//! [`shortest_path`](tilegraph_core::Topology::shortest_path) with a
//! heuristic search that honors edge weights and the entering-cost
//! modifiers of cell values.

mod astar;
pub mod error;
pub mod hex;
mod lattice;
pub mod square;

pub use error::GridError;
pub use hex::HexGraph;
pub use lattice::TileValue;
pub use square::SquareGraph;
