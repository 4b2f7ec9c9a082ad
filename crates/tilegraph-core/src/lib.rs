//! **tilegraph-core** — Graph arena core for tile maps.
//!
//! This crate provides the foundational types of the *tilegraph*
//! ecosystem: the vertex/edge arena with its connectivity invariants, the
//! vertex value traversal rules, compass/orientation tags, grid
//! coordinates, and the topology-free [`FreeGraph`] with its relaxation
//! shortest-path search. Grid topologies live in `tilegraph-grids`.

pub mod coord;
pub mod error;
pub mod free;
pub mod graph;
pub mod tags;
pub mod traits;
pub mod value;

pub use coord::{Coord, manhattan};
pub use error::GraphError;
pub use free::FreeGraph;
pub use graph::{EdgeId, Graph, VertexId};
pub use tags::{Direction, HexOrientation};
pub use traits::Topology;
pub use value::{BlockedValue, IndexValue, VertexValue};
