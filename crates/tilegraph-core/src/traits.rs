//! The contract a concrete graph topology implements.

use crate::graph::VertexId;

/// Topology construction and shortest-path contract.
///
/// `Ok(None)` from [`shortest_path`](Self::shortest_path) is the defined
/// no-path result; `Err` is reserved for violated preconditions.
pub trait Topology {
    /// Error reported for violated preconditions.
    type Error: std::error::Error;

    /// Populate vertices and wire adjacency.
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Shortest path from `source` to `destination`, both endpoints
    /// included. Both must be members of this graph.
    fn shortest_path(
        &self,
        source: VertexId,
        destination: VertexId,
    ) -> Result<Option<Vec<VertexId>>, Self::Error>;
}
