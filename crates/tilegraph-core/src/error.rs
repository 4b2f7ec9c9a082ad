//! Error type for graph mutations and queries.

use std::fmt;

use crate::graph::{EdgeId, VertexId};

/// A violated precondition of a graph operation.
///
/// Every failure is local and leaves the graph unchanged. An unreachable
/// destination is not an error; searches report it as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex is not held by this graph.
    VertexNotInGraph(VertexId),
    /// Removal requires the vertex to have no incident edges.
    VertexNotIsolated(VertexId),
    /// Disconnecting a vertex with no incident edges.
    VertexIsolated(VertexId),
    /// The two vertices are already neighbors.
    AlreadyConnected(VertexId, VertexId),
    /// The two vertices are not neighbors.
    NotConnected(VertexId, VertexId),
    /// An edge must join two distinct vertices.
    SelfLoop(VertexId),
    /// The edge is not held by this graph.
    EdgeNotInGraph(EdgeId),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotInGraph(v) => write!(f, "vertex {v} is not in the graph"),
            Self::VertexNotIsolated(v) => write!(f, "vertex {v} still has incident edges"),
            Self::VertexIsolated(v) => write!(f, "vertex {v} has no incident edges"),
            Self::AlreadyConnected(l, r) => {
                write!(f, "vertices {l} and {r} are already connected")
            }
            Self::NotConnected(l, r) => write!(f, "vertices {l} and {r} are not connected"),
            Self::SelfLoop(v) => write!(f, "cannot connect vertex {v} to itself"),
            Self::EdgeNotInGraph(e) => write!(f, "edge {e} is not in the graph"),
        }
    }
}

impl std::error::Error for GraphError {}
