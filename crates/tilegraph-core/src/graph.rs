//! The graph store: [`Graph`], [`VertexId`], [`EdgeId`].
//!
//! A [`Graph`] exclusively owns its vertices and edges and hands out
//! copyable id handles. Edges are undirected, join two distinct vertices,
//! and carry an integer weight (default 1). At most one edge exists per
//! vertex pair. Handles are meaningful only for the graph that issued them;
//! slots are never reused, so a removed vertex's handle stays dead.

use std::fmt;

use crate::error::GraphError;
use crate::value::VertexValue;

// ---------------------------------------------------------------------------
// Id handles
// ---------------------------------------------------------------------------

/// Handle to a vertex of a [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub(crate) usize);

/// Handle to an edge of a [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub(crate) usize);

impl VertexId {
    /// The underlying slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    /// The underlying slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(v: VertexId) -> Self {
        v.0
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(e: EdgeId) -> Self {
        e.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Vertex {
    /// Incident edges, in connection order.
    edges: Vec<EdgeId>,
    value: Box<dyn VertexValue>,
}

#[derive(Debug)]
struct Edge {
    a: VertexId,
    b: VertexId,
    weight: i32,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected graph of valued vertices and weighted edges.
///
/// Mutations return `Result` and leave the graph unchanged on failure.
/// Queries taking a handle are total: an absent vertex simply has no
/// edges, no neighbors and no value.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: Vec<Option<Vertex>>,
    edges: Vec<Option<Edge>>,
    vertex_count: usize,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::new(),
            vertex_count: 0,
            edge_count: 0,
        }
    }

    // --- mutations ---

    /// Insert a fresh isolated vertex owning `value` and return its handle.
    pub fn add(&mut self, value: impl VertexValue + 'static) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Some(Vertex {
            edges: Vec::new(),
            value: Box::new(value),
        }));
        self.vertex_count += 1;
        id
    }

    /// Remove an isolated vertex, returning its value.
    ///
    /// Fails if the vertex is absent or still has incident edges.
    pub fn remove(&mut self, v: VertexId) -> Result<Box<dyn VertexValue>, GraphError> {
        match self.vertices.get(v.0).and_then(|slot| slot.as_ref()) {
            None => return Err(GraphError::VertexNotInGraph(v)),
            Some(vertex) if !vertex.edges.is_empty() => {
                return Err(GraphError::VertexNotIsolated(v));
            }
            Some(_) => {}
        }
        let Some(vertex) = self.vertices[v.0].take() else {
            return Err(GraphError::VertexNotInGraph(v));
        };
        self.vertex_count -= 1;
        Ok(vertex.value)
    }

    /// Connect two distinct non-neighbor vertices with an edge of weight 1.
    ///
    /// Fails if either vertex is absent, the two are the same, or they are
    /// already neighbors. For a connect that tolerates an existing edge,
    /// see [`ensure_connected`](Self::ensure_connected).
    pub fn connect(&mut self, left: VertexId, right: VertexId) -> Result<EdgeId, GraphError> {
        if !self.contains(left) {
            return Err(GraphError::VertexNotInGraph(left));
        }
        if !self.contains(right) {
            return Err(GraphError::VertexNotInGraph(right));
        }
        if left == right {
            return Err(GraphError::SelfLoop(left));
        }
        if self.has_neighbor(left, right) {
            return Err(GraphError::AlreadyConnected(left, right));
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge {
            a: left,
            b: right,
            weight: 1,
        }));
        self.edge_count += 1;
        if let Some(vertex) = self.vertices[left.0].as_mut() {
            vertex.edges.push(id);
        }
        if let Some(vertex) = self.vertices[right.0].as_mut() {
            vertex.edges.push(id);
        }
        Ok(id)
    }

    /// Connect two vertices, treating an existing connection as a no-op.
    ///
    /// Returns the new edge, or `None` when the vertices were already
    /// neighbors. Absent vertices and self loops still fail.
    pub fn ensure_connected(
        &mut self,
        left: VertexId,
        right: VertexId,
    ) -> Result<Option<EdgeId>, GraphError> {
        match self.connect(left, right) {
            Ok(edge) => Ok(Some(edge)),
            Err(GraphError::AlreadyConnected(..)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Remove every edge incident to `v`.
    ///
    /// Fails if the vertex is absent or already isolated.
    pub fn disconnect(&mut self, v: VertexId) -> Result<(), GraphError> {
        let incident: Vec<EdgeId> = match self.vertices.get(v.0).and_then(|slot| slot.as_ref()) {
            None => return Err(GraphError::VertexNotInGraph(v)),
            Some(vertex) if vertex.edges.is_empty() => {
                return Err(GraphError::VertexIsolated(v));
            }
            Some(vertex) => vertex.edges.clone(),
        };
        for e in incident {
            self.clear_edge(e);
        }
        Ok(())
    }

    /// Remove the edge joining two neighbor vertices.
    ///
    /// Fails if either vertex is absent or the two are not neighbors.
    pub fn disconnect_pair(&mut self, left: VertexId, right: VertexId) -> Result<(), GraphError> {
        if !self.contains(left) {
            return Err(GraphError::VertexNotInGraph(left));
        }
        if !self.contains(right) {
            return Err(GraphError::VertexNotInGraph(right));
        }
        let Some(e) = self.edge_between(left, right) else {
            return Err(GraphError::NotConnected(left, right));
        };
        self.clear_edge(e);
        Ok(())
    }

    /// Set an edge's traversal weight.
    pub fn set_weight(&mut self, e: EdgeId, weight: i32) -> Result<(), GraphError> {
        let Some(edge) = self.edges.get_mut(e.0).and_then(|slot| slot.as_mut()) else {
            return Err(GraphError::EdgeNotInGraph(e));
        };
        edge.weight = weight;
        Ok(())
    }

    /// Replace a vertex's value, returning the previous one.
    pub fn set_value(
        &mut self,
        v: VertexId,
        value: impl VertexValue + 'static,
    ) -> Result<Box<dyn VertexValue>, GraphError> {
        let Some(vertex) = self.vertices.get_mut(v.0).and_then(|slot| slot.as_mut()) else {
            return Err(GraphError::VertexNotInGraph(v));
        };
        Ok(std::mem::replace(&mut vertex.value, Box::new(value)))
    }

    /// Unlink an edge from both endpoints and vacate its slot.
    fn clear_edge(&mut self, e: EdgeId) {
        let Some(edge) = self.edges.get_mut(e.0).and_then(|slot| slot.take()) else {
            return;
        };
        self.edge_count -= 1;
        for endpoint in [edge.a, edge.b] {
            if let Some(vertex) = self.vertices.get_mut(endpoint.0).and_then(|slot| slot.as_mut())
            {
                vertex.edges.retain(|&id| id != e);
            }
        }
    }

    // --- queries ---

    /// Whether the graph holds this vertex.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.get(v.0).is_some_and(|slot| slot.is_some())
    }

    /// The edges incident to `v`, in connection order. Empty when absent.
    pub fn edges_of(&self, v: VertexId) -> &[EdgeId] {
        self.vertices
            .get(v.0)
            .and_then(|slot| slot.as_ref())
            .map_or(&[], |vertex| vertex.edges.as_slice())
    }

    /// Whether `e` is one of `v`'s incident edges.
    pub fn has_edge(&self, v: VertexId, e: EdgeId) -> bool {
        self.edges_of(v).contains(&e)
    }

    /// The number of edges incident to `v`. An absent vertex has none.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.edges_of(v).len()
    }

    /// Whether `v` has no incident edges.
    #[inline]
    pub fn is_isolated(&self, v: VertexId) -> bool {
        self.degree(v) == 0
    }

    /// Whether `v` has exactly one incident edge.
    #[inline]
    pub fn is_leaf(&self, v: VertexId) -> bool {
        self.degree(v) == 1
    }

    /// The neighbors of `v`, in connection order.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges_of(v)
            .iter()
            .filter_map(move |&e| self.opposite(e, v))
    }

    /// The edge joining two vertices, if they are neighbors.
    pub fn edge_between(&self, left: VertexId, right: VertexId) -> Option<EdgeId> {
        self.edges_of(left)
            .iter()
            .copied()
            .find(|&e| self.opposite(e, left) == Some(right))
    }

    /// Whether the two vertices are neighbors.
    #[inline]
    pub fn has_neighbor(&self, left: VertexId, right: VertexId) -> bool {
        self.edge_between(left, right).is_some()
    }

    /// Both endpoints of an edge.
    pub fn endpoints(&self, e: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edges
            .get(e.0)
            .and_then(|slot| slot.as_ref())
            .map(|edge| (edge.a, edge.b))
    }

    /// The endpoint of `e` opposite to `v`, if `v` is one of its endpoints.
    pub fn opposite(&self, e: EdgeId, v: VertexId) -> Option<VertexId> {
        let (a, b) = self.endpoints(e)?;
        if v == a {
            Some(b)
        } else if v == b {
            Some(a)
        } else {
            None
        }
    }

    /// An edge's traversal weight.
    pub fn weight(&self, e: EdgeId) -> Option<i32> {
        self.edges
            .get(e.0)
            .and_then(|slot| slot.as_ref())
            .map(|edge| edge.weight)
    }

    /// A vertex's value.
    pub fn value(&self, v: VertexId) -> Option<&dyn VertexValue> {
        self.vertices
            .get(v.0)
            .and_then(|slot| slot.as_ref())
            .map(|vertex| vertex.value.as_ref())
    }

    /// Iterate over all live vertices.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| VertexId(i)))
    }

    /// Iterate over all live edges.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| EdgeId(i)))
    }

    /// Number of live vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of live edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
