//! Topology-free graphs: [`FreeGraph`] and its relaxation search.

use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::{Deref, DerefMut};

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::traits::Topology;

/// Distances start here; any real path cost is strictly smaller.
const UNREACHED: i64 = i64::MAX;

/// A graph with no imposed topology.
///
/// Callers add vertices and wire adjacency explicitly. Shortest paths use
/// an iterative relaxation search in the Bellman-Ford family: a FIFO
/// worklist revisits a vertex whenever its distance strictly improves, so
/// edge weights and enterability gates are honored without a priority
/// queue.
#[derive(Debug, Default)]
pub struct FreeGraph {
    graph: Graph,
}

impl FreeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for FreeGraph {
    type Target = Graph;

    #[inline]
    fn deref(&self) -> &Graph {
        &self.graph
    }
}

impl DerefMut for FreeGraph {
    #[inline]
    fn deref_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }
}

impl Topology for FreeGraph {
    type Error = GraphError;

    /// Nothing to derive; adjacency is wired by the caller.
    fn initialize(&mut self) -> Result<(), GraphError> {
        Ok(())
    }

    /// Relaxation search from `source` to `destination`.
    ///
    /// A neighbor is relaxed only when the candidate distance strictly
    /// improves on its best known one and its value permits entry from the
    /// current vertex. The search stops as soon as the destination is
    /// dequeued.
    fn shortest_path(
        &self,
        source: VertexId,
        destination: VertexId,
    ) -> Result<Option<Vec<VertexId>>, GraphError> {
        if !self.graph.contains(source) {
            return Err(GraphError::VertexNotInGraph(source));
        }
        if !self.graph.contains(destination) {
            return Err(GraphError::VertexNotInGraph(destination));
        }

        let mut distances: HashMap<VertexId, i64> = HashMap::new();
        distances.insert(source, 0);
        let mut previous: HashMap<VertexId, VertexId> = HashMap::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();
        let mut queued: HashSet<VertexId> = HashSet::new();
        queue.push_back(source);
        queued.insert(source);

        while let Some(current) = queue.pop_front() {
            queued.remove(&current);
            if current == destination {
                let mut path = vec![destination];
                let mut cursor = destination;
                while let Some(&prev) = previous.get(&cursor) {
                    path.push(prev);
                    cursor = prev;
                }
                path.reverse();
                return Ok(Some(path));
            }
            let Some(&current_dist) = distances.get(&current) else {
                continue;
            };
            for &e in self.graph.edges_of(current) {
                let Some(neighbor) = self.graph.opposite(e, current) else {
                    continue;
                };
                let Some(weight) = self.graph.weight(e) else {
                    continue;
                };
                let candidate = current_dist + i64::from(weight);
                let best = distances.get(&neighbor).copied().unwrap_or(UNREACHED);
                if candidate < best
                    && self
                        .graph
                        .value(neighbor)
                        .zip(self.graph.value(current))
                        .is_some_and(|(n, c)| n.is_enterable_from(c))
                {
                    distances.insert(neighbor, candidate);
                    previous.insert(neighbor, current);
                    if queued.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{BlockedValue, IndexValue};
    use rand::RngExt;

    fn line(n: i32) -> (FreeGraph, Vec<VertexId>) {
        let mut g = FreeGraph::new();
        let ids: Vec<_> = (0..n).map(|i| g.add(IndexValue(i))).collect();
        for pair in ids.windows(2) {
            g.connect(pair[0], pair[1]).unwrap();
        }
        (g, ids)
    }

    #[test]
    fn line_path_visits_every_vertex_in_order() {
        let (g, ids) = line(10);
        let path = g.shortest_path(ids[0], ids[9]).unwrap().unwrap();
        assert_eq!(path, ids);
    }

    #[test]
    fn source_equals_destination() {
        let (g, ids) = line(3);
        let path = g.shortest_path(ids[1], ids[1]).unwrap().unwrap();
        assert_eq!(path, vec![ids[1]]);
    }

    #[test]
    fn separate_components_have_no_path() {
        let mut g = FreeGraph::new();
        let a = g.add(IndexValue(0));
        let b = g.add(IndexValue(1));
        let c = g.add(IndexValue(2));
        let d = g.add(IndexValue(3));
        g.connect(a, b).unwrap();
        g.connect(c, d).unwrap();
        assert_eq!(g.shortest_path(a, d).unwrap(), None);
    }

    #[test]
    fn weights_steer_onto_cheaper_route() {
        let mut g = FreeGraph::new();
        let a = g.add(IndexValue(0));
        let b = g.add(IndexValue(1));
        let c = g.add(IndexValue(2));
        // Edge order matters: the two-hop route has to relax b while b is
        // still queued behind c.
        g.connect(a, c).unwrap();
        g.connect(c, b).unwrap();
        let direct = g.connect(a, b).unwrap();
        g.set_weight(direct, 10).unwrap();
        let path = g.shortest_path(a, b).unwrap().unwrap();
        assert_eq!(path, vec![a, c, b]);
    }

    // FIFO worklist: the search ends when the destination is dequeued, even
    // if a cheaper route is still propagating behind it.
    #[test]
    fn search_ends_once_the_destination_is_dequeued() {
        let mut g = FreeGraph::new();
        let a = g.add(IndexValue(0));
        let b = g.add(IndexValue(1));
        let c = g.add(IndexValue(2));
        let direct = g.connect(a, b).unwrap();
        g.set_weight(direct, 10).unwrap();
        g.connect(a, c).unwrap();
        g.connect(c, b).unwrap();
        let path = g.shortest_path(a, b).unwrap().unwrap();
        assert_eq!(path, vec![a, b]);
    }

    #[test]
    fn blocked_destination_yields_no_path() {
        let mut g = FreeGraph::new();
        let a = g.add(IndexValue(0));
        let b = g.add(IndexValue(1));
        let blocked = g.add(BlockedValue);
        g.connect(a, b).unwrap();
        g.connect(b, blocked).unwrap();
        assert_eq!(g.shortest_path(a, blocked).unwrap(), None);
    }

    #[test]
    fn blocked_interior_forces_detour() {
        let mut g = FreeGraph::new();
        let a = g.add(IndexValue(0));
        let wall = g.add(BlockedValue);
        let b = g.add(IndexValue(1));
        let c = g.add(IndexValue(2));
        let d = g.add(IndexValue(3));
        // Two-hop route through the wall, three-hop route around it.
        g.connect(a, wall).unwrap();
        g.connect(wall, b).unwrap();
        g.connect(a, c).unwrap();
        g.connect(c, d).unwrap();
        g.connect(d, b).unwrap();
        let path = g.shortest_path(a, b).unwrap().unwrap();
        assert_eq!(path, vec![a, c, d, b]);
    }

    #[test]
    fn missing_endpoints_error() {
        let mut other = FreeGraph::new();
        other.add(IndexValue(0));
        let foreign = other.add(IndexValue(1));

        let mut g = FreeGraph::new();
        let a = g.add(IndexValue(0));
        assert_eq!(
            g.shortest_path(a, foreign),
            Err(GraphError::VertexNotInGraph(foreign))
        );
        assert_eq!(
            g.shortest_path(foreign, a),
            Err(GraphError::VertexNotInGraph(foreign))
        );
    }

    #[test]
    fn initialize_is_a_no_op() {
        let mut g = FreeGraph::new();
        let a = g.add(IndexValue(0));
        g.initialize().unwrap();
        g.initialize().unwrap();
        assert!(g.contains(a));
        assert_eq!(g.vertex_count(), 1);
    }

    // Any path found on a random graph must start and end correctly and
    // follow live edges.
    #[test]
    fn random_graph_paths_are_valid() {
        let mut rng = rand::rng();
        let mut g = FreeGraph::new();
        let ids: Vec<_> = (0..100).map(|i| g.add(IndexValue(i))).collect();
        for _ in 0..1000 {
            let a = ids[rng.random_range(0..ids.len())];
            let b = ids[rng.random_range(0..ids.len())];
            if a == b {
                continue;
            }
            if let Ok(Some(e)) = g.ensure_connected(a, b) {
                g.set_weight(e, rng.random_range(1..5)).unwrap();
            }
        }
        let source = ids[rng.random_range(0..ids.len())];
        let destination = ids[rng.random_range(0..ids.len())];
        if let Some(path) = g.shortest_path(source, destination).unwrap() {
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&destination));
            for pair in path.windows(2) {
                assert!(g.has_neighbor(pair[0], pair[1]));
            }
        }
    }
}
