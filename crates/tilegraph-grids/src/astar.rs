//! Heuristic-guided shortest-path search shared by the grid topologies.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;

use tilegraph_core::{Coord, GraphError, VertexId, manhattan};

use crate::error::GridError;
use crate::lattice::Lattice;

/// Keeps f-scores dominated by accumulated step costs; the heuristic only
/// breaks ties toward the destination.
const HEURISTIC_SCALE: f64 = 0.01;

/// A*-style search over a lattice's graph.
///
/// The open set is a priority map keyed by f-score; re-pushing a vertex
/// replaces its stale priority. A vertex is expanded at most once (closed
/// set). The step cost into a neighbor is the edge weight multiplied by
/// the neighbor value's entering-cost modifier, and neighbors whose value
/// refuses entry from the current vertex are skipped. As soon as the
/// destination surfaces at the top of the open set the path is
/// reconstructed, without formally extracting it.
pub(crate) fn shortest_path(
    lattice: &Lattice,
    source: VertexId,
    destination: VertexId,
) -> Result<Option<Vec<VertexId>>, GridError> {
    let graph = lattice.graph();
    if !graph.contains(source) {
        return Err(GraphError::VertexNotInGraph(source).into());
    }
    if !graph.contains(destination) {
        return Err(GraphError::VertexNotInGraph(destination).into());
    }
    let start = lattice.coordinates(source)?;
    let goal = lattice.coordinates(destination)?;

    let mut open: PriorityQueue<VertexId, Reverse<OrderedFloat<f64>>> = PriorityQueue::new();
    let mut g_score: HashMap<VertexId, f64> = HashMap::new();
    let mut came_from: HashMap<VertexId, VertexId> = HashMap::new();
    let mut closed: HashSet<VertexId> = HashSet::new();

    g_score.insert(source, 0.0);
    open.push(source, Reverse(OrderedFloat(estimate(start, goal))));

    while let Some((&top, _)) = open.peek() {
        if top == destination {
            return Ok(Some(reconstruct(&came_from, destination)));
        }
        let Some((current, _)) = open.pop() else {
            break;
        };
        closed.insert(current);
        let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);

        for &e in graph.edges_of(current) {
            let Some(neighbor) = graph.opposite(e, current) else {
                continue;
            };
            if closed.contains(&neighbor) {
                continue;
            }
            let (Some(into), Some(from)) = (graph.value(neighbor), graph.value(current)) else {
                continue;
            };
            if !into.is_enterable_from(from) {
                continue;
            }
            let Some(weight) = graph.weight(e) else {
                continue;
            };
            let step = f64::from(weight) * into.entering_cost_modifier(from);
            let tentative = current_g + step;
            let best = g_score.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if tentative < best {
                g_score.insert(neighbor, tentative);
                came_from.insert(neighbor, current);
                let f = tentative + estimate(lattice.coordinates(neighbor)?, goal);
                open.push(neighbor, Reverse(OrderedFloat(f)));
            }
        }
    }
    Ok(None)
}

#[inline]
fn estimate(from: Coord, to: Coord) -> f64 {
    HEURISTIC_SCALE * f64::from(manhattan(from, to))
}

fn reconstruct(came_from: &HashMap<VertexId, VertexId>, destination: VertexId) -> Vec<VertexId> {
    let mut path = vec![destination];
    let mut cursor = destination;
    while let Some(&prev) = came_from.get(&cursor) {
        path.push(prev);
        cursor = prev;
    }
    path.reverse();
    path
}
