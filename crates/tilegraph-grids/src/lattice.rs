//! The rectangular backing store shared by the square and hex topologies.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use tilegraph_core::{Coord, Graph, GraphError, VertexId, VertexValue};

use crate::error::GridError;

// ---------------------------------------------------------------------------
// TileValue
// ---------------------------------------------------------------------------

/// Default value of a grid cell: carries its coordinate, is always
/// enterable and applies no cost modifier. Replace per cell (e.g. with
/// [`BlockedValue`](tilegraph_core::BlockedValue)) to model terrain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileValue {
    pub coord: Coord,
}

impl TileValue {
    /// Create a value for the cell at `coord`.
    #[inline]
    pub const fn new(coord: Coord) -> Self {
        Self { coord }
    }
}

impl VertexValue for TileValue {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for TileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coord.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Lattice
// ---------------------------------------------------------------------------

/// A `height x width` cell store over a [`Graph`], with bidirectional
/// cell/coordinate lookup. Cells are created by [`populate`](Self::populate)
/// in row-major order; adjacency is wired by the owning topology.
#[derive(Debug)]
pub(crate) struct Lattice {
    graph: Graph,
    width: i32,
    height: i32,
    /// Cell handles in row-major order. Empty until populated.
    cells: Vec<VertexId>,
    coords: HashMap<VertexId, Coord>,
}

impl Lattice {
    /// Validate dimensions and create an unpopulated lattice.
    pub(crate) fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            graph: Graph::with_capacity((width as usize) * (height as usize)),
            width,
            height,
            cells: Vec::new(),
            coords: HashMap::new(),
        })
    }

    /// Create one vertex per cell, row-major, each valued with its
    /// coordinate. Fails if the lattice is already populated.
    pub(crate) fn populate(&mut self) -> Result<(), GridError> {
        if !self.cells.is_empty() {
            return Err(GridError::AlreadyInitialized);
        }
        self.cells
            .reserve((self.width as usize) * (self.height as usize));
        for row in 0..self.height {
            for col in 0..self.width {
                let coord = Coord::new(row, col);
                let id = self.graph.add(TileValue::new(coord));
                self.cells.push(id);
                self.coords.insert(id, coord);
            }
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub(crate) fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub(crate) fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Whether `coord` lies inside the backing array.
    #[inline]
    pub(crate) fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < self.height && coord.col >= 0 && coord.col < self.width
    }

    /// The cell at `coord`, if in bounds and populated.
    pub(crate) fn vertex_at(&self, coord: Coord) -> Option<VertexId> {
        if !self.in_bounds(coord) {
            return None;
        }
        let idx = (coord.row * self.width + coord.col) as usize;
        self.cells.get(idx).copied()
    }

    /// The coordinate of a member cell.
    ///
    /// Fails for handles the graph does not hold and for vertices that are
    /// not lattice cells.
    pub(crate) fn coordinates(&self, v: VertexId) -> Result<Coord, GridError> {
        if !self.graph.contains(v) {
            return Err(GraphError::VertexNotInGraph(v).into());
        }
        self.coords
            .get(&v)
            .copied()
            .ok_or_else(|| GraphError::VertexNotInGraph(v).into())
    }

    /// Connect `origin` toward `target`, folding an out-of-bounds column
    /// onto the opposite edge of the same row when wrapping. Out-of-bounds
    /// rows, out-of-bounds columns without wrap, and self-targets are
    /// skipped.
    pub(crate) fn wire(
        &mut self,
        origin: Coord,
        target: Coord,
        wrap_around: bool,
    ) -> Result<(), GridError> {
        if target.row < 0 || target.row >= self.height {
            return Ok(());
        }
        let col = if target.col < 0 {
            if !wrap_around {
                return Ok(());
            }
            self.width - 1
        } else if target.col >= self.width {
            if !wrap_around {
                return Ok(());
            }
            0
        } else {
            target.col
        };
        let resolved = Coord::new(target.row, col);
        let (Some(a), Some(b)) = (self.vertex_at(origin), self.vertex_at(resolved)) else {
            return Ok(());
        };
        if a == b {
            return Ok(());
        }
        self.graph.ensure_connected(a, b)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            Lattice::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(
            Lattice::new(5, -1),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn populate_is_row_major() {
        let mut lattice = Lattice::new(3, 2).unwrap();
        lattice.populate().unwrap();
        assert_eq!(lattice.graph().vertex_count(), 6);
        let first = lattice.vertex_at(Coord::ZERO).unwrap();
        let last = lattice.vertex_at(Coord::new(1, 2)).unwrap();
        assert_eq!(lattice.coordinates(first).unwrap(), Coord::ZERO);
        assert_eq!(lattice.coordinates(last).unwrap(), Coord::new(1, 2));
        assert_eq!(lattice.populate(), Err(GridError::AlreadyInitialized));
    }

    #[test]
    fn vertex_at_bounds() {
        let mut lattice = Lattice::new(3, 2).unwrap();
        lattice.populate().unwrap();
        assert!(lattice.vertex_at(Coord::new(-1, 0)).is_none());
        assert!(lattice.vertex_at(Coord::new(0, 3)).is_none());
        assert!(lattice.vertex_at(Coord::new(2, 0)).is_none());
        assert!(lattice.vertex_at(Coord::new(1, 2)).is_some());
    }

    #[test]
    fn coordinates_rejects_non_cells() {
        let mut lattice = Lattice::new(2, 2).unwrap();
        lattice.populate().unwrap();
        let extra = lattice.graph_mut().add(TileValue::default());
        assert!(matches!(
            lattice.coordinates(extra),
            Err(GridError::Graph(GraphError::VertexNotInGraph(v))) if v == extra
        ));
    }

    #[test]
    fn tile_value_displays_coordinate() {
        let value = TileValue::new(Coord::new(2, 3));
        assert_eq!(value.to_string(), "(2, 3)");
    }
}
