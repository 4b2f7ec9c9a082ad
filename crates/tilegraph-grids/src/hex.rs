//! Hexagonal grid topology: [`HexGraph`].

use std::ops::{Deref, DerefMut};

use tilegraph_core::{Coord, Direction, Graph, HexOrientation, Topology, VertexId};

use crate::astar;
use crate::error::GridError;
use crate::lattice::Lattice;

/// Six (Δrow, Δcol) offsets for one orientation and row parity, indexed in
/// the same order as [`HexOrientation::directions`]. The odd and even
/// flavors of an axis use each other's rows with the parity swapped.
const fn offsets(orientation: HexOrientation, odd_row: bool) -> [(i32, i32); 6] {
    match (orientation, odd_row) {
        (HexOrientation::HorizontalOdd, false) | (HexOrientation::HorizontalEven, true) => {
            [(-1, 0), (0, 1), (1, 0), (1, -1), (0, -1), (-1, -1)]
        }
        (HexOrientation::HorizontalOdd, true) | (HexOrientation::HorizontalEven, false) => {
            [(-1, 1), (0, 1), (1, 1), (1, 0), (0, -1), (-1, 0)]
        }
        (HexOrientation::VerticalOdd, false) | (HexOrientation::VerticalEven, true) => {
            [(-1, 0), (-1, 1), (0, 1), (1, 0), (0, -1), (-1, -1)]
        }
        (HexOrientation::VerticalOdd, true) | (HexOrientation::VerticalEven, false) => {
            [(-1, 0), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1)]
        }
    }
}

/// A hexagonal lattice of cells over a rectangular backing array.
///
/// Each cell touches up to six neighbors. Which six depends on the
/// orientation: horizontal layouts run hex rows east to west, vertical
/// layouts run them north to south, and the odd/even half of the name
/// picks which row parity is displaced by half a cell. With `wrap_around`,
/// each row's two column edges join through the mirrored column, making
/// the grid a cylinder; rows never wrap. All parameters are fixed at
/// construction; [`initialize`](Topology::initialize) builds the vertices
/// and adjacency once.
#[derive(Debug)]
pub struct HexGraph {
    lattice: Lattice,
    orientation: HexOrientation,
    wrap_around: bool,
    directions: [Direction; 6],
}

impl HexGraph {
    /// A `width x height` grid in the default horizontal-odd orientation,
    /// without wrap-around.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::with_options(width, height, HexOrientation::default(), false)
    }

    /// A `width x height` grid with explicit orientation and wrap-around.
    /// Both dimensions must be at least 1.
    pub fn with_options(
        width: i32,
        height: i32,
        orientation: HexOrientation,
        wrap_around: bool,
    ) -> Result<Self, GridError> {
        let lattice = Lattice::new(width, height)?;
        Ok(Self {
            lattice,
            orientation,
            wrap_around,
            directions: orientation.directions(),
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.lattice.width()
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.lattice.height()
    }

    /// The orientation fixed at construction.
    #[inline]
    pub fn orientation(&self) -> HexOrientation {
        self.orientation
    }

    /// Whether columns wrap around the left/right edges.
    #[inline]
    pub fn wrap_around(&self) -> bool {
        self.wrap_around
    }

    /// The six directions this grid honors.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// The cell at `coord`, if in bounds and initialized.
    pub fn vertex_at(&self, coord: impl Into<Coord>) -> Option<VertexId> {
        self.lattice.vertex_at(coord.into())
    }

    /// The coordinate of a member cell.
    pub fn coordinates(&self, v: VertexId) -> Result<Coord, GridError> {
        self.lattice.coordinates(v)
    }

    /// Where a step from `origin` in `direction` lands.
    ///
    /// The origin must be in bounds and the direction must belong to this
    /// grid's orientation. The result is the raw table offset applied to
    /// the origin; it may land out of bounds, and no wrap folding is done.
    pub fn neighbor_coordinates(
        &self,
        origin: impl Into<Coord>,
        direction: Direction,
    ) -> Result<Coord, GridError> {
        let origin = origin.into();
        if !self.lattice.in_bounds(origin) {
            return Err(GridError::OutOfBounds(origin));
        }
        let Some(index) = self.directions.iter().position(|&d| d == direction) else {
            return Err(GridError::InvalidDirection {
                direction,
                orientation: self.orientation,
            });
        };
        let (drow, dcol) = offsets(self.orientation, origin.row % 2 != 0)[index];
        Ok(origin.shift(drow, dcol))
    }
}

impl Deref for HexGraph {
    type Target = Graph;

    #[inline]
    fn deref(&self) -> &Graph {
        self.lattice.graph()
    }
}

impl DerefMut for HexGraph {
    #[inline]
    fn deref_mut(&mut self) -> &mut Graph {
        self.lattice.graph_mut()
    }
}

impl Topology for HexGraph {
    type Error = GridError;

    /// Create all cells, then derive adjacency cell by cell from the
    /// transformation table row for each cell's parity. Fails if called
    /// twice.
    fn initialize(&mut self) -> Result<(), GridError> {
        self.lattice.populate()?;
        let height = self.lattice.height();
        let width = self.lattice.width();
        for row in 0..height {
            for col in 0..width {
                let origin = Coord::new(row, col);
                for (drow, dcol) in offsets(self.orientation, row % 2 != 0) {
                    self.lattice
                        .wire(origin, origin.shift(drow, dcol), self.wrap_around)?;
                }
            }
        }
        log::debug!(
            "hex grid wired: {}x{} cells ({}), {} edges",
            width,
            height,
            self.orientation,
            self.lattice.graph().edge_count()
        );
        Ok(())
    }

    fn shortest_path(
        &self,
        source: VertexId,
        destination: VertexId,
    ) -> Result<Option<Vec<VertexId>>, GridError> {
        astar::shortest_path(&self.lattice, source, destination)
    }
}
