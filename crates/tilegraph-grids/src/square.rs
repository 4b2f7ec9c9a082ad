//! Orthogonal grid topology: [`SquareGraph`].

use std::ops::{Deref, DerefMut};

use tilegraph_core::{Coord, Direction, Graph, Topology, VertexId};

use crate::astar;
use crate::error::GridError;
use crate::lattice::Lattice;

/// A rectangular lattice of cells.
///
/// Every pair of orthogonally adjacent in-bounds cells is connected, plus
/// the diagonal pairs when `use_diagonals` is set. With `wrap_around`,
/// each row's two column edges join through the mirrored column, making
/// the grid a cylinder; rows never wrap. All parameters are fixed at
/// construction; [`initialize`](Topology::initialize) builds the vertices
/// and adjacency once.
#[derive(Debug)]
pub struct SquareGraph {
    lattice: Lattice,
    wrap_around: bool,
    use_diagonals: bool,
    directions: Vec<Direction>,
}

impl SquareGraph {
    /// A `width x height` grid without wrap-around or diagonals.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::with_options(width, height, false, false)
    }

    /// A `width x height` grid with explicit wrap-around and diagonal
    /// flags. Both dimensions must be at least 1.
    pub fn with_options(
        width: i32,
        height: i32,
        wrap_around: bool,
        use_diagonals: bool,
    ) -> Result<Self, GridError> {
        let lattice = Lattice::new(width, height)?;
        let mut directions = Direction::CARDINAL.to_vec();
        if use_diagonals {
            directions.extend(Direction::DIAGONAL);
        }
        Ok(Self {
            lattice,
            wrap_around,
            use_diagonals,
            directions,
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

    /// Whether columns wrap around the left/right edges.
    #[inline]
    pub fn wrap_around(&self) -> bool {
        self.wrap_around
    }

    /// Whether diagonal adjacency is wired.
    #[inline]
    pub fn use_diagonals(&self) -> bool {
        self.use_diagonals
    }

    /// The directions this grid honors.
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
}

impl Deref for SquareGraph {
    type Target = Graph;

    #[inline]
    fn deref(&self) -> &Graph {
        self.lattice.graph()
    }
}

impl DerefMut for SquareGraph {
    #[inline]
    fn deref_mut(&mut self) -> &mut Graph {
        self.lattice.graph_mut()
    }
}

impl Topology for SquareGraph {
    type Error = GridError;

    /// Create all cells, then derive adjacency cell by cell from the
    /// direction list. Fails if called twice.
    fn initialize(&mut self) -> Result<(), GridError> {
        self.lattice.populate()?;
        let height = self.lattice.height();
        let width = self.lattice.width();
        let directions = self.directions.clone();
        for row in 0..height {
            for col in 0..width {
                let origin = Coord::new(row, col);
                for &direction in &directions {
                    let (drow, dcol) = direction.offset();
                    self.lattice
                        .wire(origin, origin.shift(drow, dcol), self.wrap_around)?;
                }
            }
        }
        log::debug!(
            "square grid wired: {}x{} cells, {} edges",
            width,
            height,
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use tilegraph_core::{BlockedValue, VertexValue};

    fn grid(
        width: i32,
        height: i32,
        wrap_around: bool,
        use_diagonals: bool,
    ) -> SquareGraph {
        let mut g = SquareGraph::with_options(width, height, wrap_around, use_diagonals).unwrap();
        g.initialize().unwrap();
        g
    }

    fn cell(g: &SquareGraph, row: i32, col: i32) -> VertexId {
        g.vertex_at((row, col)).unwrap()
    }

    #[test]
    fn corner_neighbors_with_wrap_and_diagonals() {
        let g = grid(5, 5, true, true);
        let origin = cell(&g, 0, 0);
        assert!(g.has_neighbor(origin, cell(&g, 1, 0)));
        assert!(g.has_neighbor(origin, cell(&g, 0, 1)));
        assert!(g.has_neighbor(origin, cell(&g, 1, 1)));
        assert!(g.has_neighbor(origin, cell(&g, 0, 4)));
    }

    #[test]
    fn adjacent_cells_yield_two_vertex_path() {
        let g = grid(5, 5, true, true);
        let path = g
            .shortest_path(cell(&g, 0, 0), cell(&g, 0, 4))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path, vec![cell(&g, 0, 0), cell(&g, 0, 4)]);
    }

    #[test]
    fn border_cells_connect_along_the_edge() {
        let g = grid(5, 5, false, false);
        assert!(g.has_neighbor(cell(&g, 0, 1), cell(&g, 0, 2)));
        assert!(g.has_neighbor(cell(&g, 1, 0), cell(&g, 2, 0)));
        assert!(g.has_neighbor(cell(&g, 4, 2), cell(&g, 4, 3)));
        // Corner: two links. Border non-corner: three. Interior: four.
        assert_eq!(g.degree(cell(&g, 0, 0)), 2);
        assert_eq!(g.degree(cell(&g, 0, 2)), 3);
        assert_eq!(g.degree(cell(&g, 2, 2)), 4);
    }

    #[test]
    fn no_wrap_means_no_cross_border_links() {
        let g = grid(5, 5, false, true);
        assert!(!g.has_neighbor(cell(&g, 0, 0), cell(&g, 0, 4)));
        assert!(!g.has_neighbor(cell(&g, 2, 0), cell(&g, 2, 4)));
    }

    #[test]
    fn diagonal_flag_controls_diagonal_links() {
        let plain = grid(3, 3, false, false);
        assert_eq!(plain.degree(cell(&plain, 1, 1)), 4);
        assert!(!plain.has_neighbor(cell(&plain, 1, 1), cell(&plain, 0, 0)));

        let diagonal = grid(3, 3, false, true);
        assert_eq!(diagonal.degree(cell(&diagonal, 1, 1)), 8);
        assert!(diagonal.has_neighbor(cell(&diagonal, 1, 1), cell(&diagonal, 0, 0)));
    }

    #[test]
    fn wrap_links_row_adjacent_diagonals() {
        let g = grid(5, 5, true, true);
        let left = cell(&g, 2, 0);
        assert!(g.has_neighbor(left, cell(&g, 2, 4)));
        assert!(g.has_neighbor(left, cell(&g, 1, 4)));
        assert!(g.has_neighbor(left, cell(&g, 3, 4)));
        // Rows never wrap.
        assert!(!g.has_neighbor(cell(&g, 0, 2), cell(&g, 4, 2)));
    }

    #[test]
    fn initialize_twice_fails() {
        let mut g = grid(3, 3, false, false);
        assert_eq!(g.initialize(), Err(GridError::AlreadyInitialized));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            SquareGraph::new(0, 3),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            SquareGraph::new(3, 0),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn direction_lists_follow_flags() {
        let plain = SquareGraph::new(2, 2).unwrap();
        assert_eq!(plain.directions(), &Direction::CARDINAL);
        let diagonal = SquareGraph::with_options(2, 2, false, true).unwrap();
        assert_eq!(diagonal.directions().len(), 8);
        assert!(diagonal.directions().contains(&Direction::Southwest));
    }

    #[test]
    fn vertex_at_is_empty_before_initialize() {
        let g = SquareGraph::new(3, 3).unwrap();
        assert!(g.vertex_at((0, 0)).is_none());
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn single_cell_grid() {
        let g = grid(1, 1, false, false);
        let only = cell(&g, 0, 0);
        assert_eq!(g.degree(only), 0);
        let path = g.shortest_path(only, only).unwrap().unwrap();
        assert_eq!(path, vec![only]);
    }

    #[test]
    fn single_column_wrap_does_not_self_connect() {
        let g = grid(1, 3, true, false);
        assert_eq!(g.degree(cell(&g, 1, 0)), 2);
        assert_eq!(g.degree(cell(&g, 0, 0)), 1);
    }

    #[test]
    fn path_steers_around_blocked_cells() {
        let mut g = grid(3, 3, false, false);
        for coord in [(0, 1), (1, 1)] {
            let v = g.vertex_at(coord).unwrap();
            g.set_value(v, BlockedValue).unwrap();
        }
        let source = cell(&g, 0, 0);
        let destination = cell(&g, 0, 2);
        let path = g.shortest_path(source, destination).unwrap().unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&destination));
        for coord in [(0, 1), (1, 1)] {
            let blocked = g.vertex_at(coord).unwrap();
            assert!(!path.contains(&blocked));
        }
    }

    #[test]
    fn blocked_destination_yields_no_path() {
        let mut g = grid(3, 3, false, false);
        let destination = cell(&g, 2, 2);
        g.set_value(destination, BlockedValue).unwrap();
        assert_eq!(g.shortest_path(cell(&g, 0, 0), destination).unwrap(), None);
    }

    #[derive(Debug)]
    struct Swamp;

    impl VertexValue for Swamp {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn entering_cost_modifier(&self, _source: &dyn VertexValue) -> f64 {
            10.0
        }
    }

    #[test]
    fn cost_modifier_steers_path_around_cell() {
        let mut g = grid(3, 3, false, false);
        let center = cell(&g, 1, 1);
        g.set_value(center, Swamp).unwrap();
        let path = g
            .shortest_path(cell(&g, 1, 0), cell(&g, 1, 2))
            .unwrap()
            .unwrap();
        assert!(!path.contains(&center));
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn edge_weights_steer_path() {
        let mut g = grid(3, 2, false, false);
        for (a, b) in [((0, 0), (0, 1)), ((0, 1), (0, 2))] {
            let left = g.vertex_at(a).unwrap();
            let right = g.vertex_at(b).unwrap();
            let e = g.edge_between(left, right).unwrap();
            g.set_weight(e, 5).unwrap();
        }
        let path = g
            .shortest_path(cell(&g, 0, 0), cell(&g, 0, 2))
            .unwrap()
            .unwrap();
        assert_eq!(
            path,
            vec![
                cell(&g, 0, 0),
                cell(&g, 1, 0),
                cell(&g, 1, 1),
                cell(&g, 1, 2),
                cell(&g, 0, 2),
            ]
        );
    }

    #[test]
    fn foreign_handles_are_rejected() {
        let g = grid(2, 2, false, false);
        // A handle indexing past this grid's four cells.
        let big = grid(3, 3, false, false);
        let foreign = cell(&big, 2, 2);
        assert!(g.coordinates(foreign).is_err());
        assert!(g.shortest_path(cell(&g, 0, 0), foreign).is_err());
    }

    // Pathfinding stays correct while edges are torn out at random.
    #[test]
    fn survives_random_disconnects() {
        use rand::RngExt;
        let mut rng = rand::rng();
        let mut g = grid(50, 50, false, true);
        let destination = cell(&g, 49, 49);
        for _ in 0..1000 {
            let row = rng.random_range(0..50);
            let col = rng.random_range(0..50);
            let v = cell(&g, row, col);
            if v == destination || g.is_isolated(v) {
                continue;
            }
            g.disconnect(v).unwrap();
        }
        let source = cell(&g, 0, 0);
        if let Some(path) = g.shortest_path(source, destination).unwrap() {
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&destination));
            for pair in path.windows(2) {
                assert!(g.has_neighbor(pair[0], pair[1]));
            }
        }
    }
}
