//! Error type for grid construction and queries.

use std::fmt;

use tilegraph_core::{Coord, Direction, GraphError, HexOrientation};

/// A violated precondition of a grid operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions must both be at least 1.
    InvalidDimensions { width: i32, height: i32 },
    /// The grid's vertices and adjacency have already been built.
    AlreadyInitialized,
    /// The coordinate lies outside the backing array.
    OutOfBounds(Coord),
    /// The direction does not belong to the orientation's direction set.
    InvalidDirection {
        direction: Direction,
        orientation: HexOrientation,
    },
    /// A violation reported by the underlying graph.
    Graph(GraphError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions {width}x{height} must be at least 1x1")
            }
            Self::AlreadyInitialized => write!(f, "grid is already initialized"),
            Self::OutOfBounds(coord) => write!(f, "coordinate {coord} is out of bounds"),
            Self::InvalidDirection {
                direction,
                orientation,
            } => write!(
                f,
                "direction {direction} is not valid for orientation {orientation}"
            ),
            Self::Graph(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GraphError> for GridError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        assert_eq!(
            GridError::InvalidDimensions {
                width: 0,
                height: 5
            }
            .to_string(),
            "grid dimensions 0x5 must be at least 1x1"
        );
        assert_eq!(
            GridError::OutOfBounds(Coord::new(-1, 3)).to_string(),
            "coordinate (-1, 3) is out of bounds"
        );
        assert_eq!(
            GridError::InvalidDirection {
                direction: Direction::North,
                orientation: HexOrientation::HorizontalOdd,
            }
            .to_string(),
            "direction north is not valid for orientation horizontal-odd"
        );
    }

    #[test]
    fn graph_errors_pass_through() {
        let mut g = tilegraph_core::Graph::new();
        let a = g.add(tilegraph_core::IndexValue(0));
        let b = g.add(tilegraph_core::IndexValue(1));
        let inner = GraphError::AlreadyConnected(a, b);
        let wrapped: GridError = inner.into();
        assert_eq!(wrapped.to_string(), inner.to_string());
        assert!(wrapped.source().is_some());
    }
}
