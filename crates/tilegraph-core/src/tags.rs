//! Adjacency tags: [`Direction`] and [`HexOrientation`].
//!
//! Both are plain closed enums compared structurally. Directions carry their
//! square-lattice (Δrow, Δcol) offset; hex offsets depend on orientation and
//! row parity and live with the hex topology.

use std::fmt;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A compass direction between adjacent cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    /// The four orthogonal directions, clockwise from north.
    pub const CARDINAL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The four diagonal directions, clockwise from northeast.
    pub const DIAGONAL: [Self; 4] = [
        Self::Northeast,
        Self::Southeast,
        Self::Southwest,
        Self::Northwest,
    ];

    /// (Δrow, Δcol) offset on a square lattice. Row grows down.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::Northeast => (-1, 1),
            Self::East => (0, 1),
            Self::Southeast => (1, 1),
            Self::South => (1, 0),
            Self::Southwest => (1, -1),
            Self::West => (0, -1),
            Self::Northwest => (-1, -1),
        }
    }

    /// Lowercase label, e.g. `"northeast"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// HexOrientation
// ---------------------------------------------------------------------------

/// Layout of a hexagonal grid over its rectangular backing array.
///
/// Horizontal orientations lay hexes in rows (east/west neighbors exist);
/// vertical orientations lay them in columns (north/south neighbors exist).
/// The odd/even half names which row parity is displaced by half a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexOrientation {
    #[default]
    HorizontalOdd,
    HorizontalEven,
    VerticalOdd,
    VerticalEven,
}

impl HexOrientation {
    /// Whether hexes are laid out in rows.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalOdd | Self::HorizontalEven)
    }

    /// The six neighbor directions of this orientation, in offset-table
    /// order.
    pub const fn directions(self) -> [Direction; 6] {
        if self.is_horizontal() {
            [
                Direction::Northeast,
                Direction::East,
                Direction::Southeast,
                Direction::Southwest,
                Direction::West,
                Direction::Northwest,
            ]
        } else {
            [
                Direction::North,
                Direction::Northeast,
                Direction::Southeast,
                Direction::South,
                Direction::Southwest,
                Direction::Northwest,
            ]
        }
    }

    /// Lowercase label, e.g. `"horizontal-odd"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HorizontalOdd => "horizontal-odd",
            Self::HorizontalEven => "horizontal-even",
            Self::VerticalOdd => "vertical-odd",
            Self::VerticalEven => "vertical-even",
        }
    }
}

impl fmt::Display for HexOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_offsets_cancel() {
        let (nr, nc) = Direction::North.offset();
        let (sr, sc) = Direction::South.offset();
        assert_eq!((nr + sr, nc + sc), (0, 0));
        let (er, ec) = Direction::East.offset();
        let (wr, wc) = Direction::West.offset();
        assert_eq!((er + wr, ec + wc), (0, 0));
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!(Direction::Southwest.to_string(), "southwest");
    }

    #[test]
    fn default_orientation() {
        assert_eq!(HexOrientation::default(), HexOrientation::HorizontalOdd);
    }

    #[test]
    fn orientation_axes() {
        assert!(HexOrientation::HorizontalOdd.is_horizontal());
        assert!(HexOrientation::HorizontalEven.is_horizontal());
        assert!(!HexOrientation::VerticalOdd.is_horizontal());
        assert!(!HexOrientation::VerticalEven.is_horizontal());
    }

    #[test]
    fn orientation_direction_sets() {
        let horizontal = HexOrientation::HorizontalOdd.directions();
        assert!(horizontal.contains(&Direction::East));
        assert!(horizontal.contains(&Direction::West));
        assert!(!horizontal.contains(&Direction::North));

        let vertical = HexOrientation::VerticalEven.directions();
        assert!(vertical.contains(&Direction::North));
        assert!(vertical.contains(&Direction::South));
        assert!(!vertical.contains(&Direction::East));
    }

    #[test]
    fn orientation_labels() {
        assert_eq!(HexOrientation::VerticalEven.to_string(), "vertical-even");
    }
}
