//! Shared rendering helpers for the tilegraph demo binaries.

use std::collections::HashSet;

use tilegraph_core::{BlockedValue, Graph, HexOrientation, VertexId};
use tilegraph_grids::{HexGraph, SquareGraph};

fn glyph(graph: &Graph, v: VertexId, path: &[VertexId], on_path: &HashSet<VertexId>) -> char {
    if path.first() == Some(&v) {
        '@'
    } else if path.last() == Some(&v) {
        'x'
    } else if on_path.contains(&v) {
        '*'
    } else if graph
        .value(v)
        .is_some_and(|value| value.as_any().is::<BlockedValue>())
    {
        '#'
    } else {
        '.'
    }
}

/// Draw a square grid one character per cell: `@` start, `x` goal, `*`
/// path, `#` blocked, `.` open.
pub fn render_square(grid: &SquareGraph, path: &[VertexId]) -> String {
    let on_path: HashSet<VertexId> = path.iter().copied().collect();
    let mut out = String::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            match grid.vertex_at((row, col)) {
                Some(v) => out.push(glyph(grid, v, path, &on_path)),
                None => out.push(' '),
            }
        }
        out.push('\n');
    }
    out
}

/// Same glyphs on a hex layout. The displaced row parity is indented half
/// a cell and cells are spaced out, so the staggered columns line up.
pub fn render_hex(grid: &HexGraph, path: &[VertexId]) -> String {
    let on_path: HashSet<VertexId> = path.iter().copied().collect();
    let displaced = match grid.orientation() {
        HexOrientation::HorizontalOdd | HexOrientation::VerticalOdd => 1,
        HexOrientation::HorizontalEven | HexOrientation::VerticalEven => 0,
    };
    let mut out = String::new();
    for row in 0..grid.height() {
        if row % 2 == displaced {
            out.push(' ');
        }
        for col in 0..grid.width() {
            match grid.vertex_at((row, col)) {
                Some(v) => out.push(glyph(grid, v, path, &on_path)),
                None => out.push(' '),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
