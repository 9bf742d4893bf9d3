//! Boundary edge collection.
//!
//! Every solid pixel contributes one directed edge per side that faces an
//! empty or off-grid neighbour. Sides are visited top, right, bottom, left and
//! pixels row by row, which fixes the emission order the tracer relies on for
//! its tie-break.

use super::geometry::{BoundaryEdge, GridVertex};
use super::mask::SolidityMask;

/// One side of a pixel cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Emission order for the sides of one pixel.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Offset to the pixel across this side.
    pub const fn neighbor_offset(self) -> (i32, i32) {
        match self {
            Side::Top => (0, 1),
            Side::Right => (1, 0),
            Side::Bottom => (0, -1),
            Side::Left => (-1, 0),
        }
    }

    /// Clockwise edge along this side of pixel `(x, y)`.
    pub const fn edge(self, x: i32, y: i32) -> BoundaryEdge {
        let (start, end) = match self {
            Side::Top => ((x, y + 1), (x + 1, y + 1)),
            Side::Right => ((x + 1, y + 1), (x + 1, y)),
            Side::Bottom => ((x + 1, y), (x, y)),
            Side::Left => ((x, y), (x, y + 1)),
        };
        BoundaryEdge::new(
            GridVertex::new(start.0, start.1),
            GridVertex::new(end.0, end.1),
        )
    }
}

/// Collect every solid/empty crossing of the mask as a directed edge.
///
/// An empty mask yields no edges.
pub fn collect_edges(mask: &SolidityMask) -> Vec<BoundaryEdge> {
    // Extents are checked against i32 when the mask is built
    let width = mask.width() as i32;
    let height = mask.height() as i32;
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if !mask.is_solid(x, y) {
                continue;
            }
            for side in Side::ALL {
                let (dx, dy) = side.neighbor_offset();
                if !mask.is_solid(x + dx, y + dy) {
                    edges.push(side.edge(x, y));
                }
            }
        }
    }

    edges
}
