//! Grid-corner vertices and directed boundary edges.
//!
//! Pixel `(x, y)` occupies the unit square with corners `(x, y)` and
//! `(x + 1, y + 1)`. Vertices address those corners, so a `w x h` mask has
//! vertices in `[0, w] x [0, h]`. The y axis points up (row 0 is the bottom row).

/// A corner of the pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridVertex {
    pub x: i32,
    pub y: i32,
}

impl GridVertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridVertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<GridVertex> for (i32, i32) {
    fn from(v: GridVertex) -> Self {
        (v.x, v.y)
    }
}

/// A directed unit-length edge between two grid corners.
///
/// Walking from `start` to `end` keeps the solid pixel on the right-hand side,
/// which makes outer boundaries clockwise and hole boundaries
/// counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryEdge {
    pub start: GridVertex,
    pub end: GridVertex,
}

impl BoundaryEdge {
    pub const fn new(start: GridVertex, end: GridVertex) -> Self {
        Self { start, end }
    }
}
