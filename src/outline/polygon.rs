//! Closed outline polygons in pixel space.

use super::geometry::GridVertex;

/// A closed, axis-aligned polygon with integer grid-corner vertices.
///
/// The first vertex is not repeated at the end. Outer boundaries wind
/// clockwise and holes counter-clockwise (y axis up).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polygon {
    vertices: Vec<GridVertex>,
}

impl Polygon {
    pub(crate) fn from_vertices(vertices: Vec<GridVertex>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[GridVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive vertex pairs, including the closing pair.
    pub fn edges(&self) -> impl Iterator<Item = (GridVertex, GridVertex)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Exact enclosed area, positive for clockwise winding.
    ///
    /// Outer boundaries are positive and holes negative, so summing over a
    /// trace gives the solid pixel count. Axis-aligned integer polygons always
    /// have an integer area.
    pub fn signed_area(&self) -> i64 {
        let doubled: i64 = self
            .edges()
            .map(|(a, b)| b.x as i64 * a.y as i64 - a.x as i64 * b.y as i64)
            .sum();
        doubled / 2
    }

    pub fn is_outer(&self) -> bool {
        self.signed_area() > 0
    }

    pub fn is_hole(&self) -> bool {
        self.signed_area() < 0
    }

    /// Vertices as `(x, y)` tuples.
    pub fn to_tuples(&self) -> Vec<(i32, i32)> {
        self.vertices.iter().map(|&v| v.into()).collect()
    }
}

/// Flatten polygons to an i32 array for FFI.
///
/// Format: `[num_polygons, len1, x1, y1, x2, y2, ..., len2, ...]`
pub fn polygons_to_flat(polygons: &[Polygon]) -> Vec<i32> {
    let total: usize = polygons.iter().map(|p| 1 + p.len() * 2).sum();
    let mut result = Vec::with_capacity(1 + total);
    result.push(polygons.len() as i32);

    for polygon in polygons {
        result.push(polygon.len() as i32);
        for v in polygon.vertices() {
            result.push(v.x);
            result.push(v.y);
        }
    }

    result
}
