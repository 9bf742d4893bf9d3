//! Start-vertex index over the collected boundary edges.

use std::collections::HashMap;

use super::geometry::{BoundaryEdge, GridVertex};

/// Maps a grid vertex to the edges leaving it, in emission order.
///
/// Most vertices have a single outgoing edge. Two pixels touching only at a
/// corner give that corner two.
#[derive(Clone, Debug, Default)]
pub struct VertexAdjacency {
    fan: HashMap<GridVertex, Vec<usize>>,
}

impl VertexAdjacency {
    pub fn build(edges: &[BoundaryEdge]) -> Self {
        let mut fan: HashMap<GridVertex, Vec<usize>> = HashMap::with_capacity(edges.len());
        for (i, edge) in edges.iter().enumerate() {
            fan.entry(edge.start).or_insert_with(|| Vec::with_capacity(2)).push(i);
        }
        Self { fan }
    }

    /// Indices of the edges starting at `vertex`, oldest first.
    pub fn outgoing(&self, vertex: GridVertex) -> &[usize] {
        self.fan.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}
