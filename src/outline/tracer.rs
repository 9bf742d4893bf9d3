//! Loop tracing over the directed boundary edges.
//!
//! Each edge is consumed exactly once. A loop starts at the oldest unused
//! edge and follows, at every vertex, the oldest unused edge leaving it until
//! the walk returns to the start vertex.

use super::adjacency::VertexAdjacency;
use super::geometry::{BoundaryEdge, GridVertex};
use super::polygon::Polygon;
use super::reduce::reduce_collinear;

/// Outcome of walking one loop.
#[derive(Debug, PartialEq, Eq)]
enum LoopWalk {
    Closed(Vec<GridVertex>),
    /// Walk hit a vertex with no unused outgoing edge.
    Broken { at: GridVertex, walked: usize },
}

/// Polygons recovered from an edge set plus tracing diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TracedLoops {
    pub polygons: Vec<Polygon>,
    /// Loops abandoned because a continuation edge was missing.
    pub dropped_loops: usize,
}

/// Tracing state for one edge set.
pub struct LoopTracer<'a> {
    edges: &'a [BoundaryEdge],
    adjacency: &'a VertexAdjacency,
    used: Vec<bool>,
}

impl<'a> LoopTracer<'a> {
    pub fn new(edges: &'a [BoundaryEdge], adjacency: &'a VertexAdjacency) -> Self {
        Self {
            edges,
            adjacency,
            used: vec![false; edges.len()],
        }
    }

    /// Trace every loop, reduce it, and keep those with at least three corners.
    pub fn trace_all(mut self) -> TracedLoops {
        let mut result = TracedLoops::default();

        for first in 0..self.edges.len() {
            if self.used[first] {
                continue;
            }

            match self.walk(first) {
                LoopWalk::Closed(mut vertices) => {
                    if vertices.len() < 3 {
                        continue;
                    }
                    reduce_collinear(&mut vertices);
                    if vertices.len() >= 3 {
                        result.polygons.push(Polygon::from_vertices(vertices));
                    }
                }
                LoopWalk::Broken { at, walked } => {
                    log::debug!(
                        "dropping open boundary loop at ({}, {}) after {} edges",
                        at.x,
                        at.y,
                        walked
                    );
                    result.dropped_loops += 1;
                }
            }
        }

        log::trace!(
            "traced {} polygons from {} edges ({} dropped)",
            result.polygons.len(),
            self.edges.len(),
            result.dropped_loops
        );
        result
    }

    /// Follow edges from `first` until the walk closes or breaks.
    fn walk(&mut self, first: usize) -> LoopWalk {
        let start = self.edges[first].start;
        let mut vertices = Vec::with_capacity(64);
        let mut edge_idx = first;

        loop {
            self.used[edge_idx] = true;
            let edge = self.edges[edge_idx];
            vertices.push(edge.start);

            if edge.end == start {
                return LoopWalk::Closed(vertices);
            }

            match self.next_unused(edge.end) {
                Some(next) => edge_idx = next,
                None => {
                    return LoopWalk::Broken {
                        at: edge.end,
                        walked: vertices.len(),
                    }
                }
            }
        }
    }

    /// Oldest unused edge leaving `vertex`.
    fn next_unused(&self, vertex: GridVertex) -> Option<usize> {
        self.adjacency
            .outgoing(vertex)
            .iter()
            .copied()
            .find(|&i| !self.used[i])
    }
}

/// Trace closed polygons from a set of directed boundary edges.
pub fn trace_loops(edges: &[BoundaryEdge]) -> TracedLoops {
    let adjacency = VertexAdjacency::build(edges);
    LoopTracer::new(edges, &adjacency).trace_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::edges::collect_edges;
    use crate::outline::mask::SolidityMask;

    fn v(x: i32, y: i32) -> GridVertex {
        GridVertex::new(x, y)
    }

    fn e(a: (i32, i32), b: (i32, i32)) -> BoundaryEdge {
        BoundaryEdge::new(a.into(), b.into())
    }

    #[test]
    fn test_single_pixel_loop() {
        let mask = SolidityMask::from_bools(&[true], 1, 1).unwrap();
        let traced = trace_loops(&collect_edges(&mask));
        assert_eq!(traced.dropped_loops, 0);
        assert_eq!(traced.polygons.len(), 1);
        assert_eq!(
            traced.polygons[0].vertices(),
            &[v(0, 1), v(1, 1), v(1, 0), v(0, 0)]
        );
    }

    #[test]
    fn test_open_chain_is_dropped() {
        // Three sides of a square with the closing edge missing
        let edges = [e((0, 1), (1, 1)), e((1, 1), (1, 0)), e((1, 0), (0, 0))];
        let traced = trace_loops(&edges);
        assert!(traced.polygons.is_empty());
        assert_eq!(traced.dropped_loops, 1);
    }

    #[test]
    fn test_broken_loop_does_not_stop_others() {
        let edges = [
            // open chain
            e((0, 1), (1, 1)),
            e((1, 1), (1, 0)),
            // closed unit square elsewhere
            e((5, 6), (6, 6)),
            e((6, 6), (6, 5)),
            e((6, 5), (5, 5)),
            e((5, 5), (5, 6)),
        ];
        let traced = trace_loops(&edges);
        assert_eq!(traced.dropped_loops, 1);
        assert_eq!(traced.polygons.len(), 1);
        assert_eq!(traced.polygons[0].signed_area(), 1);
    }

    #[test]
    fn test_walk_reports_break_position() {
        let edges = [e((0, 0), (1, 0)), e((1, 0), (2, 0))];
        let adjacency = VertexAdjacency::build(&edges);
        let mut tracer = LoopTracer::new(&edges, &adjacency);
        assert_eq!(tracer.walk(0), LoopWalk::Broken { at: v(2, 0), walked: 2 });
    }

    #[test]
    fn test_diagonal_pinch_uses_every_edge() {
        // Pixels (0,0) and (1,1) touch at corner (1,1)
        let mask = SolidityMask::from_bools(&[true, false, false, true], 2, 2).unwrap();
        let edges = collect_edges(&mask);
        let traced = trace_loops(&edges);
        assert_eq!(traced.dropped_loops, 0);
        let perimeter: usize = traced
            .polygons
            .iter()
            .map(|p| p.edges().map(|(a, b)| ((b.x - a.x).abs() + (b.y - a.y).abs()) as usize).sum::<usize>())
            .sum();
        assert_eq!(perimeter, edges.len());
        let area: i64 = traced.polygons.iter().map(Polygon::signed_area).sum();
        assert_eq!(area, 2);
    }

    fn corners(traced: &TracedLoops) -> Vec<Vec<(i32, i32)>> {
        traced.polygons.iter().map(Polygon::to_tuples).collect()
    }

    #[test]
    fn test_rising_diagonal_splits_at_pinch() {
        // Pixels (0,0) and (1,1); the first walk reaches (1,1) with both
        // outgoing edges unused and takes the older one
        let mask = SolidityMask::from_bools(&[true, false, false, true], 2, 2).unwrap();
        let traced = trace_loops(&collect_edges(&mask));
        assert_eq!(
            corners(&traced),
            vec![
                vec![(0, 1), (1, 1), (1, 0), (0, 0)],
                vec![(1, 2), (2, 2), (2, 1), (1, 1)],
            ]
        );
    }

    #[test]
    fn test_falling_diagonal_splits_at_pinch() {
        // Pixels (1,0) and (0,1); the first walk starts on the pinch corner
        let mask = SolidityMask::from_bools(&[false, true, true, false], 2, 2).unwrap();
        let traced = trace_loops(&collect_edges(&mask));
        assert_eq!(
            corners(&traced),
            vec![
                vec![(1, 1), (2, 1), (2, 0), (1, 0)],
                vec![(0, 2), (1, 2), (1, 1), (0, 1)],
            ]
        );
    }

    #[test]
    fn test_pinch_entered_mid_walk_joins_both_lobes() {
        // Rows bottom-up: "#.#", "##." -- the L on the left touches pixel
        // (2,0) at corner (2,1). The walk starts at (1,1), arrives at the
        // pinch from above and takes the older edge into the right lobe, so
        // the result is one figure-eight that visits (2,1) twice.
        let cells = [true, false, true, true, true, false];
        let mask = SolidityMask::from_bools(&cells, 3, 2).unwrap();
        let traced = trace_loops(&collect_edges(&mask));
        assert_eq!(traced.dropped_loops, 0);
        assert_eq!(
            corners(&traced),
            vec![vec![
                (1, 1),
                (1, 0),
                (0, 0),
                (0, 2),
                (2, 2),
                (2, 1),
                (3, 1),
                (3, 0),
                (2, 0),
                (2, 1),
            ]]
        );
        assert_eq!(traced.polygons[0].signed_area(), 4);
    }
}
