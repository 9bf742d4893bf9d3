//! Pixel-perfect outline tracing.
//!
//! Turns a binary solidity mask into the minimal set of polygons whose union
//! is exactly the solid region:
//! 1. **Mask**: alpha test per pixel (`alpha >= threshold` is solid)
//! 2. **Edges**: one directed unit edge per solid/empty pixel side
//! 3. **Adjacency**: start-vertex index over those edges
//! 4. **Tracer**: follows edges tail to head into closed loops
//! 5. **Reduce**: drops collinear vertices
//!
//! Outer boundaries come out clockwise and holes counter-clockwise, so no
//! separate classification pass is needed. Polygons are returned in discovery
//! order; holes are not grouped with their enclosing outline.

pub mod adjacency;
pub mod edges;
pub mod geometry;
pub mod mask;
pub mod polygon;
pub mod reduce;
pub mod threshold;
pub mod tracer;

use ndarray::ArrayView3;

pub use adjacency::VertexAdjacency;
pub use edges::{collect_edges, Side};
pub use geometry::{BoundaryEdge, GridVertex};
pub use mask::SolidityMask;
pub use polygon::{polygons_to_flat, Polygon};
pub use reduce::reduce_collinear;
pub use threshold::AlphaThreshold;
pub use tracer::{trace_loops, LoopTracer, TracedLoops};

use crate::error::TraceError;

/// Trace result with metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceResult {
    /// Outline polygons in discovery order
    pub polygons: Vec<Polygon>,
    /// Number of boundary edges collected from the mask
    pub edge_count: usize,
    /// Loops dropped because they failed to close
    pub dropped_loops: usize,
}

/// Trace all outline polygons of a mask.
///
/// A mask without solid pixels yields an empty list.
pub fn trace(mask: &SolidityMask) -> Vec<Polygon> {
    trace_detailed(mask).polygons
}

/// Trace all outline polygons of a mask with detailed results.
pub fn trace_detailed(mask: &SolidityMask) -> TraceResult {
    let edges = collect_edges(mask);
    if edges.is_empty() {
        return TraceResult::default();
    }

    let traced = trace_loops(&edges);
    TraceResult {
        polygons: traced.polygons,
        edge_count: edges.len(),
        dropped_loops: traced.dropped_loops,
    }
}

/// Trace an 8-bit alpha buffer.
///
/// # Arguments
/// * `alpha` - Row-major alpha values (0-255), first row at the bottom
/// * `width` - Mask width in pixels
/// * `height` - Mask height in pixels
/// * `threshold` - Alpha threshold (0.0-1.0); `alpha / 255 >= threshold` is solid
pub fn trace_alpha_u8(
    alpha: &[u8],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<Polygon>, TraceError> {
    let threshold = AlphaThreshold::new(threshold)?;
    let mask = SolidityMask::from_alpha_u8(alpha, width, height, threshold)?;
    Ok(trace(&mask))
}

/// Trace a float alpha buffer (0.0-1.0).
pub fn trace_alpha_f32(
    alpha: &[f32],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<Polygon>, TraceError> {
    let threshold = AlphaThreshold::new(threshold)?;
    let mask = SolidityMask::from_alpha_f32(alpha, width, height, threshold)?;
    Ok(trace(&mask))
}

/// Trace an RGBA8 buffer by its alpha channel.
pub fn trace_rgba_u8(
    rgba: &[u8],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<Polygon>, TraceError> {
    let threshold = AlphaThreshold::new(threshold)?;
    let mask = SolidityMask::from_rgba_u8(rgba, width, height, threshold)?;
    Ok(trace(&mask))
}

/// Trace an RGBA float buffer by its alpha channel.
pub fn trace_rgba_f32(
    rgba: &[f32],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<Polygon>, TraceError> {
    let threshold = AlphaThreshold::new(threshold)?;
    let mask = SolidityMask::from_rgba_f32(rgba, width, height, threshold)?;
    Ok(trace(&mask))
}

/// Trace a `(height, width, channels)` u8 image with 1, 2 or 4 channels.
pub fn trace_image_u8(image: ArrayView3<u8>, threshold: f32) -> Result<Vec<Polygon>, TraceError> {
    let threshold = AlphaThreshold::new(threshold)?;
    let mask = SolidityMask::from_image_u8(image, threshold)?;
    Ok(trace(&mask))
}

/// Trace a `(height, width, channels)` f32 image with 1, 2 or 4 channels.
pub fn trace_image_f32(image: ArrayView3<f32>, threshold: f32) -> Result<Vec<Polygon>, TraceError> {
    let threshold = AlphaThreshold::new(threshold)?;
    let mask = SolidityMask::from_image_f32(image, threshold)?;
    Ok(trace(&mask))
}
