//! WebAssembly exports for outline tracing.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Output Layout
//!
//! Every export returns the flat polygon layout produced by
//! [`polygons_to_flat`]: `[num_polygons, len1, x1, y1, ..., len2, ...]`.
//! Invalid input is reported as a thrown string.

use wasm_bindgen::prelude::*;

use crate::error::TraceError;
use crate::outline::{polygons_to_flat, trace_alpha_u8, trace_rgba_f32, trace_rgba_u8};

fn to_js_error(err: TraceError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Trace an 8-bit alpha mask.
///
/// # Arguments
/// * `data` - Flat array of alpha bytes (length = width * height), first row at the bottom
/// * `width` - Mask width in pixels
/// * `height` - Mask height in pixels
/// * `threshold` - Alpha threshold (0.0-1.0); pixels with alpha >= threshold are solid
///
/// # Returns
/// Flat polygon array
#[wasm_bindgen]
pub fn trace_alpha_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<i32>, JsValue> {
    let polygons = trace_alpha_u8(data, width, height, threshold).map_err(to_js_error)?;
    Ok(polygons_to_flat(&polygons))
}

/// Trace an RGBA u8 image by its alpha channel.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `threshold` - Alpha threshold (0.0-1.0)
#[wasm_bindgen]
pub fn trace_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<i32>, JsValue> {
    let polygons = trace_rgba_u8(data, width, height, threshold).map_err(to_js_error)?;
    Ok(polygons_to_flat(&polygons))
}

/// Trace an RGBA f32 image (values 0.0-1.0) by its alpha channel.
#[wasm_bindgen]
pub fn trace_rgba_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<i32>, JsValue> {
    let polygons = trace_rgba_f32(data, width, height, threshold).map_err(to_js_error)?;
    Ok(polygons_to_flat(&polygons))
}
