//! Sprite Outline Rust Extensions
//!
//! Pixel-perfect outline extraction from sprite alpha masks, with Python
//! bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Masks are built from row-major buffers whose first row is the bottom of
//! the sprite (y axis up):
//! - **Alpha**: (height, width) - single alpha value per pixel
//! - **Gray + alpha**: (height, width, 2)
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//!
//! Both bit depths are supported:
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! A pixel is solid when its alpha is at or above the threshold.
//!
//! ## Output
//! Polygons use integer pixel-corner coordinates in the same space as the
//! input buffer. Outer outlines wind clockwise and holes counter-clockwise;
//! collinear vertices are removed. Converting to world units is left to the
//! caller.

pub mod error;
pub mod outline;
pub mod sprite;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::TraceError;
pub use outline::{
    trace, trace_alpha_f32, trace_alpha_u8, trace_detailed, trace_rgba_f32, trace_rgba_u8,
    AlphaThreshold, GridVertex, Polygon, SolidityMask, TraceResult,
};
pub use sprite::{trace_sprite, trace_sprites, SpriteImage, SpriteRect};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::TraceError;
    use crate::outline::{trace, AlphaThreshold, Polygon, SolidityMask};

    fn to_py_err(err: TraceError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn to_paths(polygons: Vec<Polygon>) -> Vec<Vec<(i32, i32)>> {
        polygons.iter().map(Polygon::to_tuples).collect()
    }

    /// Trace a u8 alpha mask of shape (height, width).
    ///
    /// Returns a list of polygons, each a list of (x, y) pixel-corner tuples.
    #[pyfunction]
    #[pyo3(signature = (alpha, threshold=0.5))]
    pub fn trace_alpha<'py>(
        alpha: PyReadonlyArray2<'py, u8>,
        threshold: f32,
    ) -> PyResult<Vec<Vec<(i32, i32)>>> {
        let threshold = AlphaThreshold::new(threshold).map_err(to_py_err)?;
        let mask = SolidityMask::from_alpha_view_u8(alpha.as_array(), threshold).map_err(to_py_err)?;
        Ok(to_paths(trace(&mask)))
    }

    /// Trace an f32 alpha mask (0.0-1.0) of shape (height, width).
    #[pyfunction]
    #[pyo3(signature = (alpha, threshold=0.5))]
    pub fn trace_alpha_f32<'py>(
        alpha: PyReadonlyArray2<'py, f32>,
        threshold: f32,
    ) -> PyResult<Vec<Vec<(i32, i32)>>> {
        let threshold = AlphaThreshold::new(threshold).map_err(to_py_err)?;
        let mask = SolidityMask::from_alpha_view_f32(alpha.as_array(), threshold).map_err(to_py_err)?;
        Ok(to_paths(trace(&mask)))
    }

    /// Trace a u8 image of shape (height, width, channels) by its alpha channel.
    ///
    /// Channels must be 1 (alpha), 2 (gray + alpha) or 4 (RGBA).
    #[pyfunction]
    #[pyo3(signature = (image, threshold=0.5))]
    pub fn trace_rgba<'py>(
        image: PyReadonlyArray3<'py, u8>,
        threshold: f32,
    ) -> PyResult<Vec<Vec<(i32, i32)>>> {
        let threshold = AlphaThreshold::new(threshold).map_err(to_py_err)?;
        let mask = SolidityMask::from_image_u8(image.as_array(), threshold).map_err(to_py_err)?;
        Ok(to_paths(trace(&mask)))
    }

    /// Trace an f32 image (0.0-1.0) of shape (height, width, channels).
    #[pyfunction]
    #[pyo3(signature = (image, threshold=0.5))]
    pub fn trace_rgba_f32<'py>(
        image: PyReadonlyArray3<'py, f32>,
        threshold: f32,
    ) -> PyResult<Vec<Vec<(i32, i32)>>> {
        let threshold = AlphaThreshold::new(threshold).map_err(to_py_err)?;
        let mask = SolidityMask::from_image_f32(image.as_array(), threshold).map_err(to_py_err)?;
        Ok(to_paths(trace(&mask)))
    }

    /// Sprite outline Rust extension module
    #[pymodule]
    pub fn sprite_outline(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(trace_alpha, m)?)?;
        m.add_function(wrap_pyfunction!(trace_alpha_f32, m)?)?;
        m.add_function(wrap_pyfunction!(trace_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(trace_rgba_f32, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::sprite_outline;
