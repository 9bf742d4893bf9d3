//! Binary solidity mask built from alpha or colour buffers.
//!
//! ## Supported Formats
//!
//! | Format | Layout | Type | Alpha channel |
//! |--------|--------|------|---------------|
//! | Alpha8 | (H, W) | u8 | the value itself, 0-255 |
//! | Alpha float | (H, W) | f32 | the value itself, 0.0-1.0 |
//! | Gray + alpha | (H, W, 2) | u8 / f32 | channel 1 |
//! | RGBA | (H, W, 4) | u8 / f32 | channel 3 |
//!
//! Flat buffers are row-major with the origin at the bottom-left: the first
//! row of the buffer is grid row `y = 0`.

use ndarray::{Array2, ArrayView2, ArrayView3};
use rayon::prelude::*;

use super::threshold::AlphaThreshold;
use crate::error::TraceError;

/// A width x height grid of solid/empty pixels.
///
/// Lookups outside the grid report empty, which is what lets border pixels
/// produce boundary edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolidityMask {
    cells: Array2<bool>,
}

impl SolidityMask {
    /// Wrap an existing `(height, width)` boolean grid.
    pub fn from_array(cells: Array2<bool>) -> Result<Self, TraceError> {
        let (height, width) = cells.dim();
        TraceError::check_extents(width, height)?;
        Ok(Self { cells })
    }

    /// Build a mask from a row-major boolean buffer.
    pub fn from_bools(cells: &[bool], width: usize, height: usize) -> Result<Self, TraceError> {
        TraceError::check_extents(width, height)?;
        TraceError::check_len(TraceError::buffer_len(width, height, 1)?, cells.len())?;
        let cells = Array2::from_shape_vec((height, width), cells.to_vec())?;
        Ok(Self { cells })
    }

    /// Classify an 8-bit alpha buffer of `width * height` values.
    pub fn from_alpha_u8(
        alpha: &[u8],
        width: usize,
        height: usize,
        threshold: AlphaThreshold,
    ) -> Result<Self, TraceError> {
        TraceError::check_extents(width, height)?;
        TraceError::check_len(TraceError::buffer_len(width, height, 1)?, alpha.len())?;
        let view = ArrayView2::from_shape((height, width), alpha)?;
        Self::from_alpha_view_u8(view, threshold)
    }

    /// Classify a float alpha buffer of `width * height` values (0.0-1.0).
    pub fn from_alpha_f32(
        alpha: &[f32],
        width: usize,
        height: usize,
        threshold: AlphaThreshold,
    ) -> Result<Self, TraceError> {
        TraceError::check_extents(width, height)?;
        TraceError::check_len(TraceError::buffer_len(width, height, 1)?, alpha.len())?;
        let view = ArrayView2::from_shape((height, width), alpha)?;
        Self::from_alpha_view_f32(view, threshold)
    }

    /// Classify an RGBA8 buffer of `width * height * 4` bytes.
    pub fn from_rgba_u8(
        rgba: &[u8],
        width: usize,
        height: usize,
        threshold: AlphaThreshold,
    ) -> Result<Self, TraceError> {
        TraceError::check_extents(width, height)?;
        TraceError::check_len(TraceError::buffer_len(width, height, 4)?, rgba.len())?;
        let view = ArrayView3::from_shape((height, width, 4), rgba)?;
        Self::from_image_u8(view, threshold)
    }

    /// Classify an RGBA float buffer of `width * height * 4` values.
    pub fn from_rgba_f32(
        rgba: &[f32],
        width: usize,
        height: usize,
        threshold: AlphaThreshold,
    ) -> Result<Self, TraceError> {
        TraceError::check_extents(width, height)?;
        TraceError::check_len(TraceError::buffer_len(width, height, 4)?, rgba.len())?;
        let view = ArrayView3::from_shape((height, width, 4), rgba)?;
        Self::from_image_f32(view, threshold)
    }

    pub fn from_alpha_view_u8(
        alpha: ArrayView2<u8>,
        threshold: AlphaThreshold,
    ) -> Result<Self, TraceError> {
        classify(alpha, |a| threshold.passes_u8(a))
    }

    pub fn from_alpha_view_f32(
        alpha: ArrayView2<f32>,
        threshold: AlphaThreshold,
    ) -> Result<Self, TraceError> {
        classify(alpha, |a| threshold.passes_f32(a))
    }

    /// Classify a `(height, width, channels)` u8 image by its alpha channel.
    ///
    /// Channel count must be 1, 2 or 4; the last channel is the alpha.
    pub fn from_image_u8(
        image: ArrayView3<u8>,
        threshold: AlphaThreshold,
    ) -> Result<Self, TraceError> {
        let channels = image.dim().2;
        let alpha = image.index_axis_move(ndarray::Axis(2), alpha_channel(channels)?);
        Self::from_alpha_view_u8(alpha, threshold)
    }

    /// Classify a `(height, width, channels)` f32 image by its alpha channel.
    pub fn from_image_f32(
        image: ArrayView3<f32>,
        threshold: AlphaThreshold,
    ) -> Result<Self, TraceError> {
        let channels = image.dim().2;
        let alpha = image.index_axis_move(ndarray::Axis(2), alpha_channel(channels)?);
        Self::from_alpha_view_f32(alpha, threshold)
    }

    pub fn width(&self) -> usize {
        self.cells.dim().1
    }

    pub fn height(&self) -> usize {
        self.cells.dim().0
    }

    /// Whether pixel `(x, y)` is solid. Off-grid coordinates are empty.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.cells
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(false)
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&solid| solid).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&solid| solid)
    }

    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }
}

/// Index of the alpha channel for a given channel count.
fn alpha_channel(channels: usize) -> Result<usize, TraceError> {
    match channels {
        1 | 2 | 4 => Ok(channels - 1),
        other => Err(TraceError::UnsupportedChannels(other)),
    }
}

/// Run the alpha test over every pixel, one row per rayon task.
fn classify<T, F>(alpha: ArrayView2<T>, solid: F) -> Result<SolidityMask, TraceError>
where
    T: Copy + Sync,
    F: Fn(T) -> bool + Sync,
{
    let (height, width) = alpha.dim();
    TraceError::check_extents(width, height)?;

    let mut cells = vec![false; width * height];
    cells
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = solid(alpha[[y, x]]);
            }
        });

    let cells = Array2::from_shape_vec((height, width), cells)?;
    Ok(SolidityMask { cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_alpha_u8_threshold() {
        let alpha = [0u8, 127, 128, 255];
        let mask = SolidityMask::from_alpha_u8(&alpha, 2, 2, AlphaThreshold::default()).unwrap();
        assert!(!mask.is_solid(0, 0));
        assert!(!mask.is_solid(1, 0));
        assert!(mask.is_solid(0, 1));
        assert!(mask.is_solid(1, 1));
        assert_eq!(mask.solid_count(), 2);
    }

    #[test]
    fn test_row_major_bottom_up() {
        // 3x2: only the first buffer row (y = 0) is solid
        let alpha = [1.0f32, 1.0, 1.0, 0.0, 0.0, 0.0];
        let mask = SolidityMask::from_alpha_f32(&alpha, 3, 2, AlphaThreshold::default()).unwrap();
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);
        for x in 0..3 {
            assert!(mask.is_solid(x, 0));
            assert!(!mask.is_solid(x, 1));
        }
    }

    #[test]
    fn test_out_of_bounds_is_empty() {
        let mask = SolidityMask::from_bools(&[true], 1, 1).unwrap();
        assert!(mask.is_solid(0, 0));
        assert!(!mask.is_solid(-1, 0));
        assert!(!mask.is_solid(0, -1));
        assert!(!mask.is_solid(1, 0));
        assert!(!mask.is_solid(0, 1));
    }

    #[test]
    fn test_rgba_uses_alpha_channel() {
        // Opaque black pixel then fully transparent white pixel
        let rgba = [0u8, 0, 0, 255, 255, 255, 255, 0];
        let mask = SolidityMask::from_rgba_u8(&rgba, 2, 1, AlphaThreshold::default()).unwrap();
        assert!(mask.is_solid(0, 0));
        assert!(!mask.is_solid(1, 0));
    }

    #[test]
    fn test_gray_alpha_image() {
        let mut image = Array3::<f32>::zeros((1, 2, 2));
        image[[0, 1, 1]] = 0.75;
        let mask = SolidityMask::from_image_f32(image.view(), AlphaThreshold::default()).unwrap();
        assert!(!mask.is_solid(0, 0));
        assert!(mask.is_solid(1, 0));
    }

    #[test]
    fn test_rgb_image_rejected() {
        let image = Array3::<u8>::zeros((2, 2, 3));
        let err = SolidityMask::from_image_u8(image.view(), AlphaThreshold::default()).unwrap_err();
        assert_eq!(err, TraceError::UnsupportedChannels(3));
    }

    #[test]
    fn test_invalid_dimensions() {
        let t = AlphaThreshold::default();
        assert_eq!(
            SolidityMask::from_alpha_u8(&[], 0, 3, t),
            Err(TraceError::ZeroExtent { width: 0, height: 3 })
        );
        assert_eq!(
            SolidityMask::from_alpha_u8(&[0; 5], 2, 3, t),
            Err(TraceError::LengthMismatch { expected: 6, actual: 5 })
        );
        assert_eq!(
            SolidityMask::from_rgba_f32(&[0.0; 6], 1, 2, t),
            Err(TraceError::LengthMismatch { expected: 8, actual: 6 })
        );
    }

    #[test]
    fn test_oversized_extents_rejected() {
        let t = AlphaThreshold::default();
        assert_eq!(
            SolidityMask::from_alpha_u8(&[], usize::MAX, 2, t),
            Err(TraceError::ExtentTooLarge { width: usize::MAX, height: 2 })
        );
        assert_eq!(
            SolidityMask::from_rgba_u8(&[], usize::MAX / 4 + 1, 1, t),
            Err(TraceError::ExtentTooLarge { width: usize::MAX / 4 + 1, height: 1 })
        );
        assert!(SolidityMask::from_bools(&[], 1, usize::MAX).is_err());
        assert!(SolidityMask::from_rgba_f32(&[], i32::MAX as usize + 1, 1, t).is_err());
    }

    #[test]
    fn test_empty_mask() {
        let mask = SolidityMask::from_alpha_u8(&[0; 12], 4, 3, AlphaThreshold::default()).unwrap();
        assert!(mask.is_empty());
        assert_eq!(mask.solid_count(), 0);
    }
}
