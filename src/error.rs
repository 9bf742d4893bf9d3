//! Error type shared by the mask builders and tracing entry points.
//!
//! Every variant describes input that is rejected before any tracing work
//! starts. A fully transparent sprite is not an error: it traces to an empty
//! polygon list.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    #[error("invalid extents {width}x{height}: width and height must be positive")]
    ZeroExtent { width: usize, height: usize },

    #[error("extents {width}x{height} exceed the i32 vertex range")]
    ExtentTooLarge { width: usize, height: usize },

    #[error("a {width}x{height} buffer with {channels} channels overflows usize")]
    BufferOverflow {
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("buffer length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("alpha threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f32),

    #[error("unsupported channel count {0}: expected 1 (alpha), 2 (gray + alpha) or 4 (RGBA)")]
    UnsupportedChannels(usize),

    #[error(
        "sprite rect {width}x{height} at ({x}, {y}) does not fit a {texture_width}x{texture_height} texture"
    )]
    RectOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        texture_width: usize,
        texture_height: usize,
    },

    #[error("invalid array shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl TraceError {
    /// Checks that both extents are positive and that every pixel corner,
    /// up to `(width, height)`, is addressable as an `i32` vertex.
    pub(crate) fn check_extents(width: usize, height: usize) -> Result<(), TraceError> {
        if width == 0 || height == 0 {
            return Err(TraceError::ZeroExtent { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(TraceError::ExtentTooLarge { width, height });
        }
        Ok(())
    }

    /// Number of values in a `width x height x channels` buffer.
    pub(crate) fn buffer_len(
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<usize, TraceError> {
        width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(channels))
            .ok_or(TraceError::BufferOverflow {
                width,
                height,
                channels,
            })
    }

    /// Checks that a buffer holds exactly `expected` values.
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), TraceError> {
        if expected != actual {
            return Err(TraceError::LengthMismatch { expected, actual });
        }
        Ok(())
    }
}
