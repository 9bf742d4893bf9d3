//! Alpha test used to classify pixels as solid or empty.
//!
//! A pixel is solid when `alpha >= threshold`. Pixels sitting exactly on the
//! threshold count as solid, for both bit depths:
//! - **u8**: alpha is normalised as `a / 255.0` before the comparison
//! - **f32**: alpha is compared as-is (0.0-1.0); NaN is never solid

use crate::error::TraceError;

/// Validated alpha threshold in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct AlphaThreshold(f32);

impl AlphaThreshold {
    /// Threshold used when the caller does not pick one.
    pub const DEFAULT: AlphaThreshold = AlphaThreshold(0.5);

    /// Build a threshold, rejecting NaN and values outside `[0, 1]`.
    pub fn new(value: f32) -> Result<Self, TraceError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(TraceError::ThresholdOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Alpha test for 8-bit alpha (0-255).
    #[inline]
    pub fn passes_u8(self, alpha: u8) -> bool {
        alpha as f32 / 255.0 >= self.0
    }

    /// Alpha test for float alpha (0.0-1.0).
    #[inline]
    pub fn passes_f32(self, alpha: f32) -> bool {
        alpha >= self.0
    }
}

impl Default for AlphaThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for AlphaThreshold {
    type Error = TraceError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
