//! Sprite tracing from atlas textures.
//!
//! A sprite is a rectangle inside a larger RGBA8 texture. Its outline is
//! traced in the sprite's own pixel space: vertex `(0, 0)` is the bottom-left
//! corner of the rect, regardless of where the rect sits in the texture.
//!
//! Sprites are independent of each other, so batches are traced in parallel.

use ndarray::{s, ArrayView3};
use rayon::prelude::*;

use crate::error::TraceError;
use crate::outline::{trace, AlphaThreshold, Polygon, SolidityMask};

/// Pixel rectangle of a sprite inside its texture (origin bottom-left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl SpriteRect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// Rect covering a whole `width x height` texture.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// A sprite: RGBA8 texture data plus the rect that belongs to the sprite.
#[derive(Clone, Copy, Debug)]
pub struct SpriteImage<'a> {
    /// Row-major RGBA bytes, `texture_width * texture_height * 4` long
    pub texture: &'a [u8],
    pub texture_width: usize,
    pub texture_height: usize,
    pub rect: SpriteRect,
}

impl<'a> SpriteImage<'a> {
    pub fn new(
        texture: &'a [u8],
        texture_width: usize,
        texture_height: usize,
        rect: SpriteRect,
    ) -> Self {
        Self {
            texture,
            texture_width,
            texture_height,
            rect,
        }
    }

    /// Build the solidity mask of the sprite's rect.
    pub fn mask(&self, threshold: AlphaThreshold) -> Result<SolidityMask, TraceError> {
        TraceError::check_extents(self.texture_width, self.texture_height)?;
        TraceError::check_len(
            TraceError::buffer_len(self.texture_width, self.texture_height, 4)?,
            self.texture.len(),
        )?;

        let rect = self.rect;
        TraceError::check_extents(rect.width, rect.height)?;
        let fits = rect
            .x
            .checked_add(rect.width)
            .is_some_and(|right| right <= self.texture_width)
            && rect
                .y
                .checked_add(rect.height)
                .is_some_and(|top| top <= self.texture_height);
        if !fits {
            return Err(TraceError::RectOutOfBounds {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                texture_width: self.texture_width,
                texture_height: self.texture_height,
            });
        }

        let texture =
            ArrayView3::from_shape((self.texture_height, self.texture_width, 4), self.texture)?;
        let region = texture.slice_move(s![
            rect.y..rect.y + rect.height,
            rect.x..rect.x + rect.width,
            ..
        ]);
        SolidityMask::from_image_u8(region, threshold)
    }
}

/// Trace the outline polygons of one sprite.
pub fn trace_sprite(
    sprite: &SpriteImage<'_>,
    threshold: AlphaThreshold,
) -> Result<Vec<Polygon>, TraceError> {
    let mask = sprite.mask(threshold)?;
    Ok(trace(&mask))
}

/// Trace many sprites in parallel.
///
/// Returns one result per sprite, in input order. A failing sprite does not
/// affect the others.
pub fn trace_sprites(
    sprites: &[SpriteImage<'_>],
    threshold: AlphaThreshold,
) -> Vec<Result<Vec<Polygon>, TraceError>> {
    sprites
        .par_iter()
        .map(|sprite| trace_sprite(sprite, threshold))
        .collect()
}
