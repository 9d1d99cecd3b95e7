// SPDX-License-Identifier: MIT
//! Owned row-major sample buffer.

use crate::engine::{check_len, Scaler};
use crate::error::{BufferRole, ScaleResult};

/// A `width x height` image stored row-major in a flat `Vec`.
///
/// The length of the backing storage always equals `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuf<P> {
    width: usize,
    height: usize,
    pixels: Vec<P>,
}

impl<P: Copy> ImageBuf<P> {
    /// Creates a buffer with every sample set to `fill`.
    pub fn new(width: usize, height: usize, fill: P) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Wraps existing storage, checking its length.
    pub fn from_vec(width: usize, height: usize, pixels: Vec<P>) -> ScaleResult<Self> {
        check_len(BufferRole::Image, width * height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a buffer by evaluating `f(x, y)` for every sample.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> P) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    pub fn into_vec(self) -> Vec<P> {
        self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Row `y` as a slice. Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[P] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Scales this image into `destination`, keeping the destination's size.
    pub fn scale_into(&self, destination: &mut ImageBuf<P>) -> ScaleResult<()> {
        let scaler = Scaler::new(
            self.width,
            self.height,
            destination.width,
            destination.height,
        )?;
        scaler.scale(&self.pixels, &mut destination.pixels)
    }
}

impl<P: Copy + Default> ImageBuf<P> {
    /// Returns a new `width x height` image scaled from this one.
    pub fn scale_to(&self, width: usize, height: usize) -> ScaleResult<ImageBuf<P>> {
        let scaler = Scaler::new(self.width, self.height, width, height)?;
        let mut out = ImageBuf::new(width, height, P::default());
        scaler.scale(&self.pixels, &mut out.pixels)?;
        Ok(out)
    }
}
