//! `fast_image_resize` nearest-neighbor baseline.
//!
//! Timed next to the in-house methods for comparison only. Its nearest filter
//! samples pixel centers, so its output is not expected to match `division`
//! and is never verified against it.

use fast_image_resize as fir;
use fir::images::Image;
use fir::{PixelType, ResizeAlg, ResizeOptions, Resizer};
use nn_scale::ImageBuf;

use crate::error::HarnessResult;

/// Label used for the baseline in reports and dump file names.
pub const BASELINE_LABEL: &str = "fir-nearest";

/// Pre-built source and destination images for repeated baseline resizes.
pub struct FirBaseline {
    resizer: Resizer,
    src: Image<'static>,
    dst: Image<'static>,
    width: usize,
    height: usize,
    options: ResizeOptions,
}

impl FirBaseline {
    /// Copies `input` into a U8x4 image and allocates a `width x height` destination.
    pub fn new(input: &ImageBuf<u32>, width: usize, height: usize) -> HarnessResult<Self> {
        let bytes: Vec<u8> = input.pixels().iter().flat_map(|p| p.to_le_bytes()).collect();
        let src = Image::from_vec_u8(
            input.width() as u32,
            input.height() as u32,
            bytes,
            PixelType::U8x4,
        )?;
        let dst = Image::new(width as u32, height as u32, PixelType::U8x4);
        let options = ResizeOptions::new()
            .resize_alg(ResizeAlg::Nearest)
            .use_alpha(false);
        Ok(Self {
            resizer: Resizer::new(),
            src,
            dst,
            width,
            height,
            options,
        })
    }

    /// One resize of the prepared source into the prepared destination.
    pub fn run(&mut self) -> HarnessResult<()> {
        self.resizer.resize(&self.src, &mut self.dst, &self.options)?;
        Ok(())
    }

    /// The last resize result, repacked as `u32` samples.
    pub fn output(&self) -> ImageBuf<u32> {
        let width = self.width;
        let bytes = self.dst.buffer();
        ImageBuf::from_fn(width, self.height, |x, y| {
            let i = (y * width + x) * 4;
            u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
        })
    }
}
