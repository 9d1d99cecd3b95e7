//! Image dumps for visual inspection of scaled output.
//!
//! Samples are packed `0x00RRGGBB`; the top byte is ignored. `.ppm` (and paths
//! without a recognised extension) are written as binary P6 pixmaps; any other
//! extension the `image` crate knows, e.g. `.png`, picks that encoder.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use nn_scale::ImageBuf;

use crate::error::{HarnessError, HarnessResult};

/// Unpacks `0x00RRGGBB` samples into interleaved RGB8 bytes.
pub fn to_rgb8(image: &ImageBuf<u32>) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(image.pixels().len() * 3);
    for &color in image.pixels() {
        rgb.push(((color & 0x00FF_0000) >> 16) as u8);
        rgb.push(((color & 0x0000_FF00) >> 8) as u8);
        rgb.push((color & 0x0000_00FF) as u8);
    }
    rgb
}

/// Writes `image` to `path`, choosing the format from the extension.
pub fn dump_image(path: &Path, image: &ImageBuf<u32>) -> HarnessResult<()> {
    let rgb = to_rgb8(image);
    let (width, height) = (image.width() as u32, image.height() as u32);
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Pnm);

    let result = if format == ImageFormat::Pnm {
        let file = File::create(path)?;
        PnmEncoder::new(BufWriter::new(file))
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
    } else {
        image::save_buffer_with_format(path, &rgb, width, height, ExtendedColorType::Rgb8, format)
    };

    result.map_err(|source| HarnessError::Dump {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} ({}x{})", path.display(), width, height);
    Ok(())
}
