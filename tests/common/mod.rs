//! Shared helpers for the integration tests.

use intscale::config::{HarnessConfig, Size};
use intscale::nn_scale::{ImageBuf, Method};

#[allow(dead_code)]
/// A fast configuration: tiny images, two iterations, every method.
pub fn small_config() -> HarnessConfig {
    HarnessConfig::new(2, Size { w: 12, h: 9 }, Size { w: 31, h: 20 }, Method::ALL.to_vec())
}

#[allow(dead_code)]
/// Scales with plain integer division, one division per sample.
pub fn naive_scale(source: &ImageBuf<u32>, width: usize, height: usize) -> ImageBuf<u32> {
    let (sw, sh) = (source.width(), source.height());
    ImageBuf::from_fn(width, height, |x, y| {
        let sx = x * sw / width;
        let sy = y * sh / height;
        source.pixels()[sy * sw + sx]
    })
}

/// Reads the header of a binary P6 pixmap: `(width, height, maxval, header_len)`.
#[allow(dead_code)]
pub fn parse_p6_header(bytes: &[u8]) -> Option<(usize, usize, usize, usize)> {
    let mut fields = Vec::new();
    let mut i = 0;
    while fields.len() < 4 && i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        fields.push(std::str::from_utf8(&bytes[start..i]).ok()?.to_string());
    }
    if fields.first()? != "P6" {
        return None;
    }
    // one whitespace byte separates the header from the samples
    Some((
        fields[1].parse().ok()?,
        fields[2].parse().ok()?,
        fields[3].parse().ok()?,
        i + 1,
    ))
}
