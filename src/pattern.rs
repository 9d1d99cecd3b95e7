//! # Synthetic Test Patterns
//!
//! Source images for the benchmark, packed as `0x00RRGGBB` in a `u32`.
//! Every pattern has enough high-frequency structure that a wrong source
//! index shows up as a visibly wrong pixel in a dump.

use nn_scale::ImageBuf;

const RED: u32 = 0x00FF_0000;
const GREEN: u32 = 0x0000_FF00;
const BLUE: u32 = 0x0000_00FF;

/// Synthetic source pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TestPattern {
    /// Red on even rows, blue on every third column, green on every fifth diagonal.
    #[default]
    Stripes,
    /// Red ramps with x, green with y, blue with x + y.
    Gradient,
    /// 32-pixel black and white checkerboard.
    Checkerboard,
}

impl TestPattern {
    /// Packed `0x00RRGGBB` sample at `(x, y)`.
    pub fn sample(self, x: usize, y: usize) -> u32 {
        match self {
            TestPattern::Stripes => {
                let mut color = 0;
                if y % 2 == 0 {
                    color |= RED;
                }
                if x % 3 == 0 {
                    color |= BLUE;
                }
                if (x + y) % 5 == 0 {
                    color |= GREEN;
                }
                color
            }
            TestPattern::Gradient => {
                let r = (x % 256) as u32;
                let g = (y % 256) as u32;
                let b = ((x + y) % 256) as u32;
                (r << 16) | (g << 8) | b
            }
            TestPattern::Checkerboard => {
                if (x / 32 + y / 32) % 2 == 0 {
                    0
                } else {
                    RED | GREEN | BLUE
                }
            }
        }
    }

    /// Renders a `width x height` image of this pattern.
    pub fn render(self, width: usize, height: usize) -> ImageBuf<u32> {
        ImageBuf::from_fn(width, height, |x, y| self.sample(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripes_match_classic_pattern() {
        let img = TestPattern::Stripes.render(6, 2);
        // (0,0): even row, x%3==0, (x+y)%5==0
        assert_eq!(img.get(0, 0), Some(0x00FF_FFFF));
        // (1,0): even row only
        assert_eq!(img.get(1, 0), Some(RED));
        // (3,1): odd row, x%3==0
        assert_eq!(img.get(3, 1), Some(BLUE));
        // (4,1): odd row, (4+1)%5==0
        assert_eq!(img.get(4, 1), Some(GREEN));
        // (2,1): nothing
        assert_eq!(img.get(2, 1), Some(0));
    }

    #[test]
    fn test_gradient_channels() {
        assert_eq!(TestPattern::Gradient.sample(1, 2), 0x0001_0203);
        assert_eq!(TestPattern::Gradient.sample(256, 0), 0);
    }

    #[test]
    fn test_checkerboard_cells() {
        assert_eq!(TestPattern::Checkerboard.sample(0, 0), 0);
        assert_eq!(TestPattern::Checkerboard.sample(32, 0), 0x00FF_FFFF);
        assert_eq!(TestPattern::Checkerboard.sample(32, 32), 0);
    }

    #[test]
    fn test_render_size() {
        let img = TestPattern::Gradient.render(7, 3);
        assert_eq!((img.width(), img.height()), (7, 3));
        assert_eq!(img.pixels().len(), 21);
    }
}
