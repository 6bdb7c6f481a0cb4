use ndarray::{Array2, ArrayView2, s};

use crate::core::grid::Rect;
use crate::error::{Error, Result};

/// One 8-bit RGBA pixel.
pub type Rgba = [u8; 4];

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Non-empty RGBA pixel buffer, row-major, indexed `[y, x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Array2<Rgba>,
}

impl Raster {
    /// Fully transparent raster.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, TRANSPARENT)
    }

    pub fn filled(width: usize, height: usize, pixel: Rgba) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            pixels: Array2::from_elem((height, width), pixel),
        })
    }

    /// Builds a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        check_dimensions(width, height)?;
        Ok(Self {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        })
    }

    /// Wraps interleaved RGBA bytes (`width * height * 4` of them).
    pub fn from_rgba8(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| Error::InvalidRaster {
                reason: format!("{}x{} RGBA does not fit in memory", width, height),
            })?;
        if bytes.len() != expected {
            return Err(Error::InvalidRaster {
                reason: format!(
                    "expected {} bytes for {}x{} RGBA, got {}",
                    expected,
                    width,
                    height,
                    bytes.len()
                ),
            });
        }
        let pixels: Vec<Rgba> = bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::from_array(Array2::from_shape_vec((height, width), pixels)?)
    }

    pub(crate) fn from_array(pixels: Array2<Rgba>) -> Result<Self> {
        let (height, width) = pixels.dim();
        check_dimensions(width, height)?;
        Ok(Self { pixels })
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        self.pixels.get((y, x)).copied()
    }

    pub fn pixels(&self) -> ArrayView2<'_, Rgba> {
        self.pixels.view()
    }

    /// Read view of a sub-rectangle, `None` if it reaches past the raster.
    pub fn view(&self, rect: Rect) -> Option<ArrayView2<'_, Rgba>> {
        if rect.right() > self.width() || rect.bottom() > self.height() {
            return None;
        }
        Some(self.region(rect))
    }

    /// Sub-rectangle view for rects already known to be in bounds.
    pub(crate) fn region(&self, rect: Rect) -> ArrayView2<'_, Rgba> {
        self.pixels
            .slice(s![rect.y..rect.bottom(), rect.x..rect.right()])
    }

    /// Interleaved RGBA bytes, row-major.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidRaster {
            reason: format!("dimensions must be at least 1x1, got {}x{}", width, height),
        });
    }
    Ok(())
}
