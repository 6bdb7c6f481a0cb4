//! Conversions between [`Raster`] and the `image` crate's RGBA buffers, for
//! hosts that already hold their pixels in `image` types.
use image::{DynamicImage, RgbaImage};

use crate::core::raster::Raster;
use crate::error::{Error, Result};

impl TryFrom<RgbaImage> for Raster {
    type Error = Error;

    fn try_from(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Raster::from_rgba8(width as usize, height as usize, img.into_raw())
    }
}

impl TryFrom<Raster> for RgbaImage {
    type Error = Error;

    fn try_from(raster: Raster) -> Result<Self> {
        let (width, height) = raster.dimensions();
        let too_large = || Error::InvalidRaster {
            reason: format!("{}x{} does not fit an image buffer", width, height),
        };
        let w = u32::try_from(width).map_err(|_| too_large())?;
        let h = u32::try_from(height).map_err(|_| too_large())?;
        RgbaImage::from_raw(w, h, raster.into_rgba8()).ok_or_else(too_large)
    }
}

impl Raster {
    /// Converts any `image` pixel layout to 8-bit RGBA.
    pub fn from_dynamic(img: &DynamicImage) -> Result<Self> {
        Raster::try_from(img.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn round_trips_through_rgba_image() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 50, 255]));
        let raster = Raster::try_from(img.clone()).unwrap();
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.pixel(2, 1), Some([2, 1, 50, 255]));
        let back = RgbaImage::try_from(raster).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn empty_image_is_rejected() {
        let img = RgbaImage::new(0, 5);
        assert!(matches!(
            Raster::try_from(img),
            Err(Error::InvalidRaster { .. })
        ));
    }

    #[test]
    fn dynamic_images_are_converted_to_rgba() {
        let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(2, 2, image::Luma([77])));
        let raster = Raster::from_dynamic(&gray).unwrap();
        assert_eq!(raster.pixel(1, 1), Some([77, 77, 77, 255]));
    }
}
