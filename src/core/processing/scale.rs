use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use ndarray::{Array2, ArrayView2};
use tracing::{debug, warn};

use crate::core::raster::{Rgba, TRANSPARENT};
use crate::error::{Error, Result};
use crate::types::Filter;

/// Resample an RGBA view to `target_cols` x `target_rows`.
///
/// An empty target yields an empty array; an empty source stretched into a
/// non-empty target yields a transparent one.
pub fn scale_rgba(
    src: ArrayView2<'_, Rgba>,
    target_cols: usize,
    target_rows: usize,
    filter: Filter,
    resizer: &mut Resizer,
) -> Result<Array2<Rgba>> {
    let (original_rows, original_cols) = src.dim();

    if target_cols == 0 || target_rows == 0 {
        return Ok(Array2::from_elem((target_rows, target_cols), TRANSPARENT));
    }
    if original_cols == 0 || original_rows == 0 {
        warn!(
            "Stretching empty {}x{} region to {}x{}; leaving it transparent",
            original_cols, original_rows, target_cols, target_rows
        );
        return Ok(Array2::from_elem((target_rows, target_cols), TRANSPARENT));
    }
    if (original_cols, original_rows) == (target_cols, target_rows) {
        return Ok(src.to_owned());
    }

    debug!(
        "Resampling {}x{} -> {}x{} ({})",
        original_cols, original_rows, target_cols, target_rows, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(filter.resize_alg());

    // `iter` walks the view in logical row-major order, strided or not
    let src_bytes: Vec<u8> = src.iter().flatten().copied().collect();
    let src_image = Image::from_vec_u8(
        dimension(original_cols, original_rows, original_cols)?,
        dimension(original_cols, original_rows, original_rows)?,
        src_bytes,
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(
        dimension(target_cols, target_rows, target_cols)?,
        dimension(target_cols, target_rows, target_rows)?,
        PixelType::U8x4,
    );
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    let dst_bytes = dst_image.into_vec();
    let pixels: Vec<Rgba> = dst_bytes
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect();
    Ok(Array2::from_shape_vec((target_rows, target_cols), pixels)?)
}

fn dimension(cols: usize, rows: usize, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        Error::invalid_target(cols, rows, "dimension does not fit the resampler's u32 range")
    })
}
