use fast_image_resize::Resizer;
use ndarray::{Array2, ArrayView2, ArrayViewMut2, s};
use serde::Serialize;
use tracing::debug;

use crate::core::grid::{Rect, Region, RegionGrid};
use crate::core::insets::CapInsets;
use crate::core::processing::scale::scale_rgba;
use crate::core::processing::tile::tile_into;
use crate::core::raster::{Raster, Rgba, TRANSPARENT};
use crate::error::{Error, Result};
use crate::types::{Fill, Filter, GrowMode};

/// One of the nine copies: `source` in the input maps onto `destination`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct RegionStep {
    pub region: Region,
    pub source: Rect,
    pub destination: Rect,
}

/// Validated layout of a capped resize, before any pixel is touched.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CompositionPlan {
    pub source_size: (usize, usize),
    pub target_size: (usize, usize),
    pub insets: CapInsets,
    pub grow: GrowMode,
    pub steps: [RegionStep; 9],
}

impl CompositionPlan {
    pub fn step(&self, region: Region) -> RegionStep {
        self.steps[region.index()]
    }
}

/// Validate inputs and lay out the nine region copies.
pub fn plan(
    source_size: (usize, usize),
    insets: CapInsets,
    target_width: usize,
    target_height: usize,
    grow: GrowMode,
) -> Result<CompositionPlan> {
    let (source_width, source_height) = source_size;
    insets.validate(source_width, source_height)?;
    validate_target(&insets, target_width, target_height)?;

    let source_grid = RegionGrid::new(source_width, source_height, &insets);
    let target_grid = RegionGrid::new(target_width, target_height, &insets);
    let steps = Region::ALL.map(|region| RegionStep {
        region,
        source: source_grid.rect(region),
        destination: target_grid.rect(region),
    });

    for step in &steps {
        if step.destination.is_empty() {
            continue;
        }
        let tiles_empty_cols = step.region.scales_horizontally()
            && grow.horizontal == Fill::Tile
            && step.source.width == 0;
        let tiles_empty_rows = step.region.scales_vertically()
            && grow.vertical == Fill::Tile
            && step.source.height == 0;
        if tiles_empty_cols || tiles_empty_rows {
            return Err(Error::invalid_insets(
                insets,
                source_size,
                format!(
                    "{} region is empty in the source but must tile a {}x{} area",
                    step.region, step.destination.width, step.destination.height
                ),
            ));
        }
    }

    Ok(CompositionPlan {
        source_size,
        target_size: (target_width, target_height),
        insets,
        grow,
        steps,
    })
}

fn validate_target(insets: &CapInsets, width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_target(
            width,
            height,
            "dimensions must be at least 1x1",
        ));
    }
    if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
        return Err(Error::invalid_target(
            width,
            height,
            format!("dimensions must not exceed {}", u32::MAX),
        ));
    }
    if width < insets.horizontal() {
        return Err(Error::invalid_target(
            width,
            height,
            format!(
                "width is smaller than left + right = {}",
                insets.horizontal()
            ),
        ));
    }
    if height < insets.vertical() {
        return Err(Error::invalid_target(
            width,
            height,
            format!(
                "height is smaller than top + bottom = {}",
                insets.vertical()
            ),
        ));
    }
    Ok(())
}

/// Run a plan against `source`, producing a raster of the planned target size.
pub fn compose(source: &Raster, plan: &CompositionPlan, filter: Filter) -> Result<Raster> {
    if source.dimensions() != plan.source_size {
        return Err(Error::InvalidRaster {
            reason: format!(
                "plan was made for a {}x{} source, got {}x{}",
                plan.source_size.0,
                plan.source_size.1,
                source.width(),
                source.height()
            ),
        });
    }

    let (target_width, target_height) = plan.target_size;
    let mut pixels = Array2::from_elem((target_height, target_width), TRANSPARENT);
    let mut resizer = Resizer::new();

    for step in &plan.steps {
        let dst_rect = step.destination;
        if dst_rect.is_empty() {
            debug!("Skipping empty {} region", step.region);
            continue;
        }
        debug!(
            "Filling {} region: {}x{} at ({}, {}) from {}x{} at ({}, {})",
            step.region,
            dst_rect.width,
            dst_rect.height,
            dst_rect.x,
            dst_rect.y,
            step.source.width,
            step.source.height,
            step.source.x,
            step.source.y
        );

        let src = source.region(step.source);
        let dst = pixels.slice_mut(s![
            dst_rect.y..dst_rect.bottom(),
            dst_rect.x..dst_rect.right()
        ]);
        if step.region.is_corner() {
            copy_region(src, dst);
        } else {
            fill_region(src, dst, plan.grow, filter, &mut resizer)?;
        }
    }

    Raster::from_array(pixels)
}

fn copy_region(src: ArrayView2<'_, Rgba>, mut dst: ArrayViewMut2<'_, Rgba>) {
    dst.assign(&src);
}

/// Resample along stretched axes, then tile along tiled ones.
fn fill_region(
    src: ArrayView2<'_, Rgba>,
    mut dst: ArrayViewMut2<'_, Rgba>,
    grow: GrowMode,
    filter: Filter,
    resizer: &mut Resizer,
) -> Result<()> {
    let (rows, cols) = dst.dim();
    let (src_rows, src_cols) = src.dim();
    let pattern_cols = match grow.horizontal {
        Fill::Stretch => cols,
        Fill::Tile => src_cols,
    };
    let pattern_rows = match grow.vertical {
        Fill::Stretch => rows,
        Fill::Tile => src_rows,
    };

    let pattern = scale_rgba(src, pattern_cols, pattern_rows, filter, resizer)?;
    if pattern.dim() == (rows, cols) {
        dst.assign(&pattern);
    } else {
        let tiles = tile_into(pattern.view(), dst);
        debug!(
            "Tiled {}x{} pattern {} times",
            pattern_cols, pattern_rows, tiles
        );
    }
    Ok(())
}
