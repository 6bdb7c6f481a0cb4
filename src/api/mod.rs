//! High-level, ergonomic library API: capped resize of a raster to a target size,
//! from explicit arguments, from a `ResizeParams` preset, or keeping the source
//! aspect ratio. Prefer these entrypoints over the low-level processing modules.
use tracing::info;

use crate::core::insets::CapInsets;
use crate::core::params::ResizeParams;
use crate::core::processing::compose::{CompositionPlan, compose, plan};
use crate::core::raster::Raster;
use crate::error::{Error, Result};
use crate::types::{Filter, GrowMode};

/// Resize `source` to `target_width` x `target_height`, keeping the caps
/// described by `insets` unscaled and growing the rest per `grow`.
///
/// Stretched regions use the default [`Filter`].
pub fn resize(
    source: &Raster,
    insets: CapInsets,
    target_width: usize,
    target_height: usize,
    grow: GrowMode,
) -> Result<Raster> {
    resize_with_filter(
        source,
        insets,
        target_width,
        target_height,
        grow,
        Filter::default(),
    )
}

/// Same as [`resize`] with an explicit resampling filter.
pub fn resize_with_filter(
    source: &Raster,
    insets: CapInsets,
    target_width: usize,
    target_height: usize,
    grow: GrowMode,
    filter: Filter,
) -> Result<Raster> {
    info!(
        "Resizing {}x{} to {}x{} with caps {} ({}, {})",
        source.width(),
        source.height(),
        target_width,
        target_height,
        insets,
        grow,
        filter
    );
    let plan = plan(source.dimensions(), insets, target_width, target_height, grow)?;
    compose(source, &plan, filter)
}

/// Resize using a stored preset.
pub fn resize_with_params(source: &Raster, params: &ResizeParams) -> Result<Raster> {
    resize_with_filter(
        source,
        params.insets,
        params.width,
        params.height,
        params.grow,
        params.filter,
    )
}

/// Resize to `target_width`, deriving the height from the source aspect ratio.
pub fn resize_to_width(
    source: &Raster,
    insets: CapInsets,
    target_width: usize,
    grow: GrowMode,
) -> Result<Raster> {
    let target_height = aspect_height(source.dimensions(), target_width)?;
    info!(
        "Height for width {} keeping aspect: {}",
        target_width, target_height
    );
    resize(source, insets, target_width, target_height, grow)
}

/// Height matching `target_width` at the aspect ratio of `(width, height)`,
/// rounded down.
pub fn aspect_height((width, height): (usize, usize), target_width: usize) -> Result<usize> {
    if width == 0 {
        return Ok(0);
    }
    let scaled = height.checked_mul(target_width).ok_or_else(|| {
        Error::invalid_target(
            target_width,
            height,
            format!("height for a {}x{} source overflows", width, height),
        )
    })?;
    Ok(scaled / width)
}

/// Validate and lay out a resize without touching pixels.
pub fn plan_resize(
    source: &Raster,
    insets: CapInsets,
    target_width: usize,
    target_height: usize,
    grow: GrowMode,
) -> Result<CompositionPlan> {
    plan(source.dimensions(), insets, target_width, target_height, grow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_height_rounds_down() {
        assert_eq!(aspect_height((30, 20), 45).unwrap(), 30);
        assert_eq!(aspect_height((3, 2), 4).unwrap(), 2);
        assert_eq!(aspect_height((0, 2), 4).unwrap(), 0);
    }

    #[test]
    fn huge_width_is_an_error_not_an_overflow() {
        assert!(matches!(
            aspect_height((4, 4), usize::MAX / 2),
            Err(Error::InvalidTargetSize { .. })
        ));

        let source = Raster::new(4, 4).unwrap();
        let insets = CapInsets::uniform(1);
        let err = resize_to_width(&source, insets, usize::MAX / 2, GrowMode::STRETCH).unwrap_err();
        assert!(matches!(err, Error::InvalidTargetSize { .. }));
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn resize_to_width_keeps_aspect() {
        let source = Raster::filled(20, 10, [1, 2, 3, 255]).unwrap();
        let out = resize_to_width(&source, CapInsets::uniform(2), 50, GrowMode::STRETCH).unwrap();
        assert_eq!(out.dimensions(), (50, 25));
    }

    #[test]
    fn resize_to_width_too_narrow_for_height_caps() {
        let source = Raster::new(20, 10).unwrap();
        let err =
            resize_to_width(&source, CapInsets::symmetric(1, 4), 4, GrowMode::STRETCH).unwrap_err();
        assert!(matches!(err, Error::InvalidTargetSize { width: 4, height: 2, .. }));
    }

    #[test]
    fn params_drive_the_resize() {
        let source = Raster::filled(9, 9, [9, 9, 9, 255]).unwrap();
        let params = ResizeParams::new(CapInsets::uniform(3), 30, 12, GrowMode::TILE)
            .with_filter(Filter::Nearest);
        let out = resize_with_params(&source, &params).unwrap();
        assert_eq!(out.dimensions(), (30, 12));
        assert!(out.pixels().iter().all(|&p| p == [9, 9, 9, 255]));
    }
}
