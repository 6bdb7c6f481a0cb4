//! Shared types and enums used across capresize.
//! Includes `Fill` (stretch or tile), the per-axis `GrowMode`, and the
//! resampling `Filter` used by the stretch path.
use clap::ValueEnum;
use fast_image_resize::{FilterType, ResizeAlg};
use serde::{Deserialize, Serialize};

/// How a stretchable region grows along one axis.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Fill {
    /// Resample the region to the destination extent.
    #[default]
    #[value(alias = "scale")]
    #[serde(alias = "scale")]
    Stretch,
    /// Repeat the region's pattern, clipping the trailing partial tile.
    Tile,
}

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fill::Stretch => write!(f, "Stretch"),
            Fill::Tile => write!(f, "Tile"),
        }
    }
}

/// Fill mode for each axis. Top/bottom edges follow `horizontal`, left/right
/// edges follow `vertical`, and the center uses both.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowMode {
    pub horizontal: Fill,
    pub vertical: Fill,
}

impl GrowMode {
    pub const STRETCH: GrowMode = GrowMode::uniform(Fill::Stretch);
    pub const TILE: GrowMode = GrowMode::uniform(Fill::Tile);

    pub const fn new(horizontal: Fill, vertical: Fill) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const fn uniform(fill: Fill) -> Self {
        Self::new(fill, fill)
    }
}

impl std::fmt::Display for GrowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.horizontal == self.vertical {
            write!(f, "{}", self.horizontal)
        } else {
            write!(f, "{}/{}", self.horizontal, self.vertical)
        }
    }
}

/// Resampling kernel for stretched regions.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    Nearest,
    #[default]
    Bilinear,
    CatmullRom,
    Lanczos3,
}

impl Filter {
    pub(crate) fn resize_alg(self) -> ResizeAlg {
        match self {
            Filter::Nearest => ResizeAlg::Nearest,
            Filter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            Filter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            Filter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::Nearest => write!(f, "Nearest"),
            Filter::Bilinear => write!(f, "Bilinear"),
            Filter::CatmullRom => write!(f, "CatmullRom"),
            Filter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_an_alias_for_stretch() {
        let fill: Fill = serde_json::from_str("\"scale\"").unwrap();
        assert_eq!(fill, Fill::Stretch);
        assert_eq!(Fill::from_str("scale", true).unwrap(), Fill::Stretch);
        assert_eq!(Fill::from_str("tile", true).unwrap(), Fill::Tile);
    }

    #[test]
    fn grow_mode_display() {
        assert_eq!(GrowMode::STRETCH.to_string(), "Stretch");
        assert_eq!(GrowMode::new(Fill::Tile, Fill::Stretch).to_string(), "Tile/Stretch");
    }

    #[test]
    fn filter_names_are_kebab_case() {
        assert_eq!(serde_json::to_string(&Filter::CatmullRom).unwrap(), "\"catmull-rom\"");
        assert_eq!(Filter::from_str("catmull-rom", true).unwrap(), Filter::CatmullRom);
        assert_eq!(Filter::default(), Filter::Bilinear);
    }
}
