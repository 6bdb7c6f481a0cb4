use serde::{Deserialize, Serialize};

use crate::core::insets::CapInsets;
use crate::core::processing::compose::plan;
use crate::core::raster::Raster;
use crate::error::Result;
use crate::types::{Filter, GrowMode};

/// Resize parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeParams {
    pub insets: CapInsets,
    /// Destination width in pixels
    pub width: usize,
    /// Destination height in pixels
    pub height: usize,
    pub grow: GrowMode,
    pub filter: Filter,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            insets: CapInsets::default(),
            width: 1,
            height: 1,
            grow: GrowMode::STRETCH,
            filter: Filter::Bilinear,
        }
    }
}

impl ResizeParams {
    pub fn new(insets: CapInsets, width: usize, height: usize, grow: GrowMode) -> Self {
        Self {
            insets,
            width,
            height,
            grow,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Runs every check a resize of `source` with these parameters would,
    /// without allocating the destination.
    pub fn validate_for(&self, source: &Raster) -> Result<()> {
        plan(
            source.dimensions(),
            self.insets,
            self.width,
            self.height,
            self.grow,
        )
        .map(|_| ())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Fill;

    #[test]
    fn preset_round_trips_through_json() {
        let params = ResizeParams::new(
            CapInsets::uniform(24),
            360,
            216,
            GrowMode::new(Fill::Tile, Fill::Stretch),
        )
        .with_filter(Filter::Lanczos3);
        let json = params.to_json().unwrap();
        assert!(json.contains("\"tile\""));
        assert_eq!(ResizeParams::from_json(&json).unwrap(), params);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let params = ResizeParams::from_json(
            r#"{ "width": 450, "height": 120, "grow": { "horizontal": "scale" } }"#,
        )
        .unwrap();
        assert_eq!(params.width, 450);
        assert_eq!(params.grow, GrowMode::STRETCH);
        assert_eq!(params.insets, CapInsets::default());
        assert_eq!(params.filter, Filter::Bilinear);
    }

    #[test]
    fn validate_for_reports_each_error_kind() {
        let source = Raster::new(30, 30).unwrap();

        let params = ResizeParams::new(CapInsets::uniform(16), 60, 60, GrowMode::STRETCH);
        assert!(matches!(
            params.validate_for(&source),
            Err(Error::InvalidInsets { .. })
        ));

        let params = ResizeParams::new(CapInsets::uniform(10), 19, 60, GrowMode::STRETCH);
        assert!(matches!(
            params.validate_for(&source),
            Err(Error::InvalidTargetSize { width: 19, .. })
        ));

        let params = ResizeParams::new(CapInsets::uniform(15), 40, 40, GrowMode::TILE);
        let err = params.validate_for(&source).unwrap_err();
        assert!(matches!(err, Error::InvalidInsets { .. }));
        assert!(err.to_string().contains("must tile"));

        let params = ResizeParams::new(CapInsets::uniform(10), 50, 50, GrowMode::TILE);
        assert!(params.validate_for(&source).is_ok());
    }

    #[test]
    fn negative_insets_are_rejected() {
        let err = ResizeParams::from_json(r#"{ "insets": { "left": -1 } }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
