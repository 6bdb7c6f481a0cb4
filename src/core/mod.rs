//! Core building blocks: the raster buffer, cap insets and the 3x3 region grid,
//! resize parameters, and the processing primitives consumed by the
//! high-level `api` module.
pub mod grid;
pub mod insets;
pub mod params;
pub mod processing;
pub mod raster;
