//! Pixel-moving primitives behind the capped resize: the resampling
//! scaled-copy, clip-tiling, and the nine-region composition.
pub mod compose;
pub mod scale;
pub mod tile;
