#![doc = r##"
capresize — nine-patch ("capped image") resizing for UI chrome.

A source raster is cut into a 3x3 grid by four cap insets. Resizing copies the
four corners unscaled, grows the top/bottom edges horizontally, the left/right
edges vertically, and the center both ways. Each axis either stretches
(resamples) or tiles (repeats the pattern, clipping the last tile), so buttons,
panels and speech bubbles keep crisp corners and borders at any size.

Add dependency
--------------
```toml
[dependencies]
capresize = "0.1"
```

Quick start
-----------
```rust
use capresize::{CapInsets, GrowMode, Raster};

fn main() -> capresize::Result<()> {
    // 30x30 panel with a 10px border on every side
    let panel = Raster::from_fn(30, 30, |x, y| {
        let border = x < 10 || x >= 20 || y < 10 || y >= 20;
        if border { [40, 40, 40, 255] } else { [200, 200, 200, 255] }
    })?;

    let wide = capresize::resize(&panel, CapInsets::uniform(10), 120, 50, GrowMode::STRETCH)?;
    assert_eq!(wide.dimensions(), (120, 50));
    assert_eq!(wide.pixel(0, 0), panel.pixel(0, 0));
    assert_eq!(wide.pixel(119, 49), panel.pixel(29, 29));
    Ok(())
}
```

Tiling and per-axis modes
-------------------------
```rust
use capresize::{CapInsets, Fill, Filter, GrowMode, Raster, resize_with_filter};

fn main() -> capresize::Result<()> {
    let stripes = Raster::from_fn(9, 9, |x, _| [(x * 25) as u8, 0, 0, 255])?;

    // Tile the middle horizontally, stretch it vertically
    let grow = GrowMode::new(Fill::Tile, Fill::Stretch);
    let out = resize_with_filter(&stripes, CapInsets::uniform(3), 40, 20, grow, Filter::Nearest)?;
    assert_eq!(out.pixel(3, 10), stripes.pixel(3, 4));
    assert_eq!(out.pixel(6, 10), stripes.pixel(3, 4));
    Ok(())
}
```

Presets
-------
`ResizeParams` is a serde record for config files and presets:

```rust
use capresize::{Raster, ResizeParams, resize_with_params};

fn main() -> capresize::Result<()> {
    let params = ResizeParams::from_json(r#"{
        "insets": { "left": 1, "right": 6, "top": 1, "bottom": 4 },
        "width": 450,
        "height": 120,
        "grow": { "horizontal": "scale", "vertical": "scale" }
    }"#)?;
    let field = Raster::filled(16, 12, [255, 255, 255, 255])?;
    let out = resize_with_params(&field, &params)?;
    assert_eq!(out.dimensions(), (450, 120));
    Ok(())
}
```

Error handling
--------------
All fallible functions return `capresize::Result<T>`. Inputs are validated
before any pixel is written, so a call either returns a complete raster or an
error naming the violated constraint.

```rust
use capresize::{CapInsets, Error, GrowMode, Raster};

let source = Raster::new(30, 30).unwrap();
match capresize::resize(&source, CapInsets::uniform(10), 15, 40, GrowMode::STRETCH) {
    Err(Error::InvalidTargetSize { width, .. }) => assert_eq!(width, 15),
    other => panic!("unexpected: {other:?}"),
}
```

Feature flags
-------------
- `image-interop` (default): conversions between `Raster` and `image::RgbaImage`.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `Fill`, `GrowMode`, `Filter`.
- [`core`] — raster, insets, region grid, presets, and processing primitives.
- [`error`] — crate-level `Error` and `Result`.
"##]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

#[cfg(feature = "image-interop")]
pub mod interop;

// Curated public API surface
// Types
pub use crate::core::grid::{Rect, Region, RegionGrid};
pub use crate::core::insets::CapInsets;
pub use crate::core::params::ResizeParams;
pub use crate::core::processing::compose::{CompositionPlan, RegionStep};
pub use crate::core::raster::{Raster, Rgba, TRANSPARENT};
pub use error::{Error, Result};
pub use types::{Fill, Filter, GrowMode};

// High-level API re-exports
pub use api::{
    aspect_height, plan_resize, resize, resize_to_width, resize_with_filter, resize_with_params,
};
