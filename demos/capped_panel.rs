//! Renders a synthetic 72x72 panel template with 24px caps at a new size.
//!
//! ```text
//! cargo run --example capped_panel -- --width 360 --height 216 --horizontal tile --output panel.png --log
//! ```

use std::path::PathBuf;

use capresize::{CapInsets, Fill, Filter, GrowMode, Raster, Rgba, resize_with_filter};
use clap::Parser;
use image::RgbaImage;
use tracing::info;

const TEMPLATE_SIZE: usize = 72;
const BORDER: Rgba = [40, 44, 52, 255];
const LIGHT: Rgba = [220, 224, 232, 255];
const DARK: Rgba = [180, 186, 198, 255];

#[derive(Parser)]
#[command(name = "capped_panel", about = "Nine-patch resize of a synthetic panel")]
struct DemoArgs {
    /// Output width in pixels
    #[arg(long, default_value_t = 24 * 15)]
    width: usize,

    /// Output height in pixels (0 keeps the template aspect ratio)
    #[arg(long, default_value_t = 24 * 9)]
    height: usize,

    /// Horizontal growth (stretch/scale or tile)
    #[arg(long, value_enum, default_value_t = Fill::Stretch)]
    horizontal: Fill,

    /// Vertical growth (stretch/scale or tile)
    #[arg(long, value_enum, default_value_t = Fill::Stretch)]
    vertical: Fill,

    /// Resampling filter for stretched regions
    #[arg(long, value_enum, default_value_t = Filter::Bilinear)]
    filter: Filter,

    /// Cap size on every side of the template
    #[arg(long, default_value_t = 24)]
    cap: usize,

    /// Write the result as PNG
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    log: bool,
}

/// Rounded dark frame around a checkerboard, so stretching and tiling look different.
fn template() -> capresize::Result<Raster> {
    let radius = 20.0_f64;
    let last = (TEMPLATE_SIZE - 1) as f64;
    Raster::from_fn(TEMPLATE_SIZE, TEMPLATE_SIZE, |x, y| {
        let (fx, fy) = (x as f64, y as f64);
        let cx = fx.clamp(radius, last - radius);
        let cy = fy.clamp(radius, last - radius);
        let dist = ((fx - cx).powi(2) + (fy - cy).powi(2)).sqrt();
        if dist > radius {
            capresize::TRANSPARENT
        } else if dist > radius - 4.0 {
            BORDER
        } else if ((x / 6) + (y / 6)) % 2 == 0 {
            LIGHT
        } else {
            DARK
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = DemoArgs::parse();
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let source = template()?;
    let insets = CapInsets::uniform(args.cap);
    let grow = GrowMode::new(args.horizontal, args.vertical);
    let height = if args.height == 0 {
        capresize::aspect_height(source.dimensions(), args.width)?
    } else {
        args.height
    };

    let panel = resize_with_filter(&source, insets, args.width, height, grow, args.filter)?;
    info!(
        "Rendered {}x{} panel ({}, {})",
        panel.width(),
        panel.height(),
        grow,
        args.filter
    );

    match args.output {
        Some(path) => {
            let img = RgbaImage::try_from(panel)?;
            img.save(&path)?;
            println!("Wrote {}", path.display());
        }
        None => println!(
            "Rendered {}x{} panel; pass --output to save it",
            args.width, height
        ),
    }
    Ok(())
}
