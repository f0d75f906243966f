//! Command-line entry point: decode an image, run the filters, write
//! the montage.

use std::env;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use filtergrid::engine::{apply_filters_grayscale, reduce_to_grayscale};
use filtergrid::io::load_pixels;
use filtergrid::render::{MontageWriter, RenderPanel, RenderSink};

const DEFAULT_OUTPUT: &str = "filters.png";
const USAGE: &str = "usage: filtergrid <image> [output]";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let input = match args.next() {
        Some(path) => path,
        None => bail!("{USAGE}"),
    };
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    if args.next().is_some() {
        bail!("{USAGE}");
    }

    let pixels = load_pixels(Path::new(&input)).with_context(|| format!("loading {input}"))?;
    let gray = reduce_to_grayscale(pixels.view())?;
    let filtered = apply_filters_grayscale(gray.view());

    let mut panels = vec![RenderPanel {
        label: "original",
        pixels: gray.view(),
    }];
    panels.extend(filtered.iter().map(|(label, raster)| RenderPanel {
        label,
        pixels: raster.view(),
    }));

    let sink = MontageWriter::new(output);
    sink.present(&panels)
        .with_context(|| format!("writing {}", sink.path().display()))?;

    info!(output = %sink.path().display(), "montage written");
    Ok(())
}
