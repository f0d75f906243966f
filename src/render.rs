//! Rendering of labeled rasters.
//!
//! The render backend is an injected service behind [`RenderSink`], not
//! ambient global state. The default implementation composes all panels
//! into a single grid PNG; panel labels travel with the panels and are
//! reported through tracing.

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use ndarray::ArrayView2;
use tracing::info;

use crate::error::{FilterError, Result};

/// One labeled grayscale panel to be rendered.
pub struct RenderPanel<'a> {
    pub label: &'static str,
    pub pixels: ArrayView2<'a, u8>,
}

/// A destination for a set of labeled panels (screen, file, ...).
pub trait RenderSink {
    fn present(&self, panels: &[RenderPanel<'_>]) -> Result<()>;
}

/// Writes panels as a row-major grid into a single grayscale PNG, with a
/// white gap between cells. Cell size is the maximum panel size, so
/// smaller panels sit in the top-left corner of their cell.
pub struct MontageWriter {
    path: PathBuf,
    columns: usize,
    gap: usize,
}

impl MontageWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            columns: 2,
            gap: 8,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderSink for MontageWriter {
    fn present(&self, panels: &[RenderPanel<'_>]) -> Result<()> {
        if panels.is_empty() {
            return Ok(());
        }

        let cell_h = panels.iter().map(|p| p.pixels.nrows()).max().unwrap_or(0);
        let cell_w = panels.iter().map(|p| p.pixels.ncols()).max().unwrap_or(0);
        let rows = panels.len().div_ceil(self.columns);

        let canvas_w = self.columns * cell_w + (self.columns + 1) * self.gap;
        let canvas_h = rows * cell_h + (rows + 1) * self.gap;
        let mut canvas = GrayImage::from_pixel(canvas_w as u32, canvas_h as u32, Luma([255u8]));

        for (i, panel) in panels.iter().enumerate() {
            let row = i / self.columns;
            let col = i % self.columns;
            let x0 = self.gap + col * (cell_w + self.gap);
            let y0 = self.gap + row * (cell_h + self.gap);

            info!(label = panel.label, row, col, "placing panel");

            for ((y, x), &v) in panel.pixels.indexed_iter() {
                canvas.put_pixel((x0 + x) as u32, (y0 + y) as u32, Luma([v]));
            }
        }

        canvas.save(&self.path).map_err(|e| FilterError::Render {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}
