//! filtergrid
//!
//! One-shot image filter demonstration: load a raster image, derive a
//! Gaussian blur (sigma 2), a Sobel-magnitude edge map and a 3x3 median
//! filter from its grayscale reduction, and write all four as a 2x2
//! montage PNG.
//!
//! ## Pixel Buffers
//! Buffers are ndarray arrays of u8 samples:
//! - **Grayscale**: (height, width)
//! - **Multi-channel**: (height, width, channels), reduced to grayscale
//!   by channel mean before filtering
//!
//! The filtering core is [`engine::apply_filters`]; decoding and
//! rendering live behind [`io`] and [`render::RenderSink`] and are
//! replaceable collaborators, not part of the core.

pub mod engine;
pub mod error;
pub mod filters;
pub mod io;
pub mod render;

pub use crate::engine::{apply_filters, apply_filters_grayscale, reduce_to_grayscale, FilterResult};
pub use crate::error::{FilterError, Result};
