//! Spatial filters over grayscale pixel buffers.
//!
//! All filters here operate on a 2D `(height, width)` u8 buffer and
//! return a fresh buffer of the same dimensions; inputs are never
//! mutated. Multi-channel images are reduced first via
//! [`grayscale::mean_grayscale`].
//!
//! - **blur**: separable Gaussian convolution, reflect boundary
//! - **edge**: Sobel gradient magnitude, rescaled to [0, 255]
//! - **median**: order-statistic window filter, replicate boundary

pub mod blur;
pub mod core;
pub mod edge;
pub mod grayscale;
pub mod median;
