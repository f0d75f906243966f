//! The filter engine: one pixel buffer in, three derived rasters out.
//!
//! [`apply_filters`] is a pure function. It validates the input shape,
//! reduces to grayscale if needed, and computes the Gaussian blur, the
//! Sobel edge map and the median filter. The three rasters are
//! independent, so they are computed in parallel; the result does not
//! depend on scheduling.

use ndarray::{Array2, ArrayView2, ArrayViewD, Ix2, Ix3};
use tracing::info;

use crate::error::{FilterError, Result};
use crate::filters::{blur, edge, grayscale, median};

/// Standard deviation of the Gaussian blur raster.
pub const BLUR_SIGMA: f32 = 2.0;
/// Window radius of the median raster (1 = 3x3).
pub const MEDIAN_RADIUS: usize = 1;

/// The three derived rasters, all sharing the grayscale buffer's
/// dimensions. Built fresh on every [`apply_filters`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    pub gaussian: Array2<u8>,
    pub edge: Array2<u8>,
    pub median: Array2<u8>,
}

impl FilterResult {
    /// Labels of the rasters, in presentation order.
    pub const LABELS: [&'static str; 3] = ["gaussian", "edge", "median"];

    /// Look up a raster by label.
    pub fn get(&self, label: &str) -> Option<&Array2<u8>> {
        match label {
            "gaussian" => Some(&self.gaussian),
            "edge" => Some(&self.edge),
            "median" => Some(&self.median),
            _ => None,
        }
    }

    /// Iterate over `(label, raster)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Array2<u8>)> {
        [
            ("gaussian", &self.gaussian),
            ("edge", &self.edge),
            ("median", &self.median),
        ]
        .into_iter()
    }
}

/// Reduce a 2D or 3D pixel buffer to a 2D grayscale buffer.
///
/// A 3D buffer is collapsed by per-pixel channel mean with a truncating
/// cast; a 2D buffer is copied unchanged. Any other dimensionality is
/// rejected with [`FilterError::InvalidShape`].
pub fn reduce_to_grayscale(image: ArrayViewD<'_, u8>) -> Result<Array2<u8>> {
    match image.ndim() {
        2 => {
            let view = image
                .into_dimensionality::<Ix2>()
                .map_err(|_| FilterError::InvalidShape { ndim: 2 })?;
            Ok(view.to_owned())
        }
        3 => {
            let view = image
                .into_dimensionality::<Ix3>()
                .map_err(|_| FilterError::InvalidShape { ndim: 3 })?;
            Ok(grayscale::mean_grayscale(view))
        }
        ndim => Err(FilterError::InvalidShape { ndim }),
    }
}

/// Apply the three filters to a pixel buffer.
///
/// # Arguments
/// * `image` - 2D grayscale or 3D multi-channel buffer of u8 samples
///
/// # Returns
/// The `gaussian`, `edge` and `median` rasters, each with the grayscale
/// buffer's height and width
///
/// # Errors
/// [`FilterError::InvalidShape`] if the buffer is not 2D or 3D
pub fn apply_filters(image: ArrayViewD<'_, u8>) -> Result<FilterResult> {
    let gray = reduce_to_grayscale(image)?;
    Ok(apply_filters_grayscale(gray.view()))
}

/// Apply the three filters to an already-reduced grayscale buffer.
pub fn apply_filters_grayscale(gray: ArrayView2<'_, u8>) -> FilterResult {
    let (height, width) = gray.dim();
    info!(height, width, "applying filters");

    let (gaussian, (edge, median)) = rayon::join(
        || blur::gaussian_blur(gray.view(), BLUR_SIGMA),
        || {
            rayon::join(
                || edge::sobel_magnitude(gray.view()),
                || median::median_filter(gray.view(), MEDIAN_RADIUS),
            )
        },
    );

    FilterResult {
        gaussian,
        edge,
        median,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};

    #[test]
    fn test_rejects_1d_buffer() {
        let buf = ArrayD::<u8>::zeros(IxDyn(&[16]));
        let err = apply_filters(buf.view());
        assert!(matches!(err, Err(FilterError::InvalidShape { ndim: 1 })));
    }

    #[test]
    fn test_rejects_4d_buffer() {
        let buf = ArrayD::<u8>::zeros(IxDyn(&[2, 2, 2, 2]));
        let err = apply_filters(buf.view());
        assert!(matches!(err, Err(FilterError::InvalidShape { ndim: 4 })));
    }

    #[test]
    fn test_accepts_2d_and_3d_buffers() {
        let gray = ArrayD::<u8>::zeros(IxDyn(&[4, 4]));
        assert!(apply_filters(gray.view()).is_ok());

        let rgb = ArrayD::<u8>::zeros(IxDyn(&[4, 4, 3]));
        assert!(apply_filters(rgb.view()).is_ok());
    }

    #[test]
    fn test_result_lookup_by_label() {
        let gray = ArrayD::<u8>::zeros(IxDyn(&[4, 4]));
        let result = apply_filters(gray.view()).expect("valid shape");

        for label in FilterResult::LABELS {
            assert!(result.get(label).is_some());
        }
        assert!(result.get("laplacian").is_none());
        assert_eq!(result.iter().count(), 3);
    }
}
