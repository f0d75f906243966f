//! Image decoding into pixel buffers.
//!
//! Codec support (PNG, JPEG, ...) is delegated entirely to the `image`
//! crate; this module only reshapes decoded pixels into ndarray buffers.

use std::path::Path;

use image::DynamicImage;
use ndarray::{Array2, Array3, ArrayD};
use tracing::info;

use crate::error::{FilterError, Result};

/// Decode an image file into a pixel buffer.
///
/// Grayscale files come back as a 2D `(height, width)` buffer; anything
/// with color is converted to RGB and returned as a 3D
/// `(height, width, 3)` buffer.
///
/// # Errors
/// [`FilterError::Decode`] if the file is missing or unreadable
pub fn load_pixels(path: &Path) -> Result<ArrayD<u8>> {
    let decode_err = |reason: String| FilterError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let decoded = image::open(path).map_err(|e| decode_err(e.to_string()))?;

    let buffer = match decoded {
        DynamicImage::ImageLuma8(gray) => {
            let (width, height) = gray.dimensions();
            Array2::from_shape_vec((height as usize, width as usize), gray.into_raw())
                .map_err(|e| decode_err(e.to_string()))?
                .into_dyn()
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();
            Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())
                .map_err(|e| decode_err(e.to_string()))?
                .into_dyn()
        }
    };

    info!(path = %path.display(), shape = ?buffer.shape(), "decoded image");
    Ok(buffer)
}
