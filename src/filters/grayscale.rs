//! Grayscale reduction.
//!
//! Collapses a multi-channel image to a single luminance plane using the
//! arithmetic mean of the channels, truncated to u8. No weighting is
//! applied; every channel contributes equally.

use ndarray::{Array2, ArrayView3};

/// Reduce a multi-channel image to grayscale by per-pixel channel mean.
///
/// The mean is truncated (not rounded) when cast back to u8, so e.g. a
/// pixel of (1, 2, 2) reduces to 1.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels) with u8 values
///
/// # Returns
/// 2D array of shape (height, width) with the truncated channel means
pub fn mean_grayscale(input: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array2::<u8>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            for c in 0..channels {
                sum += input[[y, x, c]] as u32;
            }
            output[[y, x]] = (sum as f32 / channels as f32) as u8;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_mean_of_equal_channels_is_identity() {
        let mut img = Array3::<u8>::zeros((2, 2, 3));
        for c in 0..3 {
            img[[0, 0, c]] = 128;
            img[[1, 1, c]] = 255;
        }

        let gray = mean_grayscale(img.view());

        assert_eq!(gray[[0, 0]], 128);
        assert_eq!(gray[[1, 1]], 255);
        assert_eq!(gray[[0, 1]], 0);
    }

    #[test]
    fn test_mean_is_truncated() {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 1;
        img[[0, 0, 1]] = 2;
        img[[0, 0, 2]] = 2;

        let gray = mean_grayscale(img.view());

        // 5 / 3 = 1.666..., truncated to 1
        assert_eq!(gray[[0, 0]], 1);
    }

    #[test]
    fn test_output_drops_channel_axis() {
        let img = Array3::<u8>::zeros((5, 7, 3));
        let gray = mean_grayscale(img.view());
        assert_eq!(gray.dim(), (5, 7));
    }
}
