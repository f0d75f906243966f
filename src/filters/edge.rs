//! Sobel edge detection.
//!
//! Computes the 3x3 Sobel gradient along each axis, combines them as the
//! Euclidean magnitude and rescales so the strongest edge maps to 255.
//! A uniform image has no gradient to rescale; in that case the result is
//! all-zero rather than a division by zero.

use ndarray::{Array2, ArrayView2};
use tracing::debug;

use super::core::reflect_index;

/// Sobel kernel differentiating along the row axis (vertical gradient).
const SOBEL_ROW: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];
/// Sobel kernel differentiating along the column axis (horizontal gradient).
const SOBEL_COL: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Compute the normalized Sobel gradient magnitude of a grayscale image.
///
/// Both directional gradients use reflect boundary handling, so border
/// pixels get well-defined values. The magnitude map is divided by its
/// global maximum and scaled to [0, 255] with a truncating cast; the
/// maximum therefore always maps to exactly 255.
///
/// # Arguments
/// * `input` - Grayscale image (height, width) as u8
///
/// # Returns
/// Edge magnitude map with same dimensions; all-zero for a uniform input
pub fn sobel_magnitude(input: ArrayView2<u8>) -> Array2<u8> {
    let (height, width) = input.dim();
    if height == 0 || width == 0 {
        return Array2::<u8>::zeros((height, width));
    }

    let mut magnitude = Array2::<f32>::zeros((height, width));
    let mut max = 0.0f32;

    for y in 0..height {
        for x in 0..width {
            let mut grad_row = 0i32;
            let mut grad_col = 0i32;

            for ky in 0..3 {
                let sy = reflect_index(y as isize + ky as isize - 1, height);
                for kx in 0..3 {
                    let sx = reflect_index(x as isize + kx as isize - 1, width);
                    let v = input[[sy, sx]] as i32;

                    grad_row += v * SOBEL_ROW[ky][kx];
                    grad_col += v * SOBEL_COL[ky][kx];
                }
            }

            let mag = ((grad_row * grad_row + grad_col * grad_col) as f32).sqrt();
            if mag > max {
                max = mag;
            }
            magnitude[[y, x]] = mag;
        }
    }

    if max <= 0.0 {
        // Uniform input: nothing to normalize against, the edge map is
        // all-zero by definition.
        debug!(height, width, "zero gradient maximum, returning empty edge map");
        return Array2::<u8>::zeros((height, width));
    }

    magnitude.mapv(|v| (v / max * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sobel_detects_vertical_edge() {
        // Left side black, right side white
        let img = Array2::<u8>::from_shape_fn((5, 5), |(_, x)| if x < 2 { 0 } else { 255 });

        let result = sobel_magnitude(img.view());

        assert!(result[[2, 2]] > 0);
    }

    #[test]
    fn test_sobel_uniform_image_is_zero() {
        for value in [0u8, 128, 255] {
            let img = Array2::<u8>::from_elem((5, 5), value);
            let result = sobel_magnitude(img.view());
            assert!(
                result.iter().all(|&v| v == 0),
                "uniform {} image must produce empty edge map",
                value
            );
        }
    }

    #[test]
    fn test_sobel_maximum_maps_to_255() {
        let img = Array2::<u8>::from_shape_fn((6, 6), |(y, _)| if y < 3 { 0 } else { 200 });

        let result = sobel_magnitude(img.view());

        assert_eq!(result.iter().copied().max(), Some(255));
    }

    #[test]
    fn test_sobel_preserves_dimensions() {
        let img = Array2::<u8>::from_shape_fn((4, 9), |(y, x)| (y * x) as u8);
        let result = sobel_magnitude(img.view());
        assert_eq!(result.dim(), (4, 9));
    }
}
