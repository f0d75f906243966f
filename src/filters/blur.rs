//! Gaussian blur for grayscale images.
//!
//! Uses separable 2-pass convolution for efficiency, with reflect
//! boundary handling so edge pixels see mirrored neighbors instead of
//! a darkened border.

use ndarray::{Array2, ArrayView2};

use super::core::{gaussian_kernel_1d, reflect_index};

/// Apply Gaussian blur to a grayscale image.
///
/// Works in f32 internally and rounds back to u8, so a uniform image
/// stays uniform.
///
/// # Arguments
/// * `input` - Grayscale image (height, width) as u8
/// * `sigma` - Standard deviation of the Gaussian kernel
///
/// # Returns
/// Blurred image with same dimensions
pub fn gaussian_blur(input: ArrayView2<u8>, sigma: f32) -> Array2<u8> {
    let (height, width) = input.dim();

    if sigma <= 0.0 || height == 0 || width == 0 {
        // No blur, return copy
        return input.to_owned();
    }

    let kernel = gaussian_kernel_1d(sigma);
    let half = kernel.len() / 2;

    // Work in f32 for precision
    let mut temp = Array2::<f32>::zeros((height, width));
    let mut result = Array2::<f32>::zeros((height, width));

    // Horizontal pass
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sx = reflect_index(x as isize + ki as isize - half as isize, width);
                sum += input[[y, sx]] as f32 * kv;
            }
            temp[[y, x]] = sum;
        }
    }

    // Vertical pass
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sy = reflect_index(y as isize + ki as isize - half as isize, height);
                sum += temp[[sy, x]] * kv;
            }
            result[[y, x]] = sum;
        }
    }

    // Convert back to u8
    result.mapv(|v| v.round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_zero_image_is_zero() {
        let img = Array2::<u8>::zeros((4, 4));
        let result = gaussian_blur(img.view(), 2.0);
        assert!(result.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_blur_preserves_uniform_image() {
        let img = Array2::<u8>::from_elem((6, 6), 128);
        let result = gaussian_blur(img.view(), 2.0);
        assert!(result.iter().all(|&v| v == 128));
    }

    #[test]
    fn test_blur_spreads_impulse() {
        let mut img = Array2::<u8>::zeros((9, 9));
        img[[4, 4]] = 255;

        let result = gaussian_blur(img.view(), 2.0);

        // Center attenuated, neighbors picked up energy
        assert!(result[[4, 4]] < 255);
        assert!(result[[4, 5]] > 0);
        assert!(result[[3, 4]] > 0);
    }

    #[test]
    fn test_blur_zero_sigma_is_copy() {
        let mut img = Array2::<u8>::zeros((3, 3));
        img[[1, 1]] = 200;
        let result = gaussian_blur(img.view(), 0.0);
        assert_eq!(result, img);
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = Array2::<u8>::zeros((5, 11));
        let result = gaussian_blur(img.view(), 2.0);
        assert_eq!(result.dim(), (5, 11));
    }
}
