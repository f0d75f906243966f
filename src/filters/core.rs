//! Shared utilities for the spatial filters.
//!
//! This module provides functionality used by multiple filters:
//! - Gaussian kernel generation
//! - Boundary index handling (reflect and replicate padding)

/// Generate a 1D Gaussian kernel.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian
///
/// # Returns
/// Normalized 1D kernel as Vec<f32>
pub fn gaussian_kernel_1d(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }

    // Kernel size = 6 sigma (covers 99.7% of distribution), ensure odd
    let kernel_size = ((sigma * 6.0).ceil() as usize) | 1;
    let half = kernel_size / 2;

    let mut kernel: Vec<f32> = (0..kernel_size)
        .map(|i| {
            let x = i as f32 - half as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    // Normalize
    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Mirror an out-of-range index back into `0..len`.
///
/// Reflects about the array edge, so index -1 maps to 0 and index `len`
/// maps to `len - 1` (the "dcba|abcd|dcba" scheme).
///
/// # Arguments
/// * `index` - Possibly out-of-range index
/// * `len` - Axis length, must be non-zero
pub fn reflect_index(index: isize, len: usize) -> usize {
    let len = len as isize;
    let mut i = index;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= len {
            i = 2 * len - i - 1;
        } else {
            break;
        }
    }
    i as usize
}

/// Clamp an index into `0..len` (replicate padding).
pub fn clamp_index(index: isize, len: usize) -> usize {
    index.clamp(0, len as isize - 1) as usize
}
