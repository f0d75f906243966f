//! Median filter.
//!
//! Removes salt-and-pepper noise while preserving edges better than
//! linear blur. Border pixels use replicate padding.

use ndarray::{Array2, ArrayView2};

use super::core::clamp_index;

/// Apply a median filter to a grayscale image.
///
/// # Arguments
/// * `input` - Grayscale image (height, width) as u8
/// * `radius` - Filter radius; 1 gives the classic 3x3 window
///
/// # Returns
/// Median-filtered image with same dimensions
pub fn median_filter(input: ArrayView2<u8>, radius: usize) -> Array2<u8> {
    let (height, width) = input.dim();
    let mut output = Array2::<u8>::zeros((height, width));
    if height == 0 || width == 0 {
        return output;
    }

    let window_size = (radius * 2 + 1) * (radius * 2 + 1);
    let mut values: Vec<u8> = Vec::with_capacity(window_size);

    for y in 0..height {
        for x in 0..width {
            values.clear();

            for dy in 0..=(radius * 2) {
                let sy = clamp_index(y as isize + dy as isize - radius as isize, height);
                for dx in 0..=(radius * 2) {
                    let sx = clamp_index(x as isize + dx as isize - radius as isize, width);
                    values.push(input[[sy, sx]]);
                }
            }

            values.sort_unstable();
            output[[y, x]] = values[values.len() / 2];
        }
    }

    output
}
