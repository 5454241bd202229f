use rayon::prelude::*;

use crate::filter::kernel::GAUSSIAN_5X5;
use crate::planes::split::ChannelPlanes;

/// Apply the 5x5 Gaussian kernel to one channel plane.
///
/// Each result sample is the window sum divided by 273 with truncation
/// toward zero. Out-of-range neighbors contribute nothing. The output is a
/// fresh plane; the input is never modified, so later stages can still read
/// the un-blurred data.
pub fn blur_plane(src: &[u8], width: usize, height: usize) -> Vec<u8> {
    debug_assert_eq!(src.len(), width * height);
    let mut out = vec![0u8; src.len()];
    out.par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, out_row)| {
            for (col, slot) in out_row.iter_mut().enumerate() {
                let sum = GAUSSIAN_5X5.accumulate(src, width, height, row, col);
                // All weights are positive and sum to the divisor, so the
                // quotient always fits in a u8.
                *slot = (sum / GAUSSIAN_5X5.divisor) as u8;
            }
        });
    out
}

/// Blur all three channel planes independently.
pub fn blur_planes(planes: &ChannelPlanes, width: u32, height: u32) -> ChannelPlanes {
    let (w, h) = (width as usize, height as usize);
    ChannelPlanes {
        blue: blur_plane(&planes.blue, w, h),
        green: blur_plane(&planes.green, w, h),
        red: blur_plane(&planes.red, w, h),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/blur.rs"]
mod tests;
