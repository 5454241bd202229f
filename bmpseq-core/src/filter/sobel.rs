use rayon::prelude::*;

use crate::filter::kernel::{SOBEL_X, SOBEL_Y};
use crate::planes::split::ChannelPlanes;

/// Apply both Sobel gradient kernels to one channel plane and combine them
/// into a gradient-magnitude plane.
///
/// Each raw window sum is divided by 8 in floating point; the magnitude is
/// the L1 combination `|gx| + |gy|`, not Euclidean. The narrowing to u8
/// saturates at 255 rather than wrapping; with the /8 divisor the magnitude
/// is bounded by 255, so the clamp only matters if the divisor changes.
pub fn edge_plane(src: &[u8], width: usize, height: usize) -> Vec<u8> {
    debug_assert_eq!(src.len(), width * height);
    let mut out = vec![0u8; src.len()];
    out.par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, out_row)| {
            for (col, slot) in out_row.iter_mut().enumerate() {
                let gx = SOBEL_X.accumulate(src, width, height, row, col) as f32
                    / SOBEL_X.divisor as f32;
                let gy = SOBEL_Y.accumulate(src, width, height, row, col) as f32
                    / SOBEL_Y.divisor as f32;
                *slot = (gx.abs() + gy.abs()).min(255.0) as u8;
            }
        });
    out
}

/// Edge-detect all three channel planes independently.
///
/// Callers pass blurred planes; blur always runs first when edge detection
/// is requested.
pub fn edge_planes(planes: &ChannelPlanes, width: u32, height: u32) -> ChannelPlanes {
    let (w, h) = (width as usize, height as usize);
    ChannelPlanes {
        blue: edge_plane(&planes.blue, w, h),
        green: edge_plane(&planes.green, w, h),
        red: edge_plane(&planes.red, w, h),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/sobel.rs"]
mod tests;
