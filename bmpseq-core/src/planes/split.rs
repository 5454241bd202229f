use rayon::prelude::*;

use crate::codec::bmp::{row_padding, row_stride};
use crate::foundation::error::{BmpseqError, BmpseqResult};

/// Three flat, unpadded channel planes for one image, `width * height`
/// samples each.
///
/// 24-bit BMP rows store one byte of blue, green, red per pixel in that
/// order; interleaved slot `i % 3` maps 0 -> blue, 1 -> green, 2 -> red, and
/// [`decompose`]/[`recompose`] apply that mapping identically in both
/// directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelPlanes {
    /// Blue samples (first byte of every stored pixel).
    pub blue: Vec<u8>,
    /// Green samples.
    pub green: Vec<u8>,
    /// Red samples (last byte of every stored pixel).
    pub red: Vec<u8>,
}

impl ChannelPlanes {
    /// Allocate zeroed planes for a `width * height` image.
    pub fn zeroed(width: u32, height: u32) -> Self {
        let n = width as usize * height as usize;
        Self {
            blue: vec![0; n],
            green: vec![0; n],
            red: vec![0; n],
        }
    }
}

/// Split an interleaved, row-padded pixel buffer into three channel planes.
///
/// Padding bytes at the end of each stored row are dropped; they belong to
/// no plane. Rows are processed in parallel, one output row per task.
pub fn decompose(pixels: &[u8], width: u32, height: u32) -> BmpseqResult<ChannelPlanes> {
    let stride = row_stride(width);
    let w = width as usize;
    let h = height as usize;
    if pixels.len() != stride * h {
        return Err(BmpseqError::validation(format!(
            "decompose expects {} pixel bytes for {width}x{height}, got {}",
            stride * h,
            pixels.len()
        )));
    }

    let mut planes = ChannelPlanes::zeroed(width, height);
    planes
        .blue
        .par_chunks_mut(w)
        .zip(planes.green.par_chunks_mut(w))
        .zip(planes.red.par_chunks_mut(w))
        .enumerate()
        .for_each(|(row, ((blue_row, green_row), red_row))| {
            let src = &pixels[row * stride..row * stride + w * 3];
            for col in 0..w {
                blue_row[col] = src[col * 3];
                green_row[col] = src[col * 3 + 1];
                red_row[col] = src[col * 3 + 2];
            }
        });
    Ok(planes)
}

/// Merge three channel planes back into a freshly allocated interleaved
/// buffer of `row_stride(width) * height` bytes.
///
/// Padding slots are written as zero. Rows are processed in parallel.
pub fn recompose(planes: &ChannelPlanes, width: u32, height: u32) -> BmpseqResult<Vec<u8>> {
    let stride = row_stride(width);
    let pad = row_padding(width);
    let w = width as usize;
    let h = height as usize;
    let n = w * h;
    if planes.blue.len() != n || planes.green.len() != n || planes.red.len() != n {
        return Err(BmpseqError::validation(format!(
            "recompose expects {n} samples per plane for {width}x{height}, got {}/{}/{}",
            planes.blue.len(),
            planes.green.len(),
            planes.red.len()
        )));
    }

    let mut out = vec![0u8; stride * h];
    out.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(row, out_row)| {
            for col in 0..w {
                let sample = row * w + col;
                out_row[col * 3] = planes.blue[sample];
                out_row[col * 3 + 1] = planes.green[sample];
                out_row[col * 3 + 2] = planes.red[sample];
            }
            // Padding slots stay zero.
            debug_assert_eq!(out_row.len(), w * 3 + pad);
        });
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/planes/split.rs"]
mod tests;
