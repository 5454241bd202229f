//! bmpseq batch-converts directories of 24-bit uncompressed BMP images.
//!
//! Each input file runs through a fixed per-image pipeline that turns raw
//! bytes into pixels and back:
//!
//! 1. **Decode**: raw file bytes -> [`BmpImage`] (header parse + structural validation)
//! 2. **Decompose**: interleaved, row-padded pixel bytes -> three [`ChannelPlanes`]
//! 3. **Filter** (optional): 5x5 Gaussian blur, then 3x3 Sobel gradients for edge detection
//! 4. **Recompose + Encode**: selected planes -> interleaved buffer -> fresh 54-byte header
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Two levels of data parallelism**: one rayon task per file, row-chunked
//!   rayon loops within a stage. Every stage is a full barrier; no image
//!   depends on another image's state.
//! - **Per-image recovery**: a structurally invalid file is skipped with a
//!   reason and the batch continues. Only environment errors abort the run.
//! - **No partial output**: a file is written only after its encode fully
//!   succeeded in memory.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod batch;
mod codec;
mod filter;
mod foundation;
mod pipeline;
mod planes;

pub use batch::runner::{BatchOptions, BatchReport, ImageOutcome, run_batch};
pub use codec::bmp::{
    BmpHeader, BmpImage, HEADER_LEN, decode_bmp, encode_bmp, row_padding, row_stride,
};
pub use filter::blur::{blur_plane, blur_planes};
pub use filter::kernel::{GAUSSIAN_5X5, Kernel, SOBEL_X, SOBEL_Y};
pub use filter::sobel::{edge_plane, edge_planes};
pub use foundation::error::{BmpseqError, BmpseqResult};
pub use pipeline::process::{
    Operation, ProcessedImage, ProcessedPlanes, StageTimings, process_image,
};
pub use planes::split::{ChannelPlanes, decompose, recompose};
