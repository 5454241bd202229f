use std::time::{Duration, Instant};

use crate::codec::bmp::{decode_bmp, encode_bmp};
use crate::filter::blur::blur_planes;
use crate::filter::sobel::edge_planes;
use crate::foundation::error::BmpseqResult;
use crate::planes::split::{ChannelPlanes, decompose, recompose};

/// The batch operation applied to every image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Rebuild the header, keep the pixel buffer byte-identical.
    Copy,
    /// 5x5 Gaussian blur.
    Gauss,
    /// Sobel edge detection (blur runs first).
    Sobel,
}

impl Operation {
    /// The CLI literal for this operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Gauss => "gauss",
            Self::Sobel => "sobel",
        }
    }
}

/// Which channel set feeds recomposition.
///
/// An explicit tagged choice instead of references into stage-local buffers,
/// so the selected planes own their data for as long as the encode needs
/// them.
#[derive(Clone, Debug)]
pub enum ProcessedPlanes {
    /// No planes; the original interleaved buffer is reused unchanged.
    Original,
    /// Output of the blur stage.
    Blurred(ChannelPlanes),
    /// Output of the edge-detection stage.
    EdgeDetected(ChannelPlanes),
}

impl ProcessedPlanes {
    /// The channel planes to recompose from, if any.
    pub fn channels(&self) -> Option<&ChannelPlanes> {
        match self {
            Self::Original => None,
            Self::Blurred(planes) | Self::EdgeDetected(planes) => Some(planes),
        }
    }
}

/// Wall-clock breakdown for one image.
///
/// `load` covers decode plus decompose, `store` covers recompose, encode and
/// the eventual file write. The batch runner adds the write portion and the
/// total after the pipeline returns.
#[derive(Clone, Copy, Debug, Default, serde::Serialize)]
pub struct StageTimings {
    /// Decode + decompose.
    pub load: Duration,
    /// Gaussian blur.
    pub blur: Duration,
    /// Sobel edge detection.
    pub edge: Duration,
    /// Recompose + encode + file write.
    pub store: Duration,
    /// Full pipeline including the write.
    pub total: Duration,
}

/// One fully processed image: the encoded output file bytes plus the stage
/// timings accumulated so far.
#[derive(Clone, Debug)]
pub struct ProcessedImage {
    /// Complete output file contents (54-byte header + pixel buffer).
    pub bytes: Vec<u8>,
    /// Stage breakdown; `store` excludes the file write and `total` is unset
    /// until the batch runner finishes the image.
    pub timings: StageTimings,
}

/// Run the per-image pipeline on one raw file buffer.
///
/// Stages are strictly sequential: decode -> validate -> decompose ->
/// blur (gauss/sobel) -> edge detect (sobel) -> recompose -> encode. Each
/// stage finishes entirely before the next begins. For [`Operation::Copy`]
/// every intermediate stage is bypassed and the original pixel buffer is
/// re-encoded under a rebuilt header.
///
/// Structural validation failures surface as [`BmpseqError::Decode`] and
/// skip this image only; no output bytes exist unless the whole pipeline
/// succeeded in memory.
///
/// [`BmpseqError::Decode`]: crate::BmpseqError::Decode
#[tracing::instrument(skip(raw), fields(len = raw.len()))]
pub fn process_image(raw: &[u8], op: Operation) -> BmpseqResult<ProcessedImage> {
    let mut timings = StageTimings::default();

    let load_start = Instant::now();
    let image = decode_bmp(raw)?;

    if op == Operation::Copy {
        timings.load = load_start.elapsed();
        let store_start = Instant::now();
        let bytes = encode_bmp(image.width, image.height, &image.pixels)?;
        timings.store = store_start.elapsed();
        return Ok(ProcessedImage { bytes, timings });
    }

    let planes = decompose(&image.pixels, image.width, image.height)?;
    timings.load = load_start.elapsed();

    let blur_start = Instant::now();
    let blurred = blur_planes(&planes, image.width, image.height);
    timings.blur = blur_start.elapsed();

    let selected = if op == Operation::Sobel {
        let edge_start = Instant::now();
        let edges = edge_planes(&blurred, image.width, image.height);
        timings.edge = edge_start.elapsed();
        ProcessedPlanes::EdgeDetected(edges)
    } else {
        ProcessedPlanes::Blurred(blurred)
    };

    let store_start = Instant::now();
    let channels = selected
        .channels()
        .expect("gauss/sobel always produce channel planes");
    let interleaved = recompose(channels, image.width, image.height)?;
    let bytes = encode_bmp(image.width, image.height, &interleaved)?;
    timings.store = store_start.elapsed();

    tracing::debug!(op = op.as_str(), width = image.width, height = image.height, "processed image");
    Ok(ProcessedImage { bytes, timings })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/process.rs"]
mod tests;
