use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::foundation::error::{BmpseqError, BmpseqResult};
use crate::pipeline::process::{Operation, StageTimings, process_image};

/// Inputs for one batch run.
#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Operation applied to every image.
    pub operation: Operation,
    /// Directory holding the input files.
    pub input_dir: PathBuf,
    /// Directory receiving the outputs, same filenames as the inputs.
    pub output_dir: PathBuf,
}

/// Terminal state of one input file.
#[derive(Clone, Debug, serde::Serialize)]
pub enum ImageOutcome {
    /// Output file written; stage breakdown attached.
    Written {
        /// Input file name.
        name: String,
        /// Per-stage wall-clock breakdown.
        timings: StageTimings,
    },
    /// Structurally invalid input; nothing written, batch continued.
    Skipped {
        /// Input file name.
        name: String,
        /// The specific structural reason.
        reason: String,
    },
    /// Read, pipeline, or write failure for this one image.
    Failed {
        /// Input file name.
        name: String,
        /// Rendered error chain.
        error: String,
    },
}

impl ImageOutcome {
    /// The input file name this outcome belongs to.
    pub fn name(&self) -> &str {
        match self {
            Self::Written { name, .. } | Self::Skipped { name, .. } | Self::Failed { name, .. } => {
                name
            }
        }
    }
}

/// Result of one batch run: every per-image outcome plus the aggregate
/// wall-clock duration.
#[derive(Clone, Debug, serde::Serialize)]
pub struct BatchReport {
    /// One entry per processed directory entry, unordered.
    pub outcomes: Vec<ImageOutcome>,
    /// Total wall-clock time for the whole batch.
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of output files written.
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImageOutcome::Written { .. }))
            .count()
    }

    /// Number of structurally invalid inputs skipped.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImageOutcome::Skipped { .. }))
            .count()
    }

    /// Number of per-image failures (read/write errors).
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImageOutcome::Failed { .. }))
            .count()
    }
}

/// Run one operation over every regular file in the input directory.
///
/// One rayon task per file, no ordering guarantee and no shared mutable
/// state between images; each task reads, processes, and writes its own
/// file end to end. A skip or failure for one image never affects another.
/// Only enumeration of the input directory itself can fail the whole run.
pub fn run_batch(opts: &BatchOptions) -> BmpseqResult<BatchReport> {
    let start = Instant::now();
    let files = list_files(&opts.input_dir)?;
    let pool = build_thread_pool()?;

    let outcomes = pool.install(|| {
        files
            .par_iter()
            .map(|path| process_one(path, opts))
            .collect::<Vec<_>>()
    });

    Ok(BatchReport {
        outcomes,
        elapsed: start.elapsed(),
    })
}

fn list_files(dir: &Path) -> BmpseqResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read input dir '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("enumerate '{}'", dir.display()))?;
        if entry
            .file_type()
            .with_context(|| format!("stat '{}'", entry.path().display()))?
            .is_file()
        {
            files.push(entry.path());
        }
    }
    Ok(files)
}

fn process_one(path: &Path, opts: &BatchOptions) -> ImageOutcome {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let total_start = Instant::now();

    let raw = match std::fs::read(path) {
        Ok(raw) => raw,
        Err(e) => {
            return ImageOutcome::Failed {
                name,
                error: format!("read '{}': {e}", path.display()),
            };
        }
    };

    let mut processed = match process_image(&raw, opts.operation) {
        Ok(processed) => processed,
        Err(BmpseqError::Decode(reason)) => {
            tracing::warn!(file = %name, %reason, "skipping image");
            return ImageOutcome::Skipped { name, reason };
        }
        Err(e) => {
            return ImageOutcome::Failed {
                name,
                error: e.to_string(),
            };
        }
    };

    let out_path = opts.output_dir.join(&name);
    let write_start = Instant::now();
    if let Err(e) = std::fs::write(&out_path, &processed.bytes) {
        return ImageOutcome::Failed {
            name,
            error: format!("write '{}': {e}", out_path.display()),
        };
    }
    processed.timings.store += write_start.elapsed();
    processed.timings.total = total_start.elapsed();

    tracing::debug!(file = %name, out = %out_path.display(), "image written");
    ImageOutcome::Written {
        name,
        timings: processed.timings,
    }
}

// Pool size follows available hardware parallelism; no user-facing limit.
fn build_thread_pool() -> BmpseqResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

#[cfg(test)]
#[path = "../../tests/unit/batch/runner.rs"]
mod tests;
