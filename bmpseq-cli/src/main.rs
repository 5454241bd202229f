use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

use bmpseq::{BatchOptions, BatchReport, ImageOutcome, Operation, run_batch};

#[derive(Parser, Debug)]
#[command(
    name = "bmpseq",
    version,
    about = "Batch-convert a directory of 24-bit uncompressed BMP images"
)]
struct Cli {
    /// Operation to apply to every bitmap.
    #[arg(value_enum)]
    operation: OperationArg,

    /// Directory holding the input bitmaps.
    input_dir: PathBuf,

    /// Directory receiving the outputs (same filenames).
    output_dir: PathBuf,

    /// Also print the batch report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationArg {
    /// Rebuild headers, keep pixels byte-identical.
    Copy,
    /// 5x5 Gaussian blur.
    Gauss,
    /// Sobel edge detection.
    Sobel,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Copy => Operation::Copy,
            OperationArg::Gauss => Operation::Gauss,
            OperationArg::Sobel => Operation::Sobel,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Both directories must exist before any file is touched.
    for (label, dir) in [("input", &cli.input_dir), ("output", &cli.output_dir)] {
        let meta = std::fs::metadata(dir)
            .with_context(|| format!("{label} directory '{}' cannot be opened", dir.display()))?;
        anyhow::ensure!(
            meta.is_dir(),
            "{label} path '{}' is not a directory",
            dir.display()
        );
    }

    println!("Input path: {}", cli.input_dir.display());
    println!("Output path: {}", cli.output_dir.display());
    println!();

    let opts = BatchOptions {
        operation: cli.operation.into(),
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
    };
    let report = run_batch(&opts)?;

    print_report(&opts, &report);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let failed = report.failed();
    anyhow::ensure!(failed == 0, "{failed} image(s) failed");
    Ok(())
}

fn print_report(opts: &BatchOptions, report: &BatchReport) {
    for outcome in &report.outcomes {
        match outcome {
            ImageOutcome::Written { name, timings } => {
                println!(
                    "File: {} (time: {})",
                    opts.input_dir.join(name).display(),
                    timings.total.as_micros()
                );
                println!("Load time: {}", timings.load.as_micros());
                println!("Gauss time: {}", timings.blur.as_micros());
                println!("Sobel time: {}", timings.edge.as_micros());
                println!("Store time: {}", timings.store.as_micros());
                println!();
            }
            ImageOutcome::Skipped { name, reason } => {
                eprintln!("skipped {name}: {reason}");
            }
            ImageOutcome::Failed { name, error } => {
                eprintln!("failed {name}: {error}");
            }
        }
    }

    println!(
        "{} written, {} skipped, {} failed in {:.3}s",
        report.written(),
        report.skipped(),
        report.failed(),
        report.elapsed.as_secs_f64()
    );
}
