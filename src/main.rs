use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use npdetect::export::{self, Report};
use npdetect::params::{DEFAULT_BLUR, DEFAULT_THRESHOLD, DEFAULT_TOPHAT};
use npdetect::session::read_grayscale;
use npdetect::{DetectionPipeline, Parameters};

#[derive(Parser)]
#[command(name = "npdetect")]
#[command(about = "Detect nanoparticles in grayscale micrographs")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Box blur kernel size
    #[arg(long, default_value_t = DEFAULT_BLUR, value_parser = clap::value_parser!(u32).range(1..=100))]
    blur: u32,

    /// Top-hat structuring element size
    #[arg(long, default_value_t = DEFAULT_TOPHAT, value_parser = clap::value_parser!(u32).range(1..=100))]
    tophat: u32,

    /// Binarization threshold
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, value_parser = clap::value_parser!(u32).range(0..=255))]
    threshold: u32,

    /// Write the annotated image here
    #[arg(short, long, value_name = "IMAGE")]
    output: Option<PathBuf>,

    /// Write the size histogram as CSV here
    #[arg(long, value_name = "CSV")]
    histogram: Option<PathBuf>,

    /// Print a JSON report instead of the status line
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save intermediate buffers to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let params = Parameters::new(args.blur, args.tophat, args.threshold)?;

    let source = read_grayscale(&args.image_path)
        .with_context(|| format!("Failed to load image {}", args.image_path.display()))?;
    log::debug!("Image loaded: {}x{}", source.width(), source.height());

    let mut pipeline = DetectionPipeline::new(params);
    if let Some(dir) = args.debug_out {
        pipeline = pipeline.with_debug(dir);
    }
    let detection = pipeline.detect(&source)?;

    if let Some(path) = &args.output {
        export::save_annotated(&detection, path)
            .with_context(|| format!("Failed to save image {}", path.display()))?;
    }
    if let Some(path) = &args.histogram {
        export::save_histogram(&detection.summary, path)
            .with_context(|| format!("Failed to save histogram {}", path.display()))?;
    }

    if args.json {
        println!("{}", Report::new(&detection, params).to_json()?);
        return Ok(());
    }

    println!("{}", detection.summary.status_message());
    if args.verbose && !detection.summary.is_empty() {
        println!("\n{:>18} {:>16}", "Particle Size (px)", "Amount Detected");
        for (area, count) in detection.summary.rows() {
            println!("{:>18} {:>16}", area, count);
        }
    }

    Ok(())
}
