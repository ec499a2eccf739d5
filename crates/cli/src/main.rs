mod output;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use thiserror::Error;

use blurcheck_core::pipeline::batch_runner::BatchRunner;
use blurcheck_core::pipeline::blur_detector::BlurDetector;
use blurcheck_core::pipeline::process_result::ProcessResult;
use blurcheck_core::shared::constants::DEFAULT_THRESHOLD;
use blurcheck_core::source::infrastructure::auto_image_source::AutoImageSource;
use blurcheck_core::source::infrastructure::http_image_source::HttpImageSource;
use blurcheck_core::source::infrastructure::image_directory::list_images;

/// Detect blurry images using the variance of the Laplacian.
#[derive(Parser, Debug)]
#[command(name = "detect-blur")]
struct Cli {
    /// Directory of images to scan.
    #[arg(short, long)]
    images: Option<PathBuf>,

    /// URL of a single image to score.
    #[arg(short, long)]
    url: Option<String>,

    /// Focus measures below this value are reported as blurry.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    threshold: f64,

    /// Print results as a JSON array.
    #[arg(long)]
    json: bool,

    /// Only scan the top level of --images, skipping subdirectories.
    #[arg(long)]
    no_recursive: bool,

    /// Number of images to score concurrently.
    #[arg(short, long, default_value = "1")]
    jobs: usize,
}

#[derive(Error, Debug)]
enum ConfigurationError {
    #[error("one of --images or --url is required")]
    MissingSource,
    #[error("--images and --url are mutually exclusive")]
    ConflictingSources,
    #[error("threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),
    #[error("--jobs must be at least 1")]
    NoWorkers,
    #[error("image directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("could not read image directory {}: {source}", .path.display())]
    UnreadableDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq)]
enum InputSource {
    Directory(PathBuf),
    Url(String),
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let source = validate(&cli)?;

    let results = match source {
        InputSource::Url(url) => score_url(&url, cli.threshold)?,
        InputSource::Directory(dir) => score_directory(&dir, &cli)?,
    };

    let rendered = if cli.json {
        output::render_json(&results)?
    } else {
        output::render_text(&results)
    };
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Single-item mode: any failure is a top-level error.
fn score_url(url: &str, threshold: f64) -> Result<Vec<ProcessResult>, Box<dyn std::error::Error>> {
    let detector = BlurDetector::new(Box::new(HttpImageSource::new()?), threshold);
    let report = detector.process(url)?;
    Ok(vec![ProcessResult::Scored(report)])
}

/// Batch mode: per-image failures are reported inline.
fn score_directory(
    dir: &Path,
    cli: &Cli,
) -> Result<Vec<ProcessResult>, Box<dyn std::error::Error>> {
    let files = list_images(dir, !cli.no_recursive).map_err(|source| {
        ConfigurationError::UnreadableDirectory {
            path: dir.to_path_buf(),
            source,
        }
    })?;
    if files.is_empty() {
        log::warn!("No images found in {}", dir.display());
    }
    let identifiers: Vec<String> = files
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();

    let detector = BlurDetector::new(Box::new(AutoImageSource::new()?), cli.threshold);
    Ok(BatchRunner::new(cli.jobs).run(&identifiers, &detector))
}

fn validate(cli: &Cli) -> Result<InputSource, ConfigurationError> {
    if !cli.threshold.is_finite() {
        return Err(ConfigurationError::InvalidThreshold(cli.threshold));
    }
    if cli.jobs == 0 {
        return Err(ConfigurationError::NoWorkers);
    }
    match (&cli.images, &cli.url) {
        (Some(_), Some(_)) => Err(ConfigurationError::ConflictingSources),
        (None, None) => Err(ConfigurationError::MissingSource),
        (None, Some(url)) => Ok(InputSource::Url(url.clone())),
        (Some(dir), None) => {
            if !dir.is_dir() {
                return Err(ConfigurationError::DirectoryNotFound(dir.clone()));
            }
            Ok(InputSource::Directory(dir.clone()))
        }
    }
}
