use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tidyseed_core::report::format_organized;
use tidyseed_core::{load_config, validate_config, Classification, ClassifiedFile, Organizer};

#[derive(Parser)]
#[command(name = "tidyseed")]
#[command(version)]
#[command(about = "Apply a stored classification to a finished torrent's directory")]
struct Args {
    /// Directory holding the torrent's downloaded content
    torrent_root: PathBuf,

    /// Classification JSON file describing every file to place
    #[arg(short, long)]
    classification: PathBuf,

    /// File listing the torrent's original paths, one per line
    ///
    /// Paths are relative to the torrent root. Listed files are
    /// hard-linked into the library so the torrent keeps seeding;
    /// everything else is treated as an extraction byproduct and moved.
    /// When omitted, every classified file counts as original.
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Display name used in the report (defaults to the directory name)
    #[arg(short, long)]
    name: Option<String>,

    /// Config file path (falls back to TIDYSEED_CONFIG, then config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(error_count) => {
            if error_count > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Fatal error: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<usize> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Determine config path
    let config_path = args.config.clone().unwrap_or_else(|| {
        std::env::var("TIDYSEED_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"))
    });

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;
    info!(
        "Effective configuration: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    // The library roots must already exist; nothing is created above the
    // series directories.
    for root in [&config.library.movies_root, &config.library.series_root] {
        if !root.is_dir() {
            bail!("Library root does not exist: {}", root.display());
        }
    }
    if !args.torrent_root.is_dir() {
        bail!(
            "Torrent root does not exist: {}",
            args.torrent_root.display()
        );
    }

    // Read the stored classification
    let classification_json = std::fs::read_to_string(&args.classification).with_context(|| {
        format!(
            "Failed to read classification from {:?}",
            args.classification
        )
    })?;
    let classification: Classification = serde_json::from_str(&classification_json)
        .with_context(|| format!("Failed to parse classification {:?}", args.classification))?;
    classification
        .validate()
        .context("Classification failed validation")?;
    info!("Classification loaded: {} files", classification.files.len());

    let manifest_text = match &args.manifest {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read manifest from {:?}", path))?,
        ),
        None => None,
    };
    let original_files = original_set(manifest_text.as_deref(), &classification.files);

    let torrent_name = args
        .name
        .clone()
        .unwrap_or_else(|| display_name(&args.torrent_root));

    // Organize
    let organizer = Organizer::new(&config.library);
    let result = organizer
        .organize(&args.torrent_root, &original_files, &classification.files)
        .await;

    let report = format_organized(&torrent_name, &classification, &result, false);
    println!("{report}");

    Ok(result.errors.len())
}

/// Original file paths deciding hard-link versus move.
fn original_set(manifest_text: Option<&str>, files: &[ClassifiedFile]) -> HashSet<String> {
    match manifest_text {
        Some(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => files.iter().map(|f| f.file_path().to_string()).collect(),
    }
}

fn display_name(torrent_root: &Path) -> String {
    torrent_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "torrent".to_string())
}
