//! Aspect Cards CLI
//!
//! Thin wrapper around aspectcards-core for headless exports.
//!
//! ## Usage
//!
//! ```bash
//! # Export every region and card into ./out
//! aspectcards export --out ./out
//!
//! # Export a custom catalog at a smaller size
//! aspectcards export --out ./out --catalog cards.json --target-size 1500
//!
//! # Show the catalog and the files an export produces
//! aspectcards list
//!
//! # Validate a catalog file
//! aspectcards check --catalog cards.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use aspectcards_core::logging::LoggingBuilder;
use aspectcards_core::scale::DEFAULT_TARGET_MAX_DIMENSION;
use aspectcards_core::{Catalog, ExportConfig, Exporter, LocalDirectory, RegionSet};
use clap::{Parser, Subcommand};

/// Aspect Cards - printable card sheet export
#[derive(Parser)]
#[command(name = "aspectcards")]
#[command(version = "0.1.0")]
#[command(about = "Aspect Cards - printable card sheet export")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Diagnostics log directory (default: <data dir>/aspectcards/logs)
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export every sheet and card as PNG
    Export {
        /// Output directory (created when missing)
        #[arg(short, long)]
        out: PathBuf,

        /// Catalog JSON file (default: built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Maximum pixel size of the longest side
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_TARGET_MAX_DIMENSION,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        target_size: u32,

        /// Extra font directory (repeatable)
        #[arg(long = "font-dir")]
        font_dirs: Vec<PathBuf>,
    },

    /// List the catalog and the files an export produces
    List {
        /// Catalog JSON file (default: built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog file
    Check {
        /// Catalog JSON file
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

fn setup_logging(verbosity: u8, logs_dir: PathBuf) -> Option<PathBuf> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    LoggingBuilder::new("cli")
        .with_filter(filter)
        .with_logs_dir(logs_dir)
        .init()
}

/// Get the default logs directory (<data dir>/aspectcards/logs)
fn default_logs_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aspectcards")
        .join("logs")
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("Failed to load catalog {}", path.display()))
        }
        None => {
            tracing::debug!("Using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = setup_logging(cli.verbose, cli.logs_dir.unwrap_or_else(default_logs_dir));

    match cli.command {
        Commands::Export {
            out,
            catalog,
            target_size,
            font_dirs,
        } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let regions = RegionSet::standard(&catalog)?;
            let config = ExportConfig::default()
                .with_target_max_dimension(target_size)
                .with_font_dirs(font_dirs);
            let exporter = Exporter::software(config);
            let directory = LocalDirectory::shared(&out)
                .with_context(|| format!("Cannot open output directory {}", out.display()))?;

            let report = exporter.export_all(directory, &regions).await;

            for file in &report.written {
                println!("  {}", file);
            }
            for failure in &report.failures {
                eprintln!("  FAILED {}: {}", failure.file, failure.error);
            }
            println!();
            println!("{}", report.summary());

            if !report.is_success() {
                if let Some(path) = &log_path {
                    eprintln!("Details in {}", path.display());
                }
                bail!("{} of {} exports failed", report.failure_count(), report.launched);
            }
        }

        Commands::List { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let regions = RegionSet::standard(&catalog)?;

            println!("Aspects ({}):", catalog.aspects.len());
            for aspect in &catalog.aspects {
                println!("  {} [{}]", aspect.name, aspect.style);
                println!("    Actions: {}", aspect.sorted_actions().join(", "));
                let arts: Vec<_> = catalog.arts_for(aspect).map(|art| art.name.as_str()).collect();
                if !arts.is_empty() {
                    println!("    Arts: {}", arts.join(", "));
                }
            }

            if !catalog.arts.is_empty() {
                println!();
                println!("Nature Arts ({}):", catalog.arts.len());
                for art in &catalog.arts {
                    println!("  {}: {}", art.name, art.description);
                }
            }

            println!();
            println!("Files ({}):", regions.job_count());
            for job in Exporter::software(ExportConfig::default()).plan(&regions) {
                println!("  {}", job.relative_path());
            }
        }

        Commands::Check { catalog } => {
            let catalog = load_catalog(Some(catalog.as_path()))?;
            let regions = RegionSet::standard(&catalog)?;

            println!(
                "Catalog OK: {} aspects, {} arts, {} files per export",
                catalog.aspects.len(),
                catalog.arts.len(),
                regions.job_count()
            );
        }
    }

    Ok(())
}
