#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod picker;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context as _, Result};
use aspectcards_core::logging::LoggingBuilder;
use aspectcards_core::scale::DEFAULT_TARGET_MAX_DIMENSION;
use aspectcards_core::{Catalog, ExportConfig, ExportController, Exporter, RegionSet};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::DesktopSession;

/// Global session, set once before launch
static SESSION: OnceLock<DesktopSession> = OnceLock::new();

/// Get the session created at startup.
pub fn get_session() -> Option<DesktopSession> {
    SESSION.get().cloned()
}

/// Aspect Cards - printable card sheets
#[derive(Parser, Debug)]
#[command(name = "aspectcards-desktop")]
#[command(about = "Aspect Cards - preview and export printable card sheets")]
struct Args {
    /// Diagnostics log directory (default: <data dir>/aspectcards/logs)
    #[arg(short, long)]
    logs_dir: Option<PathBuf>,

    /// Maximum pixel size of the longest side of exported images
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

    /// Catalog JSON file (default: built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn default_logs_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aspectcards")
        .join("logs")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = LoggingBuilder::new("desktop")
        .with_filter("info")
        .with_logs_dir(args.logs_dir.unwrap_or_else(default_logs_dir))
        .init();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path).with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let regions = RegionSet::standard(&catalog)?;
    let config = ExportConfig::default()
        .with_target_max_dimension(args.target_size)
        .with_font_dirs(args.font_dirs.iter().cloned());
    let exporter = Exporter::software(config);

    tracing::info!(
        aspects = catalog.aspects.len(),
        arts = catalog.arts.len(),
        target = args.target_size,
        "Starting Aspect Cards"
    );

    let _ = SESSION.set(DesktopSession {
        controller: ExportController::new(exporter, regions),
        log_path,
    });

    // Wide enough for the four-column split grid
    let window_width = 1100.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Aspect Cards")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);

    Ok(())
}
