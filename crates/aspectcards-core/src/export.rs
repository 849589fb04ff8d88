//! Export orchestrator.
//!
//! Produces one PNG per region plus one PNG per card of the composite region.
//! Every job of a batch is launched at once on the blocking pool; the batch
//! waits until each job has settled and folds the outcomes into a
//! [`BatchReport`]. A failing job never cancels or blocks its siblings, and
//! nothing is retried or rolled back.
//!
//! ```ignore
//! let exporter = Exporter::software(ExportConfig::default());
//! let regions = RegionSet::standard(&Catalog::builtin())?;
//! let report = exporter.export_all(LocalDirectory::shared("./out")?, &regions).await;
//! if !report.is_success() {
//!     eprintln!("{} exports failed", report.failure_count());
//! }
//! ```

use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info, warn};

use crate::config::ExportConfig;
use crate::directory::SharedDirectory;
use crate::error::CardResult;
use crate::layout::{ExportRegion, RegionSet};
use crate::naming::card_file_name;
use crate::raster::{FontLibrary, Rasterizer, SvgDocument, SvgRasterizer};
use crate::scale::scaled_size;

/// One unit of work: rasterize a document and write it under a fixed name.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub file_name: String,
    /// Sub-directory of the target, `None` for the target itself
    pub subdirectory: Option<String>,
    pub document: SvgDocument,
}

impl ExportJob {
    /// Path relative to the chosen directory, e.g. `cards/00_aggression.png`.
    pub fn relative_path(&self) -> String {
        match &self.subdirectory {
            Some(dir) => format!("{}/{}", dir, self.file_name),
            None => self.file_name.clone(),
        }
    }
}

/// A job that did not produce its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub file: String,
    pub error: String,
}

/// Aggregate outcome of one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Where the batch wrote to
    pub directory: String,
    pub launched: usize,
    /// Relative paths of files written, sorted
    pub written: Vec<String>,
    /// Failed jobs, sorted by file
    pub failures: Vec<ExportFailure>,
}

impl BatchReport {
    /// Jobs that reached a terminal state.
    pub fn settled(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line outcome for notifications.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!("Saved {} images to {}", self.written.len(), self.directory)
        } else {
            format!(
                "{} of {} exports failed ({} saved to {})",
                self.failure_count(),
                self.launched,
                self.written.len(),
                self.directory
            )
        }
    }
}

/// Runs export batches.
#[derive(Clone)]
pub struct Exporter {
    rasterizer: Arc<dyn Rasterizer>,
    config: ExportConfig,
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Exporter {
    pub fn new(rasterizer: Arc<dyn Rasterizer>, config: ExportConfig) -> Self {
        Self { rasterizer, config }
    }

    /// Exporter backed by the built-in resvg rasterizer.
    pub fn software(config: ExportConfig) -> Self {
        let fonts = FontLibrary::with_dirs(&config.font_dirs);
        Self::new(Arc::new(SvgRasterizer::new(fonts)), config)
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Every job a batch over `regions` launches.
    ///
    /// # Panics
    ///
    /// Panics when a region has no size: layout never ran for it, which is a
    /// programming error rather than an export failure.
    pub fn plan(&self, regions: &RegionSet) -> Vec<ExportJob> {
        let mut jobs = Vec::new();

        for region in regions.regions() {
            assert_laid_out(region);
            jobs.push(ExportJob {
                file_name: region.file_name.clone(),
                subdirectory: None,
                document: SvgDocument::region(region),
            });
        }

        for (index, child) in regions.composite().children.iter().enumerate() {
            jobs.push(ExportJob {
                file_name: card_file_name(index, child.tag.as_deref()),
                subdirectory: Some(self.config.cards_dir.clone()),
                document: SvgDocument::card(child),
            });
        }

        jobs
    }

    /// Run one batch and wait for every job to settle.
    pub async fn export_all(&self, directory: SharedDirectory, regions: &RegionSet) -> BatchReport {
        let jobs = self.plan(regions);
        let target = self.config.target_max_dimension;
        let location = directory.display_name();

        info!(directory = %location, jobs = jobs.len(), "Starting export batch");

        let (paths, handles): (Vec<_>, Vec<_>) = jobs
            .into_iter()
            .map(|job| {
                let directory = directory.clone();
                let rasterizer = self.rasterizer.clone();
                let path = job.relative_path();
                let handle = tokio::task::spawn_blocking(move || {
                    run_job(&job, directory, rasterizer.as_ref(), target)
                });
                (path, handle)
            })
            .unzip();

        // Wait for every job, successful or not
        let outcomes = join_all(handles).await;

        let mut report = BatchReport {
            directory: location,
            launched: paths.len(),
            ..Default::default()
        };

        for (file, joined) in paths.into_iter().zip(outcomes) {
            let outcome = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(join_error) => Err(format!("export task aborted: {}", join_error)),
            };
            match outcome {
                Ok(()) => report.written.push(file),
                Err(error) => {
                    error!(file = %file, error = %error, "Export failed");
                    report.failures.push(ExportFailure { file, error });
                }
            }
        }

        report.written.sort();
        report.failures.sort_by(|a, b| a.file.cmp(&b.file));

        if report.is_success() {
            info!(written = report.written.len(), "Export batch finished");
        } else {
            warn!(
                written = report.written.len(),
                failed = report.failure_count(),
                "Export batch finished with failures"
            );
        }

        report
    }
}

fn assert_laid_out(region: &ExportRegion) {
    assert!(
        region.is_laid_out(),
        "export region '{}' has no size; it was never laid out",
        region.id
    );
}

fn run_job(job: &ExportJob, directory: SharedDirectory, rasterizer: &dyn Rasterizer, target: u32) -> CardResult<()> {
    let (width, height) = scaled_size(job.document.width, job.document.height, target);
    let bytes = rasterizer.rasterize(&job.document, width, height)?;
    let directory = match &job.subdirectory {
        Some(name) => directory.directory(name)?,
        None => directory,
    };
    directory.write_file(&job.file_name, &bytes)
}
