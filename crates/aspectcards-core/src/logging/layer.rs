//! Tracing layer that mirrors events into the diagnostics file.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::DiagnosticEntry;
use super::writer::DiagnosticsWriter;

/// Writes every event it sees as one JSON line.
pub struct DiagnosticsLayer {
    writer: Arc<DiagnosticsWriter>,
}

impl DiagnosticsLayer {
    pub fn new(logs_dir: impl AsRef<Path>, instance: &str) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(DiagnosticsWriter::new(logs_dir, instance)?),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S: Subscriber> Layer<S> for DiagnosticsLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut entry = DiagnosticEntry::new(
            metadata.level().as_str().to_lowercase(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        // Logging must never panic the app
        let _ = self.writer.write(&entry);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }
}

/// Console logging plus an optional diagnostics file.
pub struct LoggingBuilder {
    instance: String,
    filter: String,
    logs_dir: Option<PathBuf>,
}

impl LoggingBuilder {
    /// `instance` names the diagnostics file (e.g. "desktop", "cli").
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            filter: "info".to_string(),
            logs_dir: None,
        }
    }

    /// Default filter when `RUST_LOG` is unset (e.g. "warn", "aspectcards_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_logs_dir(mut self, logs_dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(logs_dir.into());
        self
    }

    /// Install the global subscriber. Returns the diagnostics file path.
    ///
    /// A failure to open the diagnostics file only disables that file.
    pub fn init(self) -> Option<PathBuf> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter));

        let diagnostics = self.logs_dir.as_ref().and_then(|dir| {
            DiagnosticsLayer::new(dir, &self.instance)
                .map_err(|e| eprintln!("Diagnostics log disabled: {}", e))
                .ok()
        });
        let log_path = diagnostics.as_ref().map(|l| l.log_path().to_path_buf());

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .with(diagnostics)
            .try_init();

        log_path
    }
}
