//! Logging setup and the diagnostics file.
//!
//! Binaries log to the console through `tracing_subscriber::fmt` and, when a
//! logs directory is given, also append every event as JSON to
//! `<logs_dir>/<date>_<instance>.jsonl`. Export failures are logged with
//! `file` and `error` fields, so a failed batch can point the user at that
//! file.
//!
//! ```ignore
//! let log_path = LoggingBuilder::new("desktop")
//!     .with_filter("info")
//!     .with_logs_dir(logs_dir)
//!     .init();
//! ```
//!
//! ```bash
//! # Failed exports of today's desktop session
//! jq 'select(.level == "error") | .fields.file' logs/*_desktop.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::DiagnosticEntry;
pub use layer::{DiagnosticsLayer, LoggingBuilder};
pub use writer::{read_entries, DiagnosticsWriter};
