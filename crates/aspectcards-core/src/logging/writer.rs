//! Append-only JSONL writer for diagnostics.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::DiagnosticEntry;

/// Appends entries to `<logs_dir>/<date>_<instance>.jsonl`.
pub struct DiagnosticsWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl DiagnosticsWriter {
    /// Open (or create) today's file for `instance`, creating `logs_dir`.
    pub fn new(logs_dir: impl AsRef<Path>, instance: &str) -> std::io::Result<Self> {
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = logs_dir.join(format!("{}_{}.jsonl", date, instance));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry and flush, so a crash loses nothing already logged.
    pub fn write(&self, entry: &DiagnosticEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

impl Drop for DiagnosticsWriter {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}

/// Read every entry of a diagnostics file, skipping malformed lines.
pub fn read_entries(path: impl AsRef<Path>) -> std::io::Result<Vec<DiagnosticEntry>> {
    let file = File::open(path)?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = DiagnosticEntry::from_json_line(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
