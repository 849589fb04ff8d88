//! Diagnostic log entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of a diagnostics file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,

    /// trace, debug, info, warn or error
    pub level: String,

    /// Module path of the event (e.g. "aspectcards_core::export")
    pub target: String,

    pub msg: String,

    /// Structured event fields (file, error, counts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

impl DiagnosticEntry {
    /// Create an entry stamped with the current time.
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Look up a string field recorded with the event.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.as_ref()?.get(name)?.as_str()
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_line() {
        let entry = DiagnosticEntry::new("error", "aspectcards_core::export", "Export failed")
            .with_fields(serde_json::json!({ "file": "cards/00_aggression.png" }));

        let line = entry.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"level\":\"error\""));

        let parsed = DiagnosticEntry::from_json_line(&line).unwrap();
        assert_eq!(parsed.field("file"), Some("cards/00_aggression.png"));
    }

    #[test]
    fn test_fields_omitted_when_empty() {
        let line = DiagnosticEntry::new("info", "t", "m").to_json_line().unwrap();
        assert!(!line.contains("fields"));
    }
}
