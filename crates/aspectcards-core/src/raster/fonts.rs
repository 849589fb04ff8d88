//! Font discovery for SVG text.
//!
//! System fonts are scanned once per process; extra directories from the
//! export settings are layered on a copy of that database.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use resvg::usvg::fontdb::Database;
use tracing::{debug, info, warn};

/// Families tried, in order, for the generic `sans-serif` family.
const PREFERRED_SANS: &[&str] = &[
    "Inter",
    "Segoe UI",
    "Helvetica Neue",
    "Arial",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
];

static SYSTEM_FONTS: OnceLock<FontLibrary> = OnceLock::new();

/// Font database handed to the SVG parser.
#[derive(Debug, Clone)]
pub struct FontLibrary {
    database: Arc<Database>,
    default_family: Option<String>,
}

impl FontLibrary {
    /// Fonts installed on this machine.
    pub fn system() -> Self {
        SYSTEM_FONTS
            .get_or_init(|| {
                let mut database = Database::new();
                database.load_system_fonts();
                let library = Self::from_database(database);
                info!(faces = library.face_count(), family = ?library.default_family, "Loaded system fonts");
                library
            })
            .clone()
    }

    /// System fonts plus every font file found under `dirs`.
    pub fn with_dirs(dirs: &[PathBuf]) -> Self {
        if dirs.is_empty() {
            return Self::system();
        }
        let mut database = (*Self::system().database).clone();
        for dir in dirs {
            debug!(dir = %dir.display(), "Loading fonts");
            database.load_fonts_dir(dir);
        }
        Self::from_database(database)
    }

    fn from_database(mut database: Database) -> Self {
        let default_family = pick_sans_serif(&database);
        match &default_family {
            Some(family) => database.set_sans_serif_family(family.clone()),
            None => warn!("No fonts found, card text will not be drawn"),
        }
        Self {
            database: Arc::new(database),
            default_family,
        }
    }

    pub fn database(&self) -> Arc<Database> {
        self.database.clone()
    }

    /// Family used for `sans-serif` and for text without a family.
    pub fn default_family(&self) -> Option<&str> {
        self.default_family.as_deref()
    }

    pub fn face_count(&self) -> usize {
        self.database.len()
    }
}

fn pick_sans_serif(database: &Database) -> Option<String> {
    let families: Vec<&str> = database
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()))
        .collect();

    PREFERRED_SANS
        .iter()
        .find(|preferred| families.contains(*preferred))
        .map(|family| family.to_string())
        .or_else(|| families.first().map(|family| family.to_string()))
}
