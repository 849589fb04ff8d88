//! Card icons as SVG fragments.
//!
//! Every icon is drawn in a 24x24 box and paints with `currentColor`, so the
//! card decides its color. Identifiers follow the iconify convention
//! (`mingcute:sword-line`). A catalog may ship its own icon bodies, which take
//! precedence over the bundled set; identifiers found in neither render as a
//! monogram of their name.

use std::collections::BTreeMap;

use resvg::usvg;

use crate::error::{CardError, CardResult};

/// Side of the square every icon body is drawn in.
pub const ICON_VIEWBOX: f32 = 24.0;

/// Font stack shared by card text and monograms.
pub const FONT_STACK: &str = "Inter, 'Segoe UI', 'Helvetica Neue', Arial, 'DejaVu Sans', 'Liberation Sans', sans-serif";

const STROKE_OPEN: &str =
    r#"<g fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#;

/// A resolved icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub id: String,
    /// SVG markup in a 24x24 user space
    pub body: String,
    pub source: IconSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    /// Supplied by the catalog
    Catalog,
    Bundled,
    /// Unknown identifier drawn as its initial
    Monogram,
}

/// Icon lookup for one catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconSet {
    custom: BTreeMap<String, String>,
}

impl IconSet {
    pub fn new(custom: BTreeMap<String, String>) -> Self {
        Self { custom }
    }

    /// Resolve an identifier: catalog bodies first, then the bundled set.
    pub fn resolve(&self, id: &str) -> Icon {
        if let Some(body) = self.custom.get(id) {
            return Icon {
                id: id.to_string(),
                body: body.clone(),
                source: IconSource::Catalog,
            };
        }
        match bundled(id) {
            Some(paths) => Icon {
                id: id.to_string(),
                body: format!("{}{}</g>", STROKE_OPEN, paths),
                source: IconSource::Bundled,
            },
            None => Icon {
                id: id.to_string(),
                body: monogram(id),
                source: IconSource::Monogram,
            },
        }
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.custom.contains_key(id) || bundled(id).is_some()
    }
}

/// Bare icon name: collection prefix and `-line` suffix removed.
pub fn icon_name(id: &str) -> &str {
    let name = id.rsplit(':').next().unwrap_or(id);
    name.strip_suffix("-line").unwrap_or(name)
}

fn bundled(id: &str) -> Option<&'static str> {
    let paths = match icon_name(id) {
        "sword" => r#"<path d="M19 3h2v2L10 16l-2-2Z"/><path d="m5 13 6 6"/><path d="m8 16-4 4"/>"#,
        "forbid-circle" => r#"<circle cx="12" cy="12" r="9"/><path d="m5.6 5.6 12.8 12.8"/>"#,
        "eye" => r#"<path d="M2 12s3.6-7 10-7 10 7 10 7-3.6 7-10 7S2 12 2 12Z"/><circle cx="12" cy="12" r="3"/>"#,
        "shield-shape" | "shield" => r#"<path d="M12 3 4 6v6c0 5 3.4 8.3 8 9 4.6-.7 8-4 8-9V6Z"/>"#,
        "flame" => r#"<path d="M12 3c1 3 6 6 6 11a6 6 0 0 1-12 0c0-3 2-5 3-6 0 2 1 3 2 3 0-3-1-5 1-8Z"/>"#,
        "drop" => r#"<path d="M12 3s6 7 6 11a6 6 0 0 1-12 0c0-4 6-11 6-11Z"/>"#,
        "cloud-windy" => r#"<path d="M3 10h11a3 3 0 1 0-3-3"/><path d="M3 14h15a3 3 0 1 1-3 3"/><path d="M3 18h7"/>"#,
        "lightning" => r#"<path d="M13 2 4 14h7l-1 8 9-12h-7Z"/>"#,
        "leaf" => r#"<path d="M5 19C5 10 10 5 20 4c0 10-5 15-14 15Z"/><path d="m5 19 8-8"/>"#,
        "moon" => r#"<path d="M20 14.5A8 8 0 1 1 9.5 4a6.5 6.5 0 0 0 10.5 10.5Z"/>"#,
        "snow" => r#"<path d="M12 2v20M3.3 7l17.4 10M3.3 17 20.7 7"/><path d="m9 4 3 3 3-3M9 20l3-3 3 3"/>"#,
        "voice" => r#"<path d="M4 10v4M8 6v12M12 3v18M16 7v10M20 10v4"/>"#,
        "brain" => concat!(
            r#"<path d="M12 5a3 3 0 0 0-5.6-1.5A3 3 0 0 0 4 8a3 3 0 0 0 0 6 3 3 0 0 0 3 5 3 3 0 0 0 5 1Z"/>"#,
            r#"<path d="M12 5a3 3 0 0 1 5.6-1.5A3 3 0 0 1 20 8a3 3 0 0 1 0 6 3 3 0 0 1-3 5 3 3 0 0 1-5 1"/>"#,
        ),
        "planet" => concat!(
            r#"<circle cx="12" cy="12" r="6"/>"#,
            r#"<path d="M4.5 15.5C1.8 18.2 2 20 3.5 20.5c2 .7 7-1.8 11.5-6.3S22 4.5 20.5 3.5c-.5-.4-1.9-.4-4 .8"/>"#,
        ),
        "sun" => concat!(
            r#"<circle cx="12" cy="12" r="4"/>"#,
            r#"<path d="M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4"/>"#,
        ),
        "heartbeat-2" | "heartbeat" => concat!(
            r#"<path d="M19.5 13.5 12 21l-7.5-7.5A5 5 0 1 1 12 6.5a5 5 0 1 1 7.5 7"/>"#,
            r#"<path d="M3 12h5l2-3 3 6 2-3h6"/>"#,
        ),
        "pentagon" => r#"<path d="M12 2.5 21.5 9.4 17.9 20.5H6.1L2.5 9.4Z"/>"#,
        _ => return None,
    };
    Some(paths)
}

fn monogram(id: &str) -> String {
    let initial: String = icon_name(id)
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string());
    format!(
        r#"{}<circle cx="12" cy="12" r="10"/></g><text x="12" y="12" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="12" font-weight="600" fill="currentColor">{}</text>"#,
        STROKE_OPEN,
        FONT_STACK,
        escape(&initial)
    )
}

/// Check that a catalog-supplied body parses as SVG.
pub fn check_icon_body(id: &str, body: &str) -> CardResult<()> {
    let document = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">{}</svg>"#,
        body
    );
    usvg::Tree::from_str(&document, &usvg::Options::default())
        .map(|_| ())
        .map_err(|e| CardError::InvalidCatalog(format!("icon '{}' is not valid SVG: {}", id, e)))
}

/// Escape text for use in SVG content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_strips_prefix_and_suffix() {
        assert_eq!(icon_name("mingcute:sword-line"), "sword");
        assert_eq!(icon_name("lucide:pentagon"), "pentagon");
        assert_eq!(icon_name("planet"), "planet");
    }

    #[test]
    fn test_every_catalog_icon_is_bundled() {
        let icons = IconSet::default();
        let catalog = crate::catalog::Catalog::builtin();
        for id in catalog
            .aspects
            .iter()
            .map(|a| a.icon.as_str())
            .chain(catalog.arts.iter().map(|a| a.icon.as_str()))
            .chain(["lucide:pentagon", "mingcute:sun-line", "mingcute:heartbeat-2-line"])
        {
            assert_eq!(icons.resolve(id).source, IconSource::Bundled, "{}", id);
        }
    }

    #[test]
    fn test_bundled_icons_are_distinct() {
        let icons = IconSet::default();
        let sun = icons.resolve("mingcute:sun-line");
        let moon = icons.resolve("mingcute:moon-line");
        let unknown = icons.resolve("mingcute:nope");
        assert_ne!(sun.body, moon.body);
        assert_ne!(sun.body, unknown.body);
    }

    #[test]
    fn test_unknown_icon_is_monogram_of_its_name() {
        let icon = IconSet::default().resolve("mingcute:kettle-line");
        assert_eq!(icon.source, IconSource::Monogram);
        assert!(icon.body.contains(">K</text>"));
    }

    #[test]
    fn test_catalog_body_wins() {
        let mut custom = BTreeMap::new();
        custom.insert("mingcute:eye-line".to_string(), r#"<rect width="24" height="24"/>"#.to_string());
        let icon = IconSet::new(custom).resolve("mingcute:eye-line");
        assert_eq!(icon.source, IconSource::Catalog);
        assert_eq!(icon.body, r#"<rect width="24" height="24"/>"#);
    }

    #[test]
    fn test_bundled_bodies_parse() {
        let icons = IconSet::default();
        for id in ["sword", "brain", "planet", "sun", "heartbeat-2", "pentagon", "unknown"] {
            check_icon_body(id, &icons.resolve(id).body).unwrap();
        }
    }

    #[test]
    fn test_broken_body_rejected() {
        let err = check_icon_body("x", "<path d=").unwrap_err();
        assert!(err.to_string().contains("icon 'x'"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"Fire & <Ice> "x""#), "Fire &amp; &lt;Ice&gt; &quot;x&quot;");
    }
}
