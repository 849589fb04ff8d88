//! Card Data Catalog
//!
//! Hand-authored aspect and nature art definitions. The catalog is built once
//! (either the built-in set or a JSON file) and never mutated afterwards.
//!
//! ## JSON shape
//!
//! ```json
//! {
//!   "aspects": [{
//!     "name": "Aggression",
//!     "description": "violence, brute force, athletic prowess",
//!     "actions": ["Strike", "Hold", "Dash"],
//!     "icon": "mingcute:sword-line",
//!     "perception": "a weakness",
//!     "style": "aspects-red",
//!     "arts": ["Ember"],
//!     "labels": { "left": "Aggression", "right": "Aggression" }
//!   }],
//!   "arts": [{
//!     "name": "Ember",
//!     "description": "Conjure flame and generate heat",
//!     "icon": "mingcute:flame-line",
//!     "style": "red"
//!   }],
//!   "icons": {
//!     "mingcute:flame-line": "<path fill=\"currentColor\" d=\"...\"/>"
//!   }
//! }
//! ```
//!
//! `arts`, `labels` and `icons` are optional. Icon bodies are SVG markup in a
//! 24x24 box and override the bundled icon of the same identifier.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CardError, CardResult};
use crate::icons::{check_icon_body, IconSet};
use crate::layout::RegionSet;
use crate::naming::slug;
use crate::theme::resolve_style;

/// Pseudo-action appended to every aspect on the split grid.
pub const ANY_ACTION: &str = "Any";

/// Text along the card edges. Left and right labels are rotated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl EdgeLabels {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// A thematic category of in-game capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectCard {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub actions: Vec<String>,
    pub icon: String,
    pub perception: String,
    /// Palette token, see [`crate::theme::resolve_style`]
    pub style: String,
    /// Names of associated nature arts (matched by name)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arts: Vec<String>,
    #[serde(default, skip_serializing_if = "EdgeLabels::is_empty")]
    pub labels: EdgeLabels,
}

impl AspectCard {
    /// Actions ordered case-insensitively, as shown on the split grid.
    pub fn sorted_actions(&self) -> Vec<&str> {
        let mut actions: Vec<&str> = self.actions.iter().map(String::as_str).collect();
        actions.sort_by_cached_key(|a| a.to_lowercase());
        actions
    }

    /// Sorted actions followed by [`ANY_ACTION`].
    pub fn split_actions(&self) -> Vec<&str> {
        let mut actions = self.sorted_actions();
        actions.push(ANY_ACTION);
        actions
    }
}

/// A secondary thematic category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatureArtCard {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub style: String,
    /// Top and bottom default to "Nature Art" when unset
    #[serde(default, skip_serializing_if = "EdgeLabels::is_empty")]
    pub labels: EdgeLabels,
}

/// The full card catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub aspects: Vec<AspectCard>,
    #[serde(default)]
    pub arts: Vec<NatureArtCard>,
    /// Icon bodies keyed by identifier
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, String>,
}

impl Catalog {
    /// The built-in hand-authored catalog.
    pub fn builtin() -> Self {
        let aspects = vec![
            aspect(
                "Aggression",
                "violence, brute force, athletic prowess",
                &["Strike", "Hold", "Dash"],
                "mingcute:sword-line",
                "a weakness",
                "aspects-red",
            ),
            aspect(
                "Evasion",
                "isolation, deflection, sidestepping",
                &["Evade", "Sneak", "Finesse"],
                "mingcute:forbid-circle-line",
                "a way out",
                "aspects-purple",
            ),
            aspect(
                "Influence",
                "social leverage, status, invisible pressure",
                &["Read", "Persuade", "Deceive"],
                "mingcute:eye-line",
                "an opportunity",
                "aspects-yellow",
            ),
            aspect(
                "Connection",
                "bonding, protection, safety",
                &["Protect", "Restore", "Charm"],
                "mingcute:shield-shape-line",
                "safety",
                "aspects-blue",
            ),
        ];

        let arts = vec![
            art("Ember", "Conjure flame and generate heat", "mingcute:flame-line", "red"),
            art("Flow", "Shape and propel natural liquids", "mingcute:drop-line", "blue"),
            art("Tempest", "Control wind and weather", "mingcute:cloud-windy-line", "teal"),
            art("Spark", "Summon and direct electrical energy", "mingcute:lightning-line", "yellow"),
            art("Stone", "Shift rocks and bend metals", "mingcute:cloud-windy-line", "neutral"),
            art("Verdance", "Manipulate or speak with plantlife", "mingcute:leaf-line", "green"),
            art("Void", "Manifest pure featureless darkness", "mingcute:moon-line", "purple"),
            art("Frost", "Freeze moisture and sculpt ice", "mingcute:snow-line", "slate"),
            art("Resonance", "Amplify, dampen, and project noise", "mingcute:voice-line", "cyan"),
            art("Psyche", "Manipulate the psyche of others", "mingcute:brain-line", "indigo"),
            art("Nebula", "Shape the fabric of reality", "mingcute:planet-line", "stone"),
        ];

        Self {
            aspects,
            arts,
            icons: BTreeMap::new(),
        }
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> CardResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading catalog");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn aspect(&self, name: &str) -> Option<&AspectCard> {
        self.aspects.iter().find(|a| a.name == name)
    }

    pub fn art(&self, name: &str) -> Option<&NatureArtCard> {
        self.arts.iter().find(|a| a.name == name)
    }

    /// Icon lookup including the catalog's own bodies.
    pub fn icon_set(&self) -> IconSet {
        IconSet::new(self.icons.clone())
    }

    /// Nature arts referenced by an aspect, skipping unresolved names.
    pub fn arts_for<'a>(&'a self, aspect: &'a AspectCard) -> impl Iterator<Item = &'a NatureArtCard> {
        aspect.arts.iter().filter_map(move |name| self.art(name))
    }

    /// Check the catalog for authoring mistakes.
    ///
    /// Runs at load time so typos surface before any export starts.
    pub fn validate(&self) -> CardResult<()> {
        if self.aspects.is_empty() {
            return Err(invalid("catalog has no aspects".to_string()));
        }

        for (id, body) in &self.icons {
            check_icon_body(id, body)?;
        }
        let icons = self.icon_set();

        let mut aspect_names = HashSet::new();
        for aspect in &self.aspects {
            check_name("aspect", &aspect.name)?;
            check_icon(&icons, &aspect.name, &aspect.icon);
            check_style(&aspect.name, &aspect.style)?;
            if !aspect_names.insert(aspect.name.to_lowercase()) {
                return Err(invalid(format!("duplicate aspect '{}'", aspect.name)));
            }

            let mut actions = HashSet::new();
            for action in &aspect.actions {
                check_name("action", action)?;
                if action.eq_ignore_ascii_case(ANY_ACTION) {
                    return Err(invalid(format!(
                        "aspect '{}' uses the reserved action '{}'",
                        aspect.name, ANY_ACTION
                    )));
                }
                if !actions.insert(action.to_lowercase()) {
                    return Err(invalid(format!(
                        "aspect '{}' lists action '{}' twice",
                        aspect.name, action
                    )));
                }
            }

            for art_name in &aspect.arts {
                if self.art(art_name).is_none() {
                    return Err(invalid(format!(
                        "aspect '{}' references unknown art '{}'",
                        aspect.name, art_name
                    )));
                }
            }
        }

        let mut art_names = HashSet::new();
        for art in &self.arts {
            check_name("art", &art.name)?;
            check_icon(&icons, &art.name, &art.icon);
            check_style(&art.name, &art.style)?;
            if !art_names.insert(art.name.to_lowercase()) {
                return Err(invalid(format!("duplicate art '{}'", art.name)));
            }
        }

        // Sibling file names must be unique in every region
        RegionSet::standard(self).map(|_| ())
    }
}

fn aspect(
    name: &str,
    description: &str,
    actions: &[&str],
    icon: &str,
    perception: &str,
    style: &str,
) -> AspectCard {
    AspectCard {
        name: name.to_string(),
        description: Some(description.to_string()),
        actions: actions.iter().map(|s| s.to_string()).collect(),
        icon: icon.to_string(),
        perception: perception.to_string(),
        style: style.to_string(),
        arts: Vec::new(),
        labels: EdgeLabels::default(),
    }
}

fn art(name: &str, description: &str, icon: &str, style: &str) -> NatureArtCard {
    NatureArtCard {
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        style: style.to_string(),
        labels: EdgeLabels::default(),
    }
}

fn invalid(msg: String) -> CardError {
    CardError::InvalidCatalog(msg)
}

fn check_name(kind: &str, name: &str) -> CardResult<()> {
    if name.trim().is_empty() {
        return Err(invalid(format!("empty {} name", kind)));
    }
    if slug([name]).is_empty() {
        debug!(kind, name, "Name has no file-safe characters, files use the fallback tag");
    }
    Ok(())
}

fn check_icon(icons: &IconSet, card: &str, id: &str) {
    if !icons.is_known(id) {
        warn!(card, icon = id, "Icon is not bundled, drawing a monogram");
    }
}

fn check_style(card: &str, token: &str) -> CardResult<()> {
    if resolve_style(token).is_none() {
        return Err(invalid(format!("card '{}' uses unknown style '{}'", card, token)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.aspects.len(), 4);
        assert_eq!(catalog.arts.len(), 11);
        catalog.validate().unwrap();
    }

    #[test]
    fn test_split_actions_sorted_case_insensitively() {
        let mut aggression = Catalog::builtin().aspect("Aggression").unwrap().clone();
        assert_eq!(aggression.split_actions(), vec!["Dash", "Hold", "Strike", "Any"]);

        aggression.actions = vec!["beta".into(), "Alpha".into(), "Gamma".into()];
        assert_eq!(aggression.sorted_actions(), vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_builtin_links_no_arts() {
        let catalog = Catalog::builtin();
        assert!(catalog.aspects.iter().all(|a| a.arts.is_empty()));
        assert!(catalog.icons.is_empty());
    }

    #[test]
    fn test_arts_for_resolves_by_name() {
        let mut catalog = Catalog::builtin();
        catalog.aspects[3].arts = vec!["Verdance".to_string(), "Flow".to_string()];
        let connection = catalog.aspect("Connection").unwrap();
        let names: Vec<_> = catalog.arts_for(connection).map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Verdance", "Flow"]);
    }

    #[test]
    fn test_invalid_icon_body_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.icons.insert("mingcute:sun-line".to_string(), "<circle r=".to_string());
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("icon 'mingcute:sun-line'"));
    }

    #[test]
    fn test_json_labels_and_icons() {
        let json = r#"{
            "aspects": [{
                "name": "Focus",
                "actions": ["Aim"],
                "icon": "custom:target",
                "perception": "a detail",
                "style": "aspects-green",
                "labels": { "left": "Focus", "right": "Focus" }
            }],
            "icons": { "custom:target": "<circle cx=\"12\" cy=\"12\" r=\"8\" fill=\"currentColor\"/>" }
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.aspects[0].labels.left.as_deref(), Some("Focus"));
        assert!(catalog.aspects[0].labels.top.is_none());
        assert!(catalog.icon_set().is_known("custom:target"));
    }

    #[test]
    fn test_unknown_art_reference_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.aspects[0].arts.push("Embr".to_string());
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("unknown art 'Embr'"));
    }

    #[test]
    fn test_duplicate_action_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.aspects[1].actions.push("sneak".to_string());
        assert!(matches!(catalog.validate(), Err(CardError::InvalidCatalog(_))));
    }

    #[test]
    fn test_reserved_action_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.aspects[2].actions.push("any".to_string());
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_unknown_style_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.arts[0].style = "bg-red-800".to_string();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("unknown style"));
    }

    #[test]
    fn test_json_roundtrip_of_builtin() {
        let builtin = Catalog::builtin();
        let json = serde_json::to_string(&builtin).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), builtin);
    }

    #[test]
    fn test_json_optional_fields() {
        let json = r#"{
            "aspects": [{
                "name": "Focus",
                "actions": ["Aim"],
                "icon": "mingcute:eye-line",
                "perception": "a detail",
                "style": "aspects-green"
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.aspects[0].description.is_none());
        assert!(catalog.arts.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ \"aspects\": 3 }"),
            Err(CardError::CatalogParse(_))
        ));
    }
}
