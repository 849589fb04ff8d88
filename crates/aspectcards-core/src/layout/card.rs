//! Card faces.
//!
//! A [`CardFace`] is the resolved visual description of one card. The SVG
//! writer in [`crate::raster::svg`] turns it into markup that both the
//! desktop preview and the PNG export render.

pub use crate::catalog::EdgeLabels;
use crate::catalog::{AspectCard, NatureArtCard};
use crate::icons::{Icon, IconSet};
use crate::naming::slug;
use crate::theme::{resolve_style, CardStyle};

/// Card width in logical pixels (2.5 : 3.5 ratio).
pub const CARD_WIDTH: u32 = 200;
/// Card height in logical pixels.
pub const CARD_HEIGHT: u32 = 280;
pub const CARD_BORDER: f32 = 4.0;
pub const CARD_RADIUS: f32 = 12.0;

/// Relative text sizes used on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Edge labels (11px)
    Label,
    /// Headings of sections, descriptions (14px)
    Small,
    /// Action lists, perception (16px)
    Base,
    /// Card names (20px)
    Large,
}

impl TextSize {
    /// Font size in logical pixels.
    pub fn px(self) -> f32 {
        match self {
            TextSize::Label => 11.0,
            TextSize::Small => 14.0,
            TextSize::Base => 16.0,
            TextSize::Large => 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub size: TextSize,
    pub opacity: f32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, size: TextSize) -> Self {
        Self {
            text: text.into(),
            size,
            opacity: 1.0,
        }
    }

    pub fn faded(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Heading + body pair shown in the middle of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub label: String,
    pub text: String,
}

/// Tone of the shading gradient laid over the card background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Darkens towards the bottom (aspect cards)
    Dark,
    /// Lightens towards the bottom (nature art cards)
    Light,
}

/// Data-driven card front.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontFace {
    pub style: CardStyle,
    /// Icon drawn in all four corners
    pub icon: Option<Icon>,
    pub labels: EdgeLabels,
    pub sections: Vec<Section>,
    pub description: Option<String>,
    /// Free-form stacked groups of text (each group is one `section` element)
    pub body: Vec<Vec<TextBlock>>,
    pub overlay: Overlay,
}

/// Visual card: a data-driven front or the fixed design-only back.
#[derive(Debug, Clone, PartialEq)]
pub enum CardFace {
    Front(FrontFace),
    Back,
}

impl CardFace {
    /// Aspect card, optionally specialised to a single action.
    pub fn aspect(aspect: &AspectCard, action: Option<&str>, icons: &IconSet) -> Self {
        let mut heading = vec![TextBlock::new(&aspect.name, TextSize::Large)];
        if let Some(description) = &aspect.description {
            heading.push(TextBlock::new(description, TextSize::Small).faded(0.9));
        }

        let actions = match action {
            Some(action) => vec![
                TextBlock::new("Action", TextSize::Small).faded(0.9),
                TextBlock::new(action, TextSize::Base),
            ],
            None => vec![TextBlock::new(aspect.actions.join(", "), TextSize::Base)],
        };

        let find = vec![
            TextBlock::new("Find", TextSize::Small).faded(0.9),
            TextBlock::new(&aspect.perception, TextSize::Base),
        ];

        CardFace::Front(FrontFace {
            style: style_for(&aspect.style),
            icon: Some(icons.resolve(&aspect.icon)),
            labels: aspect.labels.clone(),
            sections: Vec::new(),
            description: None,
            body: vec![heading, actions, find],
            overlay: Overlay::Dark,
        })
    }

    /// Nature art card.
    pub fn nature_art(art: &NatureArtCard, icons: &IconSet) -> Self {
        let labels = EdgeLabels {
            top: art.labels.top.clone().or_else(|| Some(NATURE_ART_LABEL.to_string())),
            bottom: art.labels.bottom.clone().or_else(|| Some(NATURE_ART_LABEL.to_string())),
            left: art.labels.left.clone(),
            right: art.labels.right.clone(),
        };
        CardFace::Front(FrontFace {
            style: style_for(&art.style),
            icon: Some(icons.resolve(&art.icon)),
            labels,
            sections: vec![Section {
                label: "Art".to_string(),
                text: art.name.clone(),
            }],
            description: Some(art.description.clone()),
            body: Vec::new(),
            overlay: Overlay::Light,
        })
    }

    pub fn back() -> Self {
        CardFace::Back
    }

    pub fn is_back(&self) -> bool {
        matches!(self, CardFace::Back)
    }
}

const NATURE_ART_LABEL: &str = "Nature Art";

/// Display-name tag of an aspect card (`aggression` or `aggression-strike`).
///
/// `None` when the names leave nothing file-safe, so the fallback tag applies.
pub fn aspect_tag(aspect: &AspectCard, action: Option<&str>) -> Option<String> {
    let tag = match action {
        Some(action) => slug([aspect.name.as_str(), action]),
        None => slug([aspect.name.as_str()]),
    };
    non_empty(tag)
}

/// Display-name tag of a nature art card.
pub fn art_tag(art: &NatureArtCard) -> Option<String> {
    non_empty(slug([art.name.as_str()]))
}

fn non_empty(tag: String) -> Option<String> {
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

fn style_for(token: &str) -> CardStyle {
    resolve_style(token).unwrap_or_else(|| {
        tracing::warn!(token, "Unknown style token, using neutral");
        resolve_style("neutral").unwrap_or(FALLBACK_STYLE)
    })
}

const FALLBACK_STYLE: CardStyle = CardStyle {
    token: "neutral",
    background: crate::theme::Color::hex(0x404040),
    foreground: crate::theme::Color::hex(0xe5e5e5),
};
