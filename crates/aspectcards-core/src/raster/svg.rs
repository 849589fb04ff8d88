//! SVG documents for regions and cards.
//!
//! Every exported image starts as one self-contained SVG document in logical
//! pixels. The desktop preview inlines the same markup, so what is shown is
//! what gets rasterized.

use std::fmt::Write as _;

use crate::icons::{escape, IconSet, FONT_STACK, ICON_VIEWBOX};
use crate::layout::{
    CardFace, ExportRegion, FrontFace, Overlay, RegionChild, TextBlock, TextSize, CARD_BORDER,
    CARD_HEIGHT, CARD_RADIUS, CARD_WIDTH,
};
use crate::theme::{Color, CARD_BACK_STOPS};

/// Line height relative to font size (`leading-tight`).
pub const LINE_HEIGHT: f32 = 1.25;

const STRIPE_PERIOD: f32 = 6.0;
const ICON_SIZE: f32 = 24.0;
const ICON_PADDING: f32 = 6.0;
const BACK_ICON_SIZE: f32 = 128.0;
const BACK_ICON: &str = "lucide:pentagon";
const LABEL_INSET: f32 = 10.0;
const SIDE_LABEL_OFFSET: f32 = 14.0;
const CONTENT_PADDING: f32 = 24.0;
const DESCRIPTION_PADDING: f32 = 20.0;
const ITEM_GAP: f32 = 12.0;
const BODY_GAP: f32 = 16.0;
const FONT_WEIGHT: u32 = 500;

/// A standalone SVG document and its logical size.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    pub markup: String,
}

impl SvgDocument {
    /// Document holding a whole region.
    pub fn region(region: &ExportRegion) -> Self {
        let mut writer = SvgWriter::new(region.id, region.width(), region.height());
        for (index, child) in region.children.iter().enumerate() {
            let (x, y) = region.child_origin(index);
            writer.card(&child.face, x as f32, y as f32);
        }
        writer.finish()
    }

    /// Document holding one card at the origin.
    pub fn card(child: &RegionChild) -> Self {
        let mut writer = SvgWriter::new("card", child.width(), child.height());
        writer.card(&child.face, 0.0, 0.0);
        writer.finish()
    }
}

/// Accumulates card markup; shared definitions are written by `finish`.
///
/// Definition ids carry `prefix` so several documents can be inlined in one
/// HTML page without clashing.
struct SvgWriter {
    prefix: &'static str,
    width: u32,
    height: u32,
    body: String,
}

impl SvgWriter {
    fn new(prefix: &'static str, width: u32, height: u32) -> Self {
        Self {
            prefix,
            width,
            height,
            body: String::new(),
        }
    }

    fn id(&self, name: &str) -> String {
        format!("{}-{}", self.prefix, name)
    }

    fn card(&mut self, face: &CardFace, x: f32, y: f32) {
        let _ = write!(self.body, r#"<g transform="translate({} {})">"#, x, y);
        let _ = write!(self.body, r#"<g clip-path="url(#{})">"#, self.id("clip"));
        match face {
            CardFace::Front(front) => self.front(front),
            CardFace::Back => self.back(),
        }
        self.body.push_str("</g>");

        let border = match face {
            CardFace::Front(front) => front.style.foreground,
            CardFace::Back => Color::BLACK.with_opacity(0.6),
        };
        let half = CARD_BORDER / 2.0;
        let _ = write!(
            self.body,
            r#"<rect x="{h}" y="{h}" width="{w}" height="{hh}" rx="{r}" fill="none" stroke-width="{b}" {stroke}/>"#,
            h = half,
            w = CARD_WIDTH as f32 - CARD_BORDER,
            hh = CARD_HEIGHT as f32 - CARD_BORDER,
            r = CARD_RADIUS - half,
            b = CARD_BORDER,
            stroke = paint("stroke", border),
        );
        self.body.push_str("</g>");
    }

    fn full_rect(&mut self, fill: &str) {
        let _ = write!(
            self.body,
            r#"<rect width="{}" height="{}" {}/>"#,
            CARD_WIDTH, CARD_HEIGHT, fill
        );
    }

    fn front(&mut self, face: &FrontFace) {
        let fg = face.style.foreground;

        self.full_rect(&paint("fill", face.style.background));
        self.full_rect(&format!(r#"fill="url(#{})""#, self.id("stripes")));
        let shade = match face.overlay {
            Overlay::Dark => self.id("shade-dark"),
            Overlay::Light => self.id("shade-light"),
        };
        self.full_rect(&format!(r#"fill="url(#{})""#, shade));

        if let Some(icon) = &face.icon {
            let near = ICON_PADDING;
            let far_x = CARD_WIDTH as f32 - ICON_PADDING - ICON_SIZE;
            let far_y = CARD_HEIGHT as f32 - ICON_PADDING - ICON_SIZE;
            for (ix, iy) in [(near, near), (far_x, near), (near, far_y), (far_x, far_y)] {
                self.icon(&icon.body, ix, iy, ICON_SIZE, fg, 0.7);
            }
        }

        self.edge_labels(face, fg.with_opacity(0.8));
        self.content(face, fg);
    }

    fn back(&mut self) {
        self.full_rect(&format!(r#"fill="url(#{})""#, self.id("back")));
        self.full_rect(&format!(r#"fill="url(#{})""#, self.id("stripes")));
        self.full_rect(&format!(r#"fill="url(#{})""#, self.id("shade-back")));

        let icon = IconSet::default().resolve(BACK_ICON);
        let x = (CARD_WIDTH as f32 - BACK_ICON_SIZE) / 2.0;
        let y = (CARD_HEIGHT as f32 - BACK_ICON_SIZE) / 2.0;
        // Drop shadow first
        self.icon(&icon.body, x + 2.0, y + 3.0, BACK_ICON_SIZE, Color::BLACK, 0.2);
        self.icon(&icon.body, x, y, BACK_ICON_SIZE, Color::BLACK, 0.45);
    }

    fn icon(&mut self, body: &str, x: f32, y: f32, size: f32, color: Color, opacity: f32) {
        let _ = write!(
            self.body,
            r#"<g transform="translate({} {}) scale({})" color="{}" opacity="{}">{}</g>"#,
            x,
            y,
            size / ICON_VIEWBOX,
            color.to_hex(),
            opacity,
            body
        );
    }

    fn edge_labels(&mut self, face: &FrontFace, color: Color) {
        let px = TextSize::Label.px();
        let half_line = px * LINE_HEIGHT / 2.0;
        let center_x = CARD_WIDTH as f32 / 2.0;
        let center_y = CARD_HEIGHT as f32 / 2.0;

        if let Some(top) = &face.labels.top {
            self.text(top, px, color, &at(center_x, LABEL_INSET + half_line));
        }
        if let Some(bottom) = &face.labels.bottom {
            let y = CARD_HEIGHT as f32 - LABEL_INSET - half_line;
            self.text(bottom, px, color, &at(center_x, y));
        }
        if let Some(left) = &face.labels.left {
            let transform = format!(
                r#"transform="translate({} {}) rotate(-90)""#,
                SIDE_LABEL_OFFSET, center_y
            );
            self.text(left, px, color, &transform);
        }
        if let Some(right) = &face.labels.right {
            let transform = format!(
                r#"transform="translate({} {}) rotate(90)""#,
                CARD_WIDTH as f32 - SIDE_LABEL_OFFSET,
                center_y
            );
            self.text(right, px, color, &transform);
        }
    }

    fn content(&mut self, face: &FrontFace, fg: Color) {
        let max_width = CARD_WIDTH as f32 - 2.0 * CONTENT_PADDING;
        let mut items = Vec::new();

        for section in &face.sections {
            let blocks = [
                TextBlock::new(&section.label, TextSize::Small).faded(0.8),
                TextBlock::new(&section.text, TextSize::Large),
            ];
            items.push(Item {
                lines: wrap_blocks(&blocks, max_width),
                gap_before: ITEM_GAP,
            });
        }
        if let Some(description) = &face.description {
            let width = CARD_WIDTH as f32 - 2.0 * DESCRIPTION_PADDING;
            items.push(Item {
                lines: wrap_blocks(&[TextBlock::new(description, TextSize::Base)], width),
                gap_before: ITEM_GAP,
            });
        }
        for (i, group) in face.body.iter().enumerate() {
            items.push(Item {
                lines: wrap_blocks(group, max_width),
                gap_before: if i == 0 { ITEM_GAP } else { BODY_GAP },
            });
        }

        let total: f32 = items
            .iter()
            .enumerate()
            .map(|(i, item)| item.height() + if i == 0 { 0.0 } else { item.gap_before })
            .sum();

        let center_x = CARD_WIDTH as f32 / 2.0;
        let mut y = (CARD_HEIGHT as f32 - total) / 2.0;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                y += item.gap_before;
            }
            for line in &item.lines {
                let line_height = line.size.px() * LINE_HEIGHT;
                let color = fg.with_opacity(line.opacity);
                self.text(&line.text, line.size.px(), color, &at(center_x, y + line_height / 2.0));
                y += line_height;
            }
        }
    }

    /// Centered upper-case text; `placement` positions its center point.
    fn text(&mut self, content: &str, px: f32, color: Color, placement: &str) {
        let _ = write!(
            self.body,
            r#"<text {} font-family="{}" font-size="{}" font-weight="{}" text-anchor="middle" dominant-baseline="central" {}>{}</text>"#,
            placement,
            FONT_STACK,
            px,
            FONT_WEIGHT,
            paint("fill", color),
            escape(&content.to_uppercase())
        );
    }

    fn finish(self) -> SvgDocument {
        let mut markup = String::new();
        let _ = write!(
            markup,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        markup.push_str("<defs>");
        let _ = write!(
            markup,
            r#"<clipPath id="{}"><rect width="{}" height="{}" rx="{}"/></clipPath>"#,
            self.id("clip"),
            CARD_WIDTH,
            CARD_HEIGHT,
            CARD_RADIUS
        );
        let _ = write!(
            markup,
            r#"<pattern id="{}" width="{p}" height="{p}" patternUnits="userSpaceOnUse" patternTransform="rotate(45)"><rect width="{}" height="{p}" {}/></pattern>"#,
            self.id("stripes"),
            STRIPE_PERIOD / 2.0,
            paint("fill", Color::BLACK.with_opacity(0.04)),
            p = STRIPE_PERIOD,
        );
        let black = Color::BLACK;
        let white = Color::WHITE;
        gradient(
            &mut markup,
            &self.id("shade-dark"),
            (0, 1, 0, 0),
            &[(0.0, black.with_opacity(0.2)), (0.5, black.with_opacity(0.05)), (1.0, Color::TRANSPARENT)],
        );
        gradient(
            &mut markup,
            &self.id("shade-light"),
            (0, 1, 0, 0),
            &[(0.0, white.with_opacity(0.2)), (0.4, white.with_opacity(0.1)), (1.0, white.with_opacity(0.0))],
        );
        gradient(
            &mut markup,
            &self.id("shade-back"),
            (0, 1, 0, 0),
            &[(0.0, black.with_opacity(0.15)), (1.0, Color::TRANSPARENT)],
        );
        let [from, via, to] = CARD_BACK_STOPS;
        gradient(&mut markup, &self.id("back"), (0, 0, 1, 1), &[(0.0, from), (0.5, via), (1.0, to)]);
        markup.push_str("</defs>");
        markup.push_str(&self.body);
        markup.push_str("</svg>");

        SvgDocument {
            width: self.width,
            height: self.height,
            markup,
        }
    }
}

/// `fill="#rrggbb" fill-opacity="a"` style paint attributes.
fn paint(property: &str, color: Color) -> String {
    format!(
        r#"{p}="{}" {p}-opacity="{:.3}""#,
        color.to_hex(),
        color.opacity(),
        p = property
    )
}

fn at(x: f32, y: f32) -> String {
    format!(r#"x="{}" y="{}""#, x, y)
}

/// Linear gradient in bounding-box units from `(x1, y1)` to `(x2, y2)`.
fn gradient(out: &mut String, id: &str, (x1, y1, x2, y2): (u8, u8, u8, u8), stops: &[(f32, Color)]) {
    let _ = write!(
        out,
        r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        id, x1, y1, x2, y2
    );
    for (offset, color) in stops {
        let _ = write!(
            out,
            r#"<stop offset="{}" stop-color="{}" stop-opacity="{:.3}"/>"#,
            offset,
            color.to_hex(),
            color.opacity()
        );
    }
    out.push_str("</linearGradient>");
}

/// One wrapped line of text.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    size: TextSize,
    opacity: f32,
}

/// Lines of one stacked content item.
struct Item {
    lines: Vec<Line>,
    gap_before: f32,
}

impl Item {
    fn height(&self) -> f32 {
        self.lines.iter().map(|line| line.size.px() * LINE_HEIGHT).sum()
    }
}

fn wrap_blocks(blocks: &[TextBlock], max_width: f32) -> Vec<Line> {
    blocks
        .iter()
        .flat_map(|block| {
            wrap(&block.text.to_uppercase(), block.size.px(), max_width)
                .into_iter()
                .map(move |text| Line {
                    text,
                    size: block.size,
                    opacity: block.opacity,
                })
        })
        .collect()
}

/// Approximate advance of upper-case sans-serif text at weight 500.
pub fn estimate_width(text: &str, font_px: f32) -> f32 {
    text.chars().map(advance_em).sum::<f32>() * font_px
}

fn advance_em(c: char) -> f32 {
    match c {
        ' ' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.28,
        'I' | 'J' | '1' => 0.35,
        'M' | 'W' => 0.85,
        c if c.is_uppercase() || c.is_ascii_digit() => 0.66,
        _ => 0.6,
    }
}

/// Greedy word wrap to `max_width`. Explicit newlines always break.
///
/// A single word wider than `max_width` is kept on its own line.
pub fn wrap(text: &str, font_px: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", line, word)
            };
            if !line.is_empty() && estimate_width(&candidate, font_px) > max_width {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            } else {
                line = candidate;
            }
        }
        lines.push(line);
    }
    lines
}
