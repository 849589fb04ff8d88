//! Export regions.
//!
//! A region is a group of cards captured as one image: either a single row
//! or a fixed-column grid, with an 8px gap between cards.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::{CardError, CardResult};

use super::card::{art_tag, aspect_tag, CardFace, CARD_HEIGHT, CARD_WIDTH};

/// Gap between cards in logical pixels.
pub const CARD_GAP: u32 = 8;

/// Columns of the split and art grids.
pub const GRID_COLUMNS: usize = 4;

pub const PREVIEW_FILE: &str = "aspect-cards-preview.png";
pub const COMBINED_FILE: &str = "aspect-cards-instincts.png";
pub const SPLIT_FILE: &str = "aspect-cards-instincts-split.png";
pub const ARTS_FILE: &str = "nature-art-cards.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLayout {
    Row,
    Grid { columns: usize },
}

/// One card inside a region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionChild {
    pub face: CardFace,
    /// Display name used to build per-card file names
    pub tag: Option<String>,
}

impl RegionChild {
    pub fn new(face: CardFace, tag: Option<String>) -> Self {
        Self { face, tag }
    }

    pub fn untagged(face: CardFace) -> Self {
        Self { face, tag: None }
    }

    pub fn width(&self) -> u32 {
        CARD_WIDTH
    }

    pub fn height(&self) -> u32 {
        CARD_HEIGHT
    }
}

/// A named, renderable group of cards.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRegion {
    pub id: &'static str,
    pub file_name: String,
    pub layout: RegionLayout,
    pub children: Vec<RegionChild>,
}

impl ExportRegion {
    /// Build a region, rejecting sibling tags that would collide on disk.
    pub fn new(
        id: &'static str,
        file_name: impl Into<String>,
        layout: RegionLayout,
        children: Vec<RegionChild>,
    ) -> CardResult<Self> {
        let region = Self {
            id,
            file_name: file_name.into(),
            layout,
            children,
        };
        region.check_unique_tags()?;
        Ok(region)
    }

    fn check_unique_tags(&self) -> CardResult<()> {
        let mut seen = HashSet::new();
        for tag in self.children.iter().filter_map(|c| c.tag.as_deref()) {
            if !seen.insert(tag) {
                return Err(CardError::DuplicateFileName {
                    region: self.id.to_string(),
                    name: tag.to_string(),
                });
            }
        }
        Ok(())
    }

    fn columns(&self) -> usize {
        let n = self.children.len();
        match self.layout {
            RegionLayout::Row => n,
            RegionLayout::Grid { columns } => n.min(columns.max(1)),
        }
    }

    fn rows(&self) -> usize {
        let columns = self.columns();
        if columns == 0 {
            0
        } else {
            self.children.len().div_ceil(columns)
        }
    }

    /// Width in logical pixels (0 when the region holds no cards).
    pub fn width(&self) -> u32 {
        span(self.columns(), CARD_WIDTH)
    }

    /// Height in logical pixels (0 when the region holds no cards).
    pub fn height(&self) -> u32 {
        span(self.rows(), CARD_HEIGHT)
    }

    /// Top-left corner of the child at `index`.
    pub fn child_origin(&self, index: usize) -> (u32, u32) {
        let columns = self.columns().max(1);
        let (row, col) = (index / columns, index % columns);
        (
            col as u32 * (CARD_WIDTH + CARD_GAP),
            row as u32 * (CARD_HEIGHT + CARD_GAP),
        )
    }

    pub fn is_laid_out(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
}

fn span(count: usize, size: u32) -> u32 {
    if count == 0 {
        0
    } else {
        count as u32 * size + (count as u32 - 1) * CARD_GAP
    }
}

/// The fixed set of regions exported in one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSet {
    /// One card per aspect
    pub preview: ExportRegion,
    /// One card per aspect plus the back; its children are exported one by one
    pub combined: ExportRegion,
    /// One card per aspect action (plus "Any") plus the back
    pub split: ExportRegion,
    /// One card per nature art, absent when the catalog has none
    pub arts: Option<ExportRegion>,
}

impl RegionSet {
    pub fn standard(catalog: &Catalog) -> CardResult<Self> {
        let icons = catalog.icon_set();
        let aspect_cards = || {
            catalog
                .aspects
                .iter()
                .map(|aspect| RegionChild::new(CardFace::aspect(aspect, None, &icons), aspect_tag(aspect, None)))
        };

        let preview = ExportRegion::new("preview", PREVIEW_FILE, RegionLayout::Row, aspect_cards().collect())?;

        let combined = ExportRegion::new(
            "combined",
            COMBINED_FILE,
            RegionLayout::Row,
            aspect_cards()
                .chain(std::iter::once(RegionChild::untagged(CardFace::back())))
                .collect(),
        )?;

        let mut split_children = Vec::new();
        for aspect in &catalog.aspects {
            for action in aspect.split_actions() {
                split_children.push(RegionChild::new(
                    CardFace::aspect(aspect, Some(action), &icons),
                    aspect_tag(aspect, Some(action)),
                ));
            }
        }
        split_children.push(RegionChild::untagged(CardFace::back()));
        let split = ExportRegion::new(
            "split",
            SPLIT_FILE,
            RegionLayout::Grid { columns: GRID_COLUMNS },
            split_children,
        )?;

        let arts = if catalog.arts.is_empty() {
            None
        } else {
            Some(ExportRegion::new(
                "arts",
                ARTS_FILE,
                RegionLayout::Grid { columns: GRID_COLUMNS },
                catalog
                    .arts
                    .iter()
                    .map(|art| RegionChild::new(CardFace::nature_art(art, &icons), art_tag(art)))
                    .collect(),
            )?)
        };

        Ok(Self {
            preview,
            combined,
            split,
            arts,
        })
    }

    /// Every region, in display order.
    pub fn regions(&self) -> Vec<&ExportRegion> {
        let mut regions = vec![&self.preview, &self.combined, &self.split];
        regions.extend(self.arts.as_ref());
        regions
    }

    /// The region whose children are also exported individually.
    pub fn composite(&self) -> &ExportRegion {
        &self.combined
    }

    /// Number of export jobs one batch launches.
    pub fn job_count(&self) -> usize {
        self.regions().len() + self.composite().children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_regions() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        assert_eq!(set.preview.children.len(), 4);
        assert_eq!(set.combined.children.len(), 5);
        assert!(set.combined.children[4].face.is_back());
        assert!(set.combined.children[4].tag.is_none());
        // 4 aspects x (3 actions + Any) + back
        assert_eq!(set.split.children.len(), 17);
        assert_eq!(set.arts.as_ref().unwrap().children.len(), 11);
        assert_eq!(set.regions().len(), 4);
        assert_eq!(set.job_count(), 9);
    }

    #[test]
    fn test_split_order() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        let tags: Vec<_> = set.split.children[..4]
            .iter()
            .map(|c| c.tag.clone().unwrap())
            .collect();
        assert_eq!(
            tags,
            vec!["aggression-dash", "aggression-hold", "aggression-strike", "aggression-any"]
        );
    }

    #[test]
    fn test_row_geometry() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        assert_eq!(set.combined.width(), 5 * 200 + 4 * 8);
        assert_eq!(set.combined.height(), 280);
        assert_eq!(set.combined.child_origin(2), (416, 0));
    }

    #[test]
    fn test_grid_geometry() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        // 17 cards in 4 columns -> 5 rows
        assert_eq!(set.split.width(), 4 * 200 + 3 * 8);
        assert_eq!(set.split.height(), 5 * 280 + 4 * 8);
        assert_eq!(set.split.child_origin(5), (208, 288));
    }

    #[test]
    fn test_empty_region_is_not_laid_out() {
        let region = ExportRegion::new("empty", "empty.png", RegionLayout::Row, Vec::new()).unwrap();
        assert_eq!(region.width(), 0);
        assert!(!region.is_laid_out());
    }

    #[test]
    fn test_duplicate_tags_rejected() {
        let children = vec![
            RegionChild::new(CardFace::back(), Some("same".to_string())),
            RegionChild::new(CardFace::back(), Some("same".to_string())),
        ];
        let err = ExportRegion::new("dup", "dup.png", RegionLayout::Row, children).unwrap_err();
        assert!(matches!(err, CardError::DuplicateFileName { .. }));
    }

    #[test]
    fn test_untagged_siblings_do_not_collide() {
        let children = vec![
            RegionChild::new(CardFace::back(), None),
            RegionChild::untagged(CardFace::back()),
        ];
        assert!(ExportRegion::new("plain", "plain.png", RegionLayout::Row, children).is_ok());
    }

    #[test]
    fn test_no_arts_region_without_arts() {
        let mut catalog = Catalog::builtin();
        catalog.arts.clear();
        for aspect in &mut catalog.aspects {
            aspect.arts.clear();
        }
        let set = RegionSet::standard(&catalog).unwrap();
        assert!(set.arts.is_none());
        assert_eq!(set.regions().len(), 3);
    }
}
