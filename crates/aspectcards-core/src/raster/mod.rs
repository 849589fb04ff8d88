//! Rasterization adapter.
//!
//! A [`Rasterizer`] turns an [`SvgDocument`] into encoded PNG bytes at a
//! requested pixel size. The export pipeline only depends on the trait; the
//! built-in [`SvgRasterizer`] parses the document with `usvg`, draws it with
//! `resvg` into a `tiny-skia` pixmap and encodes it with `image`.

pub mod fonts;
pub mod svg;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::error::{CardError, CardResult};

pub use fonts::FontLibrary;
pub use svg::SvgDocument;

/// Converts a document into PNG bytes.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, document: &SvgDocument, width: u32, height: u32) -> CardResult<Vec<u8>>;
}

/// CPU rasterizer backed by resvg. Output is deterministic for a given font
/// set.
#[derive(Debug, Clone)]
pub struct SvgRasterizer {
    fonts: FontLibrary,
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new(FontLibrary::system())
    }
}

impl SvgRasterizer {
    pub fn new(fonts: FontLibrary) -> Self {
        Self { fonts }
    }

    /// Draw a document into a pixel buffer without encoding it.
    pub fn render(&self, document: &SvgDocument, width: u32, height: u32) -> CardResult<RgbaImage> {
        if width == 0 || height == 0 || document.width == 0 || document.height == 0 {
            return Err(CardError::Raster(format!(
                "cannot rasterize a {}x{} document to {}x{}",
                document.width, document.height, width, height
            )));
        }

        let mut options = usvg::Options::default();
        options.fontdb = self.fonts.database();
        if let Some(family) = self.fonts.default_family() {
            options.font_family = family.to_string();
        }
        let tree = usvg::Tree::from_str(&document.markup, &options)?;
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| CardError::Raster(format!("cannot allocate a {}x{} pixmap", width, height)))?;

        let transform = tiny_skia::Transform::from_scale(
            width as f32 / document.width as f32,
            height as f32 / document.height as f32,
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // Pixmaps are premultiplied, PNG wants straight alpha
        let pixels: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        RgbaImage::from_raw(width, height, pixels)
            .ok_or_else(|| CardError::Raster("pixel buffer does not match the image size".to_string()))
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, document: &SvgDocument, width: u32, height: u32) -> CardResult<Vec<u8>> {
        let image = self.render(document, width, height)?;
        encode_png(&image)
    }
}

/// Encode a pixel buffer as PNG (lossless).
pub fn encode_png(image: &RgbaImage) -> CardResult<Vec<u8>> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::layout::RegionSet;

    #[test]
    fn test_rasterize_produces_png_of_requested_size() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        let document = SvgDocument::region(&set.preview);
        let bytes = SvgRasterizer::default().rasterize(&document, 416, 140).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (416, 140));
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        let document = SvgDocument::card(&set.combined.children[0]);
        let rasterizer = SvgRasterizer::default();
        let a = rasterizer.rasterize(&document, 200, 280).unwrap();
        let b = rasterizer.rasterize(&document, 200, 280).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_card_pixels() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        let document = SvgDocument::card(&set.combined.children[0]);
        let image = SvgRasterizer::default().render(&document, 200, 280).unwrap();
        // Rounded corner stays transparent, border is opaque
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(100, 1)[3], 255);
        // Opaque background between the corner icons
        assert_eq!(image.get_pixel(100, 40)[3], 255);
    }

    #[test]
    fn test_back_is_drawn_from_its_gradient() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        let back = set.combined.children.last().unwrap();
        let image = SvgRasterizer::default().render(&SvgDocument::card(back), 200, 280).unwrap();
        let top_left = image.get_pixel(20, 20);
        let bottom_right = image.get_pixel(180, 260);
        assert_eq!(top_left[3], 255);
        assert_ne!(top_left, bottom_right);
    }

    #[test]
    fn test_empty_target_rejected() {
        let set = RegionSet::standard(&Catalog::builtin()).unwrap();
        let document = SvgDocument::card(&set.combined.children[0]);
        assert!(matches!(
            SvgRasterizer::default().rasterize(&document, 0, 10),
            Err(CardError::Raster(_))
        ));
    }

    #[test]
    fn test_malformed_markup_is_svg_error() {
        let document = SvgDocument {
            width: 10,
            height: 10,
            markup: "<svg".to_string(),
        };
        assert!(matches!(
            SvgRasterizer::default().rasterize(&document, 10, 10),
            Err(CardError::Svg(_))
        ));
    }
}
