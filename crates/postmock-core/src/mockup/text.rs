use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::error::{PostmockError, Result};
use crate::mockup::draw;

/// Candidate system font locations tried by [`MockupFont::discover`].
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Typeface used to rasterize mockup text onto the output bitmap.
pub struct MockupFont {
    font: Font<'static>,
}

impl MockupFont {
    /// Parse TTF/OTF bytes into a usable face.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(bytes).ok_or_else(|| {
            PostmockError::ImageProcessing("font data could not be parsed".into())
        })?;
        Ok(Self { font })
    }

    /// Look for a sans-serif face in the usual system font locations.
    pub fn discover() -> Result<Self> {
        for path in FONT_CANDIDATES {
            if let Ok(bytes) = std::fs::read(path) {
                if let Ok(font) = Self::from_bytes(bytes) {
                    tracing::debug!(path, "using system font");
                    return Ok(font);
                }
            }
        }
        Err(PostmockError::ImageProcessing(
            "no usable sans-serif font found on this system".into(),
        ))
    }

    /// Natural line height (ascent to descent plus gap) at `px`.
    pub fn line_height(&self, px: f32) -> f32 {
        let vm = self.font.v_metrics(Scale::uniform(px));
        vm.ascent - vm.descent + vm.line_gap
    }

    /// Advance width of a single line of text at `px`.
    pub fn text_width(&self, px: f32, text: &str) -> f32 {
        let scale = Scale::uniform(px);
        let mut caret = 0.0f32;
        let mut last = None;
        for ch in text.chars() {
            let glyph = self.font.glyph(ch);
            let id = glyph.id();
            if let Some(prev) = last {
                caret += self.font.pair_kerning(scale, prev, id);
            }
            caret += glyph.scaled(scale).h_metrics().advance_width;
            last = Some(id);
        }
        caret
    }

    /// Draw one line of text; `y` is the top of the line box. Glyph coverage
    /// is alpha-blended onto the bitmap.
    pub fn draw(&self, img: &mut RgbaImage, px: f32, x: f32, y: f32, color: Rgba<u8>, text: &str) {
        let scale = Scale::uniform(px);
        let vm = self.font.v_metrics(scale);
        for glyph in self.font.layout(text, scale, point(x, y + vm.ascent)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let dx = gx as i32 + bb.min.x;
                let dy = gy as i32 + bb.min.y;
                if dx < 0 || dy < 0 {
                    return;
                }
                let (dx, dy) = (dx as u32, dy as u32);
                if dx >= img.width() || dy >= img.height() {
                    return;
                }
                draw::blend(img.get_pixel_mut(dx, dy), color, v);
            });
        }
    }

    /// Faux bold: no second face is bundled, so overstrike slightly right.
    pub fn draw_bold(
        &self,
        img: &mut RgbaImage,
        px: f32,
        x: f32,
        y: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        self.draw(img, px, x, y, color, text);
        self.draw(img, px, x + (px / 18.0).clamp(0.5, 1.5), y, color, text);
    }

    /// Word-wrap `text` to `max_width`, honoring embedded newlines. The
    /// first line is narrowed by `first_indent` (used for inline prefixes
    /// such as the Instagram caption username).
    pub fn wrap(&self, px: f32, text: &str, max_width: f32, first_indent: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for raw in text.split('\n') {
            if raw.trim().is_empty() {
                lines.push(String::new());
                continue;
            }
            let mut current = String::new();
            for word in raw.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                let available = if lines.is_empty() {
                    (max_width - first_indent).max(1.0)
                } else {
                    max_width
                };
                if current.is_empty() || self.text_width(px, &candidate) <= available {
                    current = candidate;
                } else {
                    lines.push(std::mem::take(&mut current));
                    current = word.to_string();
                }
            }
            lines.push(current);
        }
        lines
    }
}
