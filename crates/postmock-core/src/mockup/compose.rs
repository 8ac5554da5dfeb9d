use image::{Rgba, RgbaImage};

use crate::crop::FinalImage;
use crate::error::{PostmockError, Result};
use crate::mockup::draw;
use crate::mockup::icons;
use crate::mockup::layout::{layout_for, AvatarShape, CaptionPlacement, PlatformLayout};
use crate::mockup::text::MockupFont;
use crate::post::{AspectRatio, Platform};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TEXT_PRIMARY: Rgba<u8> = Rgba([15, 23, 42, 255]);
const TEXT_SECONDARY: Rgba<u8> = Rgba([100, 116, 139, 255]);
const TEXT_MUTED: Rgba<u8> = Rgba([148, 163, 184, 255]);
const LINK_BLUE: Rgba<u8> = Rgba([29, 78, 216, 255]);
const TWITTER_BLUE: Rgba<u8> = Rgba([59, 130, 246, 255]);
const BORDER: Rgba<u8> = Rgba([229, 231, 235, 255]);
const BORDER_LIGHT: Rgba<u8> = Rgba([243, 244, 246, 255]);
const MEDIA_BG: Rgba<u8> = Rgba([249, 250, 251, 255]);
const AVATAR_BG: Rgba<u8> = Rgba([148, 163, 184, 255]);
const BADGE_BLUE: Rgba<u8> = Rgba([24, 119, 242, 255]);
const BADGE_RED: Rgba<u8> = Rgba([239, 68, 68, 255]);
const BADGE_GREEN: Rgba<u8> = Rgba([34, 197, 94, 255]);

/// One fully specified mockup to composite.
pub struct MockupRequest<'a> {
    pub platform: Platform,
    pub username: &'a str,
    pub image: &'a FinalImage,
    pub aspect_ratio: AspectRatio,
    pub caption: &'a str,
    pub hashtags: &'a str,
}

/// Composites post mockups into RGBA bitmaps.
pub struct MockupRenderer {
    font: MockupFont,
}

impl MockupRenderer {
    pub fn new(font: MockupFont) -> Self {
        Self { font }
    }

    /// Build a renderer from a discovered system font.
    pub fn with_system_font() -> Result<Self> {
        Ok(Self::new(MockupFont::discover()?))
    }

    pub fn font(&self) -> &MockupFont {
        &self.font
    }

    /// Composite `req` at `scale` (1.0 = the layout's native pixel metrics).
    /// The height follows from the header, wrapped text, media block and
    /// action bar; the width is the platform container width times `scale`.
    pub fn render(&self, req: &MockupRequest<'_>, scale: f32) -> Result<RgbaImage> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(PostmockError::ImageProcessing(format!(
                "invalid render scale {scale}"
            )));
        }

        let layout = layout_for(req.platform);
        let composer = Composer {
            font: &self.font,
            layout,
            req,
            s: scale,
        };

        let width = (layout.container_width as f32 * scale).round() as u32;
        let height = (composer.run(&mut Surface::Measure).ceil() as u32).max(1);

        let mut img = RgbaImage::from_pixel(width, height, WHITE);
        composer.run(&mut Surface::Draw(&mut img));
        draw::stroke_rounded_rect(
            &mut img,
            0.5,
            0.5,
            width as f32 - 1.0,
            height as f32 - 1.0,
            0.0,
            1.0,
            BORDER,
        );

        tracing::debug!(platform = %req.platform, width, height, scale, "mockup composed");
        Ok(img)
    }
}

/// Blocks report their height on both passes and paint only on the second.
enum Surface<'a> {
    Measure,
    Draw(&'a mut RgbaImage),
}

struct Composer<'a> {
    font: &'a MockupFont,
    layout: &'a PlatformLayout,
    req: &'a MockupRequest<'a>,
    s: f32,
}

impl Composer<'_> {
    fn px(&self, v: f32) -> f32 {
        v * self.s
    }

    fn width(&self) -> f32 {
        self.layout.container_width as f32 * self.s
    }

    fn display_name(&self) -> &str {
        let name = self.req.username.trim();
        if name.is_empty() {
            self.layout.username_placeholder
        } else {
            name
        }
    }

    /// Twitter-style handle derived from the username.
    fn handle(&self) -> String {
        let h: String = self
            .req
            .username
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if h.is_empty() {
            "user".into()
        } else {
            h
        }
    }

    fn run(&self, surface: &mut Surface<'_>) -> f32 {
        let mut y = 0.0;
        y += self.header(surface, y);
        match self.layout.caption_placement {
            CaptionPlacement::AboveMedia => {
                y += self.caption_block(surface, y);
                y += self.media(surface, y);
            }
            CaptionPlacement::AboveMediaIndented => {
                y += self.caption_block(surface, y);
                y += self.media(surface, y);
                y += self.px(12.0);
            }
            CaptionPlacement::BelowActions => {
                y += self.media(surface, y);
            }
        }
        y += self.actions(surface, y);
        y
    }

    /// Avatar placeholder: flat disc or rounded square with the initial.
    fn avatar(&self, img: &mut RgbaImage, x: f32, cy: f32) {
        let size = self.px(self.layout.avatar_size as f32);
        let cx = x + size / 2.0;
        match self.layout.avatar_shape {
            AvatarShape::StoryRing => {
                draw::story_ring(img, cx, cy, size / 2.0 - self.px(1.0), self.px(2.0));
                draw::fill_circle(img, cx, cy, size / 2.0 - self.px(4.5), AVATAR_BG);
            }
            AvatarShape::Circle => {
                draw::fill_circle(img, cx, cy, size / 2.0, AVATAR_BG);
            }
            AvatarShape::RoundedSquare => {
                draw::fill_rounded_rect(
                    img,
                    x,
                    cy - size / 2.0,
                    size,
                    size,
                    self.px(4.0),
                    AVATAR_BG,
                );
            }
        }

        let initial: String = self
            .display_name()
            .chars()
            .next()
            .unwrap_or('U')
            .to_uppercase()
            .collect();
        let px = size * 0.45;
        let w = self.font.text_width(px, &initial);
        let lh = self.font.line_height(px);
        self.font
            .draw_bold(img, px, cx - w / 2.0, cy - lh / 2.0, WHITE, &initial);
    }

    fn header(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        match self.req.platform {
            Platform::Instagram => self.header_instagram(surface, y),
            Platform::Facebook => self.header_facebook(surface, y),
            Platform::LinkedIn => self.header_linkedin(surface, y),
            Platform::Twitter => self.header_twitter(surface, y),
        }
    }

    fn header_instagram(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let h = self.px(56.0);
        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let pad = self.px(16.0);
            let cy = y + h / 2.0;
            self.avatar(img, pad, cy);

            let name_px = self.px(14.0);
            let name_x = pad + self.px(self.layout.avatar_size as f32) + self.px(12.0);
            let ty = cy - self.font.line_height(name_px) / 2.0;
            self.font
                .draw_bold(img, name_px, name_x, ty, TEXT_PRIMARY, self.display_name());

            let dots = self.px(20.0);
            icons::ellipsis(
                img,
                self.width() - pad - dots,
                cy - dots / 2.0,
                dots,
                TEXT_MUTED,
            );
            draw::fill_rect(img, 0.0, y + h - 1.0, self.width(), 1.0, BORDER_LIGHT);
        }
        h
    }

    fn header_facebook(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let h = self.px(64.0);
        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let pad = self.px(16.0);
            self.avatar(img, pad, y + h / 2.0);

            let text_x = pad + self.px(self.layout.avatar_size as f32) + self.px(12.0);
            self.font.draw_bold(
                img,
                self.px(15.0),
                text_x,
                y + self.px(13.0),
                TEXT_PRIMARY,
                self.display_name(),
            );

            let sub = "Just now ·";
            let sub_px = self.px(12.0);
            let sub_y = y + self.px(34.0);
            self.font
                .draw(img, sub_px, text_x, sub_y, TEXT_SECONDARY, sub);
            icons::globe(
                img,
                text_x + self.font.text_width(sub_px, sub) + self.px(4.0),
                sub_y + self.px(1.0),
                self.px(12.0),
                TEXT_SECONDARY,
            );

            let dots = self.px(20.0);
            icons::ellipsis(
                img,
                self.width() - pad - dots,
                y + self.px(12.0),
                dots,
                TEXT_SECONDARY,
            );
        }
        h
    }

    fn header_linkedin(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let h = self.px(72.0);
        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let pad = self.px(16.0);
            self.avatar(img, pad, y + h / 2.0);

            let text_x = pad + self.px(self.layout.avatar_size as f32) + self.px(8.0);
            self.font.draw_bold(
                img,
                self.px(14.0),
                text_x,
                y + self.px(12.0),
                TEXT_PRIMARY,
                self.display_name(),
            );
            self.font.draw(
                img,
                self.px(12.0),
                text_x,
                y + self.px(29.0),
                TEXT_SECONDARY,
                "Founder at Physical Mosaic Wall",
            );

            let time = "1h ·";
            let time_px = self.px(11.0);
            let time_y = y + self.px(45.0);
            self.font
                .draw(img, time_px, text_x, time_y, TEXT_MUTED, time);
            icons::globe(
                img,
                text_x + self.font.text_width(time_px, time) + self.px(4.0),
                time_y,
                self.px(11.0),
                TEXT_MUTED,
            );

            let dots = self.px(20.0);
            icons::ellipsis(
                img,
                self.width() - pad - dots,
                y + self.px(12.0),
                dots,
                TEXT_MUTED,
            );
        }
        h
    }

    fn header_twitter(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let h = self.px(52.0);
        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let pad = self.px(16.0);
            self.avatar(img, pad, y + self.px(12.0) + self.px(20.0));

            let name_px = self.px(14.0);
            let name_x = pad + self.px(self.layout.avatar_size as f32) + self.px(12.0);
            let name_y = y + self.px(14.0);
            let name = self.display_name();
            self.font
                .draw_bold(img, name_px, name_x, name_y, TEXT_PRIMARY, name);

            let meta = format!("@{} · 1m", self.handle());
            let meta_x = name_x + self.font.text_width(name_px, name) + self.px(6.0);
            self.font
                .draw(img, name_px, meta_x, name_y, TEXT_SECONDARY, &meta);

            let dots = self.px(20.0);
            icons::ellipsis(
                img,
                self.width() - pad - dots,
                y + self.px(10.0),
                dots,
                TEXT_MUTED,
            );
        }
        h
    }

    /// Caption + hashtags between header and media (Facebook, LinkedIn,
    /// Twitter). Instagram renders its caption inside the action block.
    fn caption_block(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let caption = self.req.caption;
        let hashtags = self.req.hashtags;
        if caption.trim().is_empty() && hashtags.trim().is_empty() {
            return 0.0;
        }

        let indented = self.layout.body_indent > 0;
        let x = if indented {
            self.px(self.layout.body_indent as f32)
        } else {
            self.px(16.0)
        };
        let max_w = self.width() - x - self.px(16.0);
        let size = self.px(15.0);
        let lh = self.px(20.0);

        let cap_lines = if caption.trim().is_empty() {
            Vec::new()
        } else {
            self.font.wrap(size, caption, max_w, 0.0)
        };
        let tag_lines = if hashtags.trim().is_empty() {
            Vec::new()
        } else {
            self.font.wrap(size, hashtags, max_w, 0.0)
        };

        let pad_top = self.px(8.0);
        let gap = if !cap_lines.is_empty() && !tag_lines.is_empty() {
            self.px(8.0)
        } else {
            0.0
        };
        let pad_bottom = self.px(if indented { 12.0 } else { 8.0 });
        let h = pad_top
            + (cap_lines.len() + tag_lines.len()) as f32 * lh
            + gap
            + pad_bottom;

        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let mut ty = y + pad_top;
            for line in &cap_lines {
                self.font.draw(img, size, x, ty, TEXT_PRIMARY, line);
                ty += lh;
            }
            ty += gap;
            let color = if indented { TWITTER_BLUE } else { LINK_BLUE };
            for line in &tag_lines {
                if indented {
                    self.font.draw(img, size, x, ty, color, line);
                } else {
                    self.font.draw_bold(img, size, x, ty, color, line);
                }
                ty += lh;
            }
        }
        h
    }

    fn media(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let x = self.px(self.layout.body_indent as f32);
        let w = (self.layout.media_width() as f32 * self.s).round();
        let h = (self.layout.media_height(self.req.aspect_ratio.ratio()) as f32 * self.s).round();

        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let radius = self.px(self.layout.media_corner_radius as f32);
            draw::fill_rounded_rect(img, x, y, w, h, radius, MEDIA_BG);

            let mut media = draw::cover_resize(self.req.image.image(), w as u32, h as u32);
            draw::round_corners(&mut media, radius);
            draw::overlay(img, &media, x as u32, y as u32);

            if radius > 0.0 {
                draw::stroke_rounded_rect(img, x, y, w, h, radius, 1.0, BORDER);
            }
        }
        h
    }

    fn actions(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        match self.req.platform {
            Platform::Instagram => self.actions_instagram(surface, y),
            Platform::Facebook => self.actions_facebook(surface, y),
            Platform::LinkedIn => self.actions_linkedin(surface, y),
            Platform::Twitter => self.actions_twitter(surface, y),
        }
    }

    /// Instagram action block: icon row, like count, inline username +
    /// caption, hashtags, timestamp.
    fn actions_instagram(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let pad = self.px(16.0);
        let icon = self.px(22.0);
        let max_w = self.width() - pad * 2.0;

        let name = self.display_name();
        let name_px = self.px(14.0);
        let name_w = self.font.text_width(name_px, name) + self.px(6.0);
        let cap_lh = self.px(19.0);
        let cap_lines = if self.req.caption.trim().is_empty() {
            Vec::new()
        } else {
            self.font.wrap(name_px, self.req.caption, max_w, name_w)
        };
        let tag_lines = if self.req.hashtags.trim().is_empty() {
            Vec::new()
        } else {
            self.font.wrap(name_px, self.req.hashtags, max_w, 0.0)
        };
        let caption_rows = cap_lines.len().max(1) + tag_lines.len();

        let h = self.px(12.0)                     // top padding
            + icon                                // icon row
            + self.px(12.0)
            + self.px(18.0)                       // like count
            + self.px(8.0)
            + caption_rows as f32 * cap_lh        // username + caption + tags
            + self.px(8.0)
            + self.px(12.0)                       // timestamp
            + self.px(12.0);

        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            draw::fill_rect(img, 0.0, y, self.width(), 1.0, BORDER_LIGHT);

            let icon_y = y + self.px(12.0);
            let step = icon + self.px(16.0);
            icons::heart(img, pad, icon_y, icon, TEXT_PRIMARY);
            icons::comment(img, pad + step, icon_y, icon, TEXT_PRIMARY);
            icons::paper_plane(img, pad + step * 2.0, icon_y, icon, TEXT_PRIMARY);
            icons::bookmark(img, self.width() - pad - icon, icon_y, icon, TEXT_PRIMARY);

            let likes_y = icon_y + icon + self.px(12.0);
            self.font
                .draw_bold(img, self.px(14.0), pad, likes_y, TEXT_PRIMARY, "1,234 likes");

            let mut ty = likes_y + self.px(18.0) + self.px(8.0);
            self.font.draw_bold(img, name_px, pad, ty, TEXT_PRIMARY, name);
            for (i, line) in cap_lines.iter().enumerate() {
                let lx = if i == 0 { pad + name_w } else { pad };
                self.font.draw(img, name_px, lx, ty, TEXT_PRIMARY, line);
                ty += cap_lh;
            }
            if cap_lines.is_empty() {
                ty += cap_lh;
            }
            for line in &tag_lines {
                self.font.draw_bold(img, name_px, pad, ty, LINK_BLUE, line);
                ty += cap_lh;
            }

            ty += self.px(8.0);
            self.font
                .draw(img, self.px(10.0), pad, ty, TEXT_MUTED, "1 HOUR AGO");
        }
        h
    }

    /// Facebook action block: reaction badges + counts row, divider,
    /// Like/Comment/Share buttons.
    fn actions_facebook(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let counts_h = self.px(36.0);
        let buttons_h = self.px(40.0);
        let h = counts_h + 1.0 + buttons_h;

        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let pad = self.px(16.0);
            let cy = y + counts_h / 2.0;
            let badge = self.px(8.0);

            draw::fill_circle(img, pad + badge, cy, badge, BADGE_BLUE);
            icons::thumb(img, pad + badge * 0.35, cy - badge * 0.65, badge * 1.3, WHITE);
            draw::fill_circle(img, pad + badge * 2.5, cy, badge, BADGE_RED);
            icons::heart(img, pad + badge * 1.85, cy - badge * 0.65, badge * 1.3, WHITE);

            self.font.draw(
                img,
                self.px(12.0),
                pad + badge * 3.5 + self.px(8.0),
                cy - self.px(7.0),
                TEXT_SECONDARY,
                "1.2K",
            );

            let right = "45 comments · 12 shares";
            let right_px = self.px(12.0);
            self.font.draw(
                img,
                right_px,
                self.width() - pad - self.font.text_width(right_px, right),
                cy - self.px(7.0),
                TEXT_SECONDARY,
                right,
            );

            draw::fill_rect(img, pad, y + counts_h, self.width() - pad * 2.0, 1.0, BORDER_LIGHT);

            let labels: [(&str, fn(&mut RgbaImage, f32, f32, f32, Rgba<u8>)); 3] = [
                ("Like", icons::thumb),
                ("Comment", icons::comment),
                ("Share", icons::share_arrow),
            ];
            self.button_row(img, y + counts_h + 1.0, buttons_h, &labels);
        }
        h
    }

    /// LinkedIn action block: badges + counts, divider,
    /// Like/Comment/Repost/Send buttons.
    fn actions_linkedin(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let counts_h = self.px(36.0);
        let buttons_h = self.px(44.0);
        let h = counts_h + 1.0 + buttons_h;

        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let pad = self.px(16.0);
            let cy = y + counts_h / 2.0;
            let badge = self.px(8.0);

            draw::fill_circle(img, pad + badge, cy, badge, BADGE_BLUE);
            icons::thumb(img, pad + badge * 0.35, cy - badge * 0.65, badge * 1.3, WHITE);
            draw::fill_circle(img, pad + badge * 2.5, cy, badge, BADGE_GREEN);
            icons::lightbulb(img, pad + badge * 1.85, cy - badge * 0.65, badge * 1.3, WHITE);

            self.font.draw(
                img,
                self.px(12.0),
                pad + badge * 3.5 + self.px(8.0),
                cy - self.px(7.0),
                TEXT_SECONDARY,
                "234",
            );

            let right = "12 comments · 5 shares";
            let right_px = self.px(12.0);
            self.font.draw(
                img,
                right_px,
                self.width() - pad - self.font.text_width(right_px, right),
                cy - self.px(7.0),
                TEXT_SECONDARY,
                right,
            );

            draw::fill_rect(img, pad, y + counts_h, self.width() - pad * 2.0, 1.0, BORDER_LIGHT);

            let labels: [(&str, fn(&mut RgbaImage, f32, f32, f32, Rgba<u8>)); 4] = [
                ("Like", icons::thumb),
                ("Comment", icons::comment),
                ("Repost", icons::retweet),
                ("Send", icons::paper_plane),
            ];
            self.button_row(img, y + counts_h + 1.0, buttons_h, &labels);
        }
        h
    }

    /// Twitter action block: comment/retweet/like/views/bookmark counters.
    fn actions_twitter(&self, surface: &mut Surface<'_>, y: f32) -> f32 {
        let h = self.px(44.0);
        if let Surface::Draw(img) = surface {
            let img = &mut **img;
            let x = self.px(self.layout.body_indent as f32);
            let row_w = (self.width() - x - self.px(16.0)).min(self.px(384.0));
            let icon = self.px(16.0);
            let iy = y + self.px(14.0);

            let items: [(fn(&mut RgbaImage, f32, f32, f32, Rgba<u8>), Option<&str>); 5] = [
                (icons::comment, Some("42")),
                (icons::retweet, Some("12")),
                (icons::heart, Some("256")),
                (icons::bar_chart, Some("1.5K")),
                (icons::bookmark, None),
            ];
            for (i, (draw_icon, count)) in items.iter().enumerate() {
                let ix = x + row_w / items.len() as f32 * i as f32;
                draw_icon(img, ix, iy, icon, TEXT_SECONDARY);
                if let Some(count) = count {
                    self.font.draw(
                        img,
                        self.px(12.0),
                        ix + icon + self.px(6.0),
                        iy + self.px(1.0),
                        TEXT_SECONDARY,
                        count,
                    );
                }
            }
        }
        h
    }

    /// Evenly spaced icon+label buttons (Facebook/LinkedIn bottom row).
    fn button_row(
        &self,
        img: &mut RgbaImage,
        y: f32,
        h: f32,
        labels: &[(&str, fn(&mut RgbaImage, f32, f32, f32, Rgba<u8>))],
    ) {
        let cell = self.width() / labels.len() as f32;
        let label_px = self.px(13.0);
        let icon = self.px(15.0);
        for (i, (label, draw_icon)) in labels.iter().enumerate() {
            let text_w = self.font.text_width(label_px, label);
            let total = icon + self.px(6.0) + text_w;
            let start = cell * i as f32 + (cell - total) / 2.0;
            let cy = y + h / 2.0;
            draw_icon(img, start, cy - icon / 2.0, icon, TEXT_SECONDARY);
            self.font.draw_bold(
                img,
                label_px,
                start + icon + self.px(6.0),
                cy - self.font.line_height(label_px) / 2.0,
                TEXT_SECONDARY,
                label,
            );
        }
    }
}
