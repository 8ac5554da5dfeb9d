use image::{Rgba, RgbaImage};

use postmock_core::crop::{resolve_crop, CropRect, FinalImage};
use postmock_core::mockup::{layout_for, CaptionPlacement, MockupFont, MockupRenderer, MockupRequest};
use postmock_core::post::{AspectRatio, Platform};

/// Glyph rendering needs a real typeface. Environments without one skip the
/// composition tests, like the GPU-gated tests in similar pipelines.
fn renderer() -> Option<MockupRenderer> {
    MockupFont::discover().ok().map(MockupRenderer::new)
}

fn final_image(w: u32, h: u32) -> FinalImage {
    let source = RgbaImage::from_pixel(w, h, Rgba([180, 120, 60, 255]));
    let crop = CropRect {
        x: 0,
        y: 0,
        width: w,
        height: h,
    };
    resolve_crop(&source, &crop).unwrap()
}

fn request<'a>(platform: Platform, image: &'a FinalImage) -> MockupRequest<'a> {
    MockupRequest {
        platform,
        username: "alice",
        image,
        aspect_ratio: AspectRatio::Square,
        caption: "A short caption",
        hashtags: "#one #two",
    }
}

#[test]
fn test_container_widths() {
    assert_eq!(layout_for(Platform::Instagram).container_width, 550);
    assert_eq!(layout_for(Platform::Facebook).container_width, 580);
    assert_eq!(layout_for(Platform::LinkedIn).container_width, 560);
    assert_eq!(layout_for(Platform::Twitter).container_width, 580);
}

#[test]
fn test_caption_placements() {
    assert_eq!(
        layout_for(Platform::Instagram).caption_placement,
        CaptionPlacement::BelowActions
    );
    assert_eq!(
        layout_for(Platform::Facebook).caption_placement,
        CaptionPlacement::AboveMedia
    );
    assert_eq!(
        layout_for(Platform::LinkedIn).caption_placement,
        CaptionPlacement::AboveMedia
    );
    assert_eq!(
        layout_for(Platform::Twitter).caption_placement,
        CaptionPlacement::AboveMediaIndented
    );
}

#[test]
fn test_media_block_geometry() {
    let ig = layout_for(Platform::Instagram);
    assert_eq!(ig.media_width(), 550);
    assert_eq!(ig.media_height(1.0), 550);
    assert_eq!(ig.media_height(0.8), 688);
    assert_eq!(ig.media_height(1.91), 288);

    // Twitter indents the body column past the avatar.
    let tw = layout_for(Platform::Twitter);
    assert_eq!(tw.media_width(), 580 - 56 - 16);
}

#[test]
fn test_mockup_width_follows_container_and_scale() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image(256, 256);

    for platform in Platform::ALL {
        let req = request(platform, &image);
        let preview = renderer.render(&req, 1.0).unwrap();
        assert_eq!(
            preview.width(),
            layout_for(platform).container_width,
            "{platform} preview"
        );

        let upscaled = renderer.render(&req, 2.0).unwrap();
        assert_eq!(
            upscaled.width(),
            layout_for(platform).container_width * 2,
            "{platform} 2x"
        );
        assert!(upscaled.height() > preview.height());
    }
}

#[test]
fn test_mockup_taller_than_media_block() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image(256, 256);

    for platform in Platform::ALL {
        let req = request(platform, &image);
        let rendered = renderer.render(&req, 1.0).unwrap();
        let media_h = layout_for(platform).media_height(AspectRatio::Square.ratio());
        assert!(
            rendered.height() > media_h,
            "{platform}: {} <= {media_h}",
            rendered.height()
        );
    }
}

#[test]
fn test_longer_caption_grows_the_card() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image(128, 128);

    let short = MockupRequest {
        caption: "Hi",
        ..request(Platform::Facebook, &image)
    };
    let long = MockupRequest {
        caption: "A considerably longer caption that will have to wrap onto \
                  several lines once it exceeds the text column width of the \
                  post card, growing the composed bitmap vertically",
        ..request(Platform::Facebook, &image)
    };

    let short_h = renderer.render(&short, 1.0).unwrap().height();
    let long_h = renderer.render(&long, 1.0).unwrap().height();
    assert!(long_h > short_h);
}

#[test]
fn test_aspect_ratio_changes_media_height() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image(200, 200);

    let square = renderer
        .render(&request(Platform::Instagram, &image), 1.0)
        .unwrap();
    let landscape = renderer
        .render(
            &MockupRequest {
                aspect_ratio: AspectRatio::Landscape,
                ..request(Platform::Instagram, &image)
            },
            1.0,
        )
        .unwrap();
    let portrait = renderer
        .render(
            &MockupRequest {
                aspect_ratio: AspectRatio::Portrait,
                ..request(Platform::Instagram, &image)
            },
            1.0,
        )
        .unwrap();

    assert!(landscape.height() < square.height());
    assert!(portrait.height() > square.height());
}

#[test]
fn test_invalid_scale_rejected() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image(64, 64);
    let req = request(Platform::Instagram, &image);

    assert!(renderer.render(&req, 0.0).is_err());
    assert!(renderer.render(&req, -1.0).is_err());
    assert!(renderer.render(&req, f32::NAN).is_err());
}

#[test]
fn test_empty_username_uses_placeholder() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image(64, 64);
    let req = MockupRequest {
        username: "",
        ..request(Platform::LinkedIn, &image)
    };

    // Placeholder text must render without error; exact pixels are not
    // asserted, only that composition succeeds at the expected width.
    let rendered = renderer.render(&req, 1.0).unwrap();
    assert_eq!(rendered.width(), 560);
}

#[test]
fn test_word_wrap_honors_newlines_and_width() {
    let Some(renderer) = renderer() else {
        return;
    };
    let font = renderer.font();

    let lines = font.wrap(14.0, "alpha\nbeta", 10_000.0, 0.0);
    assert_eq!(lines, vec!["alpha".to_string(), "beta".to_string()]);

    let narrow = font.wrap(14.0, "one two three four five", 40.0, 0.0);
    assert!(narrow.len() > 1);
    for line in &narrow {
        // A single overlong word may exceed the column; multi-word lines
        // must not.
        if line.contains(' ') {
            assert!(font.text_width(14.0, line) <= 40.0, "line {line:?} too wide");
        }
    }
}
