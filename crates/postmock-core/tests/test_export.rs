use image::{Rgba, RgbaImage};

use postmock_core::crop::{resolve_crop, CropRect, FinalImage};
use postmock_core::error::PostmockError;
use postmock_core::export::export_mockup;
use postmock_core::mockup::{layout_for, MockupFont, MockupRenderer, MockupRequest};
use postmock_core::post::{AspectRatio, Platform};

fn renderer() -> Option<MockupRenderer> {
    MockupFont::discover().ok().map(MockupRenderer::new)
}

fn final_image() -> FinalImage {
    let source = RgbaImage::from_pixel(320, 320, Rgba([90, 140, 200, 255]));
    let crop = CropRect {
        x: 0,
        y: 0,
        width: 320,
        height: 320,
    };
    resolve_crop(&source, &crop).unwrap()
}

fn request(image: &FinalImage) -> MockupRequest<'_> {
    MockupRequest {
        platform: Platform::Instagram,
        username: "alice",
        image,
        aspect_ratio: AspectRatio::Square,
        caption: "Exported caption",
        hashtags: "#export",
    }
}

#[test]
fn test_export_writes_png_at_2x() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mockup.png");

    export_mockup(&renderer, &request(&image), &path).unwrap();

    let saved = image::open(&path).unwrap();
    assert_eq!(
        saved.width(),
        layout_for(Platform::Instagram).container_width * 2
    );

    let preview = renderer.render(&request(&image), 1.0).unwrap();
    assert_eq!(saved.width(), preview.width() * 2);
}

#[test]
fn test_export_is_fully_opaque() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mockup.png");

    export_mockup(&renderer, &request(&image), &path).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    assert!(saved.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn test_export_to_unwritable_path_is_export_error() {
    let Some(renderer) = renderer() else {
        return;
    };
    let image = final_image();
    let path = std::path::Path::new("/nonexistent-dir/mockup.png");

    let err = export_mockup(&renderer, &request(&image), path).unwrap_err();
    assert!(matches!(err, PostmockError::Export(_)));
}
