use std::io::Cursor;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use postmock_core::crop::CropRect;
use postmock_core::error::PostmockError;
use postmock_core::export::export_file_name;
use postmock_core::post::{AspectRatio, Platform, PostInputs, SourcePhoto};

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

#[test]
fn test_aspect_ratio_mapping() {
    assert_eq!(AspectRatio::Square.ratio(), 1.0);
    assert_eq!(AspectRatio::Landscape.ratio(), 1.91);
    assert_eq!(AspectRatio::Portrait.ratio(), 0.8);
}

#[test]
fn test_platform_labels() {
    assert_eq!(Platform::Instagram.label(), "Instagram");
    assert_eq!(Platform::Facebook.label(), "Facebook");
    assert_eq!(Platform::LinkedIn.label(), "LinkedIn");
    assert_eq!(Platform::Twitter.label(), "Twitter(X)");
    assert_eq!(Platform::ALL.len(), 4);
}

#[test]
fn test_source_photo_from_bytes() {
    let photo = SourcePhoto::from_bytes(png_bytes(12, 7)).unwrap();
    assert_eq!(photo.width(), 12);
    assert_eq!(photo.height(), 7);
    assert_eq!(photo.mime, "image/png");
}

#[test]
fn test_source_photo_rejects_garbage() {
    let err = SourcePhoto::from_bytes(vec![0u8; 64]).unwrap_err();
    assert!(matches!(err, PostmockError::ImageProcessing(_)));
}

#[test]
fn test_platform_switch_preserves_other_fields() {
    let photo = Arc::new(SourcePhoto::from_bytes(png_bytes(8, 8)).unwrap());
    let inputs = PostInputs::default()
        .with_username("alice")
        .with_photo(Some(photo.clone()))
        .with_aspect_ratio(AspectRatio::Portrait);

    let switched = inputs.clone().with_platform(Platform::Facebook);

    assert_eq!(switched.platform, Platform::Facebook);
    assert_eq!(switched.username, "alice");
    assert_eq!(switched.aspect_ratio, AspectRatio::Portrait);
    assert!(Arc::ptr_eq(switched.photo.as_ref().unwrap(), &photo));
}

#[test]
fn test_transitions_touch_one_field_each() {
    let base = PostInputs::default();
    assert_eq!(base.platform, Platform::Instagram);
    assert_eq!(base.aspect_ratio, AspectRatio::Square);

    let named = base.clone().with_username("bob");
    assert_eq!(named.platform, base.platform);
    assert_eq!(named.aspect_ratio, base.aspect_ratio);
    assert!(named.photo.is_none());

    let ratioed = named.clone().with_aspect_ratio(AspectRatio::Landscape);
    assert_eq!(ratioed.username, "bob");
    assert_eq!(ratioed.platform, Platform::Instagram);
}

#[test]
fn test_generate_requires_photo() {
    let inputs = PostInputs::default();
    let crop = CropRect {
        x: 0,
        y: 0,
        width: 10,
        height: 10,
    };
    let err = inputs.ready_to_generate(Some(&crop)).unwrap_err();
    assert!(matches!(err, PostmockError::Validation(_)));
}

#[test]
fn test_generate_requires_crop() {
    let photo = Arc::new(SourcePhoto::from_bytes(png_bytes(8, 8)).unwrap());
    let inputs = PostInputs::default().with_photo(Some(photo));
    let err = inputs.ready_to_generate(None).unwrap_err();
    assert!(matches!(err, PostmockError::Validation(_)));
}

#[test]
fn test_generate_ready_with_photo_and_crop() {
    let photo = Arc::new(SourcePhoto::from_bytes(png_bytes(8, 8)).unwrap());
    let inputs = PostInputs::default().with_photo(Some(photo));
    let crop = CropRect {
        x: 0,
        y: 0,
        width: 8,
        height: 8,
    };
    assert!(inputs.ready_to_generate(Some(&crop)).is_ok());
}

#[test]
fn test_export_file_name_pattern() {
    let at = SystemTime::UNIX_EPOCH + Duration::from_millis(1234);
    assert_eq!(
        export_file_name(Platform::Instagram, at),
        "Mockup-Instagram-1234.png"
    );
    assert_eq!(
        export_file_name(Platform::Twitter, at),
        "Mockup-Twitter(X)-1234.png"
    );
}
