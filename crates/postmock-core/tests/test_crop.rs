use image::{Rgba, RgbaImage};

use postmock_core::crop::{resolve_crop, CropRect};
use postmock_core::error::PostmockError;

fn solid(w: u32, h: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(color))
}

/// Left half red, right half blue.
fn two_tone(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, _| {
        if x < w / 2 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    })
}

#[test]
fn test_square_crop_resamples_to_1024() {
    // 2000x1000 source, 1000x1000 crop at (500,0)
    let source = solid(2000, 1000, [120, 90, 30, 255]);
    let crop = CropRect {
        x: 500,
        y: 0,
        width: 1000,
        height: 1000,
    };

    let out = resolve_crop(&source, &crop).unwrap();
    assert_eq!(out.width(), 1024);
    assert_eq!(out.height(), 1024);
}

#[test]
fn test_output_height_follows_crop_ratio() {
    let source = solid(2000, 1200, [10, 10, 10, 255]);

    // (crop_w, crop_h, expected round(1024 * h / w))
    let cases = [
        (1000u32, 600u32, 614u32),
        (800, 533, 682),
        (1910, 1000, 536),
        (400, 500, 1280),
        (1024, 1024, 1024),
    ];

    for (w, h, expected) in cases {
        let crop = CropRect {
            x: 0,
            y: 0,
            width: w,
            height: h,
        };
        let out = resolve_crop(&source, &crop).unwrap();
        assert_eq!(out.width(), 1024, "crop {w}x{h}");
        assert_eq!(out.height(), expected, "crop {w}x{h}");
    }
}

#[test]
fn test_crop_selects_the_requested_region() {
    // Crop the blue right half; the resampled output should be blue through.
    let source = two_tone(400, 200);
    let crop = CropRect {
        x: 200,
        y: 0,
        width: 200,
        height: 200,
    };

    let out = resolve_crop(&source, &crop).unwrap();
    assert_eq!((out.width(), out.height()), (1024, 1024));

    for (x, y) in [(0u32, 0u32), (512, 512), (1023, 1023)] {
        let p = out.image().get_pixel(x, y);
        assert!(p.0[2] > 200, "expected blue at ({x},{y}), got {:?}", p);
        assert!(p.0[0] < 50, "expected no red at ({x},{y}), got {:?}", p);
    }
}

#[test]
fn test_out_of_bounds_crop_rejected() {
    let source = solid(100, 100, [0, 0, 0, 255]);

    // Entirely out of bounds
    let crop = CropRect {
        x: 120,
        y: 0,
        width: 10,
        height: 10,
    };
    assert!(matches!(
        resolve_crop(&source, &crop),
        Err(PostmockError::InvalidCrop(_))
    ));

    // Partially out of bounds
    let crop = CropRect {
        x: 95,
        y: 95,
        width: 10,
        height: 10,
    };
    assert!(matches!(
        resolve_crop(&source, &crop),
        Err(PostmockError::InvalidCrop(_))
    ));
}

#[test]
fn test_empty_crop_rejected() {
    let source = solid(100, 100, [0, 0, 0, 255]);
    let crop = CropRect {
        x: 10,
        y: 10,
        width: 0,
        height: 20,
    };
    assert!(matches!(
        crop.validated(source.width(), source.height()),
        Err(PostmockError::InvalidCrop(_))
    ));
}

#[test]
fn test_jpeg_encoding_keeps_dimensions() {
    let source = solid(300, 300, [200, 150, 100, 255]);
    let crop = CropRect {
        x: 0,
        y: 0,
        width: 300,
        height: 150,
    };

    let out = resolve_crop(&source, &crop).unwrap();
    let jpeg = out.encode_jpeg().unwrap();

    assert_eq!(
        image::guess_format(&jpeg).unwrap(),
        image::ImageFormat::Jpeg
    );
    let decoded = image::load_from_memory(&jpeg).unwrap();
    assert_eq!(decoded.width(), 1024);
    assert_eq!(decoded.height(), 512);
}
