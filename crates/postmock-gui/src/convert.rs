use postmock_core::RgbaImage;

/// Convert an RGBA bitmap from the core pipeline to an egui ColorImage.
pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let w = img.width() as usize;
    let h = img.height() as usize;
    let mut pixels = Vec::with_capacity(w * h);

    for p in img.pixels() {
        pixels.push(egui::Color32::from_rgba_unmultiplied(
            p.0[0], p.0[1], p.0[2], p.0[3],
        ));
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
