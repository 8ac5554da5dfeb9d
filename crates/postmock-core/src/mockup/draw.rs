use image::{imageops, Rgba, RgbaImage};
use rayon::prelude::*;

/// Blend `color` over `dst` with coverage `alpha` in [0, 1].
pub fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, alpha: f32) {
    let a = alpha.clamp(0.0, 1.0) * color.0[3] as f32 / 255.0;
    if a <= 0.0 {
        return;
    }
    let inv = 1.0 - a;
    for c in 0..3 {
        dst.0[c] = (color.0[c] as f32 * a + dst.0[c] as f32 * inv).round() as u8;
    }
    dst.0[3] = 255;
}

/// Signed distance to a rounded rectangle centered at (cx, cy) with half
/// extents (hw, hh) and corner radius r. Negative inside.
fn rrect_sdf(px: f32, py: f32, cx: f32, cy: f32, hw: f32, hh: f32, r: f32) -> f32 {
    let qx = (px - cx).abs() - (hw - r);
    let qy = (py - cy).abs() - (hh - r);
    let ax = qx.max(0.0);
    let ay = qy.max(0.0);
    (ax * ax + ay * ay).sqrt() + qx.max(qy).min(0.0) - r
}

fn bbox(img: &RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32) -> (u32, u32, u32, u32) {
    let min_x = x0.floor().max(0.0) as u32;
    let min_y = y0.floor().max(0.0) as u32;
    let max_x = (x1.ceil() as i64).clamp(0, img.width() as i64) as u32;
    let max_y = (y1.ceil() as i64).clamp(0, img.height() as i64) as u32;
    (min_x, min_y, max_x, max_y)
}

/// Fill an axis-aligned rectangle (sharp corners).
pub fn fill_rect(img: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
    let (min_x, min_y, max_x, max_y) = bbox(img, x, y, x + w, y + h);
    for py in min_y..max_y {
        for px in min_x..max_x {
            blend(img.get_pixel_mut(px, py), color, 1.0);
        }
    }
}

/// Fill a rounded rectangle with a one-pixel soft edge.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    r: f32,
    color: Rgba<u8>,
) {
    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
    let (hw, hh) = (w / 2.0, h / 2.0);
    let r = r.min(hw).min(hh);
    let (min_x, min_y, max_x, max_y) = bbox(img, x - 1.0, y - 1.0, x + w + 1.0, y + h + 1.0);
    for py in min_y..max_y {
        for px in min_x..max_x {
            let d = rrect_sdf(px as f32 + 0.5, py as f32 + 0.5, cx, cy, hw, hh, r);
            blend(img.get_pixel_mut(px, py), color, 0.5 - d);
        }
    }
}

/// Stroke the outline of a rounded rectangle.
pub fn stroke_rounded_rect(
    img: &mut RgbaImage,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    r: f32,
    thickness: f32,
    color: Rgba<u8>,
) {
    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
    let (hw, hh) = (w / 2.0, h / 2.0);
    let r = r.min(hw).min(hh);
    let pad = thickness + 1.0;
    let (min_x, min_y, max_x, max_y) =
        bbox(img, x - pad, y - pad, x + w + pad, y + h + pad);
    for py in min_y..max_y {
        for px in min_x..max_x {
            let d = rrect_sdf(px as f32 + 0.5, py as f32 + 0.5, cx, cy, hw, hh, r);
            blend(img.get_pixel_mut(px, py), color, thickness / 2.0 + 0.5 - d.abs());
        }
    }
}

/// Fill a circle with a one-pixel soft edge.
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    fill_rounded_rect(img, cx - r, cy - r, r * 2.0, r * 2.0, r, color);
}

/// Stroke a circle outline.
pub fn stroke_circle(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    r: f32,
    thickness: f32,
    color: Rgba<u8>,
) {
    stroke_rounded_rect(img, cx - r, cy - r, r * 2.0, r * 2.0, r, thickness, color);
}

/// Stroke a line segment with round caps.
pub fn stroke_line(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    thickness: f32,
    color: Rgba<u8>,
) {
    let pad = thickness + 1.0;
    let (min_x, min_y, max_x, max_y) = bbox(
        img,
        x0.min(x1) - pad,
        y0.min(y1) - pad,
        x0.max(x1) + pad,
        y0.max(y1) + pad,
    );
    let (dx, dy) = (x1 - x0, y1 - y0);
    let len_sq = (dx * dx + dy * dy).max(1e-6);
    for py in min_y..max_y {
        for px in min_x..max_x {
            let (fx, fy) = (px as f32 + 0.5, py as f32 + 0.5);
            let t = ((fx - x0) * dx + (fy - y0) * dy) / len_sq;
            let t = t.clamp(0.0, 1.0);
            let (nx, ny) = (x0 + t * dx, y0 + t * dy);
            let dist = ((fx - nx).powi(2) + (fy - ny).powi(2)).sqrt();
            blend(
                img.get_pixel_mut(px, py),
                color,
                thickness / 2.0 + 0.5 - dist,
            );
        }
    }
}

/// The Instagram story ring: a circle stroke with a vertical warm-to-purple
/// gradient.
pub fn story_ring(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, thickness: f32) {
    let top = [250.0, 175.0, 64.0];
    let bottom = [150.0, 47.0, 191.0];
    let pad = thickness + 1.0;
    let (min_x, min_y, max_x, max_y) = bbox(img, cx - r - pad, cy - r - pad, cx + r + pad, cy + r + pad);
    for py in min_y..max_y {
        for px in min_x..max_x {
            let (fx, fy) = (px as f32 + 0.5, py as f32 + 0.5);
            let dist = ((fx - cx).powi(2) + (fy - cy).powi(2)).sqrt();
            let cov = thickness / 2.0 + 0.5 - (dist - r).abs();
            if cov <= 0.0 {
                continue;
            }
            let t = ((fy - (cy - r)) / (r * 2.0)).clamp(0.0, 1.0);
            let color = Rgba([
                (top[0] + (bottom[0] - top[0]) * t) as u8,
                (top[1] + (bottom[1] - top[1]) * t) as u8,
                (top[2] + (bottom[2] - top[2]) * t) as u8,
                255,
            ]);
            blend(img.get_pixel_mut(px, py), color, cov);
        }
    }
}

/// Scale to fill then center-crop, like CSS `object-fit: cover`.
pub fn cover_resize(src: &RgbaImage, w: u32, h: u32) -> RgbaImage {
    let (sw, sh) = (src.width(), src.height());
    if sw == w && sh == h {
        return src.clone();
    }
    let scale = (w as f32 / sw as f32).max(h as f32 / sh as f32);
    let scaled_w = ((sw as f32 * scale).ceil() as u32).max(w);
    let scaled_h = ((sh as f32 * scale).ceil() as u32).max(h);
    let scaled = imageops::resize(src, scaled_w, scaled_h, imageops::FilterType::Triangle);
    let x = (scaled_w - w) / 2;
    let y = (scaled_h - h) / 2;
    imageops::crop_imm(&scaled, x, y, w, h).to_image()
}

/// Zero the alpha of everything outside a rounded-rect mask.
pub fn round_corners(img: &mut RgbaImage, radius: f32) {
    if radius <= 0.0 {
        return;
    }
    let (w, h) = (img.width() as f32, img.height() as f32);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let r = radius.min(w / 2.0).min(h / 2.0);
    for py in 0..img.height() {
        for px in 0..img.width() {
            let d = rrect_sdf(px as f32 + 0.5, py as f32 + 0.5, cx, cy, w / 2.0, h / 2.0, r);
            if d > -0.5 {
                let cov = (0.5 - d).clamp(0.0, 1.0);
                let p = img.get_pixel_mut(px, py);
                p.0[3] = (p.0[3] as f32 * cov) as u8;
            }
        }
    }
}

/// Alpha-blend `src` over `img` at (x, y). Rows are processed in parallel.
pub fn overlay(img: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    let img_w = img.width();
    let img_h = img.height();
    let copy_w = src.width().min(img_w.saturating_sub(x));
    let copy_h = src.height().min(img_h.saturating_sub(y));
    if copy_w == 0 || copy_h == 0 {
        return;
    }

    let row_bytes = img_w as usize * 4;
    let start = y as usize * row_bytes;
    let end = (y + copy_h) as usize * row_bytes;
    let buf: &mut [u8] = img;

    buf[start..end]
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(row, dst_row)| {
            for col in 0..copy_w {
                let sp = src.get_pixel(col, row as u32);
                let a = sp.0[3] as f32 / 255.0;
                if a <= 0.0 {
                    continue;
                }
                let off = (x + col) as usize * 4;
                let inv = 1.0 - a;
                for c in 0..3 {
                    dst_row[off + c] =
                        (sp.0[c] as f32 * a + dst_row[off + c] as f32 * inv).round() as u8;
                }
                dst_row[off + 3] = 255;
            }
        });
}

/// Composite onto an opaque white background. Rows are processed in parallel.
pub fn flatten_onto_white(src: &RgbaImage) -> RgbaImage {
    let (w, h) = (src.width(), src.height());
    let mut out = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]));
    overlay(&mut out, src, 0, 0);
    out
}
