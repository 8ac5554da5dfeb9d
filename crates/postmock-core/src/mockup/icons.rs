//! Simple geometric stand-ins for platform action glyphs. Each icon draws
//! into a `size` x `size` box anchored at (x, y).

use image::{Rgba, RgbaImage};

use crate::mockup::draw;

fn weight(size: f32) -> f32 {
    (size / 14.0).max(1.2)
}

pub fn heart(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    let r = size * 0.23;
    let lobe_y = y + size * 0.32;
    draw::stroke_circle(img, x + size * 0.3, lobe_y, r, t, color);
    draw::stroke_circle(img, x + size * 0.7, lobe_y, r, t, color);
    draw::stroke_line(
        img,
        x + size * 0.09,
        y + size * 0.42,
        x + size * 0.5,
        y + size * 0.88,
        t,
        color,
    );
    draw::stroke_line(
        img,
        x + size * 0.91,
        y + size * 0.42,
        x + size * 0.5,
        y + size * 0.88,
        t,
        color,
    );
}

pub fn comment(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    draw::stroke_rounded_rect(
        img,
        x + size * 0.08,
        y + size * 0.12,
        size * 0.84,
        size * 0.62,
        size * 0.28,
        t,
        color,
    );
    draw::stroke_line(
        img,
        x + size * 0.3,
        y + size * 0.74,
        x + size * 0.22,
        y + size * 0.92,
        t,
        color,
    );
}

pub fn paper_plane(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    let (ax, ay) = (x + size * 0.9, y + size * 0.1);
    let (bx, by) = (x + size * 0.1, y + size * 0.45);
    let (cx, cy) = (x + size * 0.45, y + size * 0.9);
    draw::stroke_line(img, ax, ay, bx, by, t, color);
    draw::stroke_line(img, bx, by, cx, cy, t, color);
    draw::stroke_line(img, cx, cy, ax, ay, t, color);
}

pub fn bookmark(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    let (lx, rx) = (x + size * 0.22, x + size * 0.78);
    let top = y + size * 0.1;
    let bottom = y + size * 0.9;
    draw::stroke_line(img, lx, top, rx, top, t, color);
    draw::stroke_line(img, lx, top, lx, bottom, t, color);
    draw::stroke_line(img, rx, top, rx, bottom, t, color);
    draw::stroke_line(img, lx, bottom, x + size * 0.5, y + size * 0.68, t, color);
    draw::stroke_line(img, rx, bottom, x + size * 0.5, y + size * 0.68, t, color);
}

pub fn thumb(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    draw::stroke_rounded_rect(
        img,
        x + size * 0.1,
        y + size * 0.42,
        size * 0.24,
        size * 0.48,
        size * 0.06,
        t,
        color,
    );
    draw::stroke_line(
        img,
        x + size * 0.42,
        y + size * 0.46,
        x + size * 0.52,
        y + size * 0.12,
        t,
        color,
    );
    draw::stroke_rounded_rect(
        img,
        x + size * 0.38,
        y + size * 0.44,
        size * 0.52,
        size * 0.46,
        size * 0.1,
        t,
        color,
    );
}

pub fn retweet(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    let top = y + size * 0.3;
    let bottom = y + size * 0.7;
    draw::stroke_line(img, x + size * 0.2, top, x + size * 0.75, top, t, color);
    draw::stroke_line(img, x + size * 0.75, top, x + size * 0.62, y + size * 0.16, t, color);
    draw::stroke_line(img, x + size * 0.8, bottom, x + size * 0.25, bottom, t, color);
    draw::stroke_line(img, x + size * 0.25, bottom, x + size * 0.38, y + size * 0.84, t, color);
}

pub fn bar_chart(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    let bottom = y + size * 0.85;
    draw::stroke_line(img, x + size * 0.25, bottom, x + size * 0.25, y + size * 0.55, t, color);
    draw::stroke_line(img, x + size * 0.5, bottom, x + size * 0.5, y + size * 0.2, t, color);
    draw::stroke_line(img, x + size * 0.75, bottom, x + size * 0.75, y + size * 0.4, t, color);
}

pub fn share_arrow(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    let (tip_x, tip_y) = (x + size * 0.85, y + size * 0.35);
    draw::stroke_line(img, x + size * 0.5, y + size * 0.12, tip_x, tip_y, t, color);
    draw::stroke_line(img, tip_x, tip_y, x + size * 0.5, y + size * 0.58, t, color);
    draw::stroke_line(
        img,
        x + size * 0.5,
        y + size * 0.35,
        x + size * 0.15,
        y + size * 0.88,
        t,
        color,
    );
}

pub fn lightbulb(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size);
    draw::stroke_circle(img, x + size * 0.5, y + size * 0.4, size * 0.26, t, color);
    draw::stroke_line(
        img,
        x + size * 0.4,
        y + size * 0.78,
        x + size * 0.6,
        y + size * 0.78,
        t,
        color,
    );
}

pub fn globe(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let t = weight(size) * 0.8;
    let (cx, cy) = (x + size * 0.5, y + size * 0.5);
    let r = size * 0.38;
    draw::stroke_circle(img, cx, cy, r, t, color);
    draw::stroke_line(img, cx - r, cy, cx + r, cy, t, color);
}

pub fn ellipsis(img: &mut RgbaImage, x: f32, y: f32, size: f32, color: Rgba<u8>) {
    let r = (size * 0.07).max(1.0);
    let cy = y + size * 0.5;
    for i in 0..3 {
        let cx = x + size * (0.25 + 0.25 * i as f32);
        draw::fill_circle(img, cx, cy, r, color);
    }
}
