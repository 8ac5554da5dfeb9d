use std::path::PathBuf;

use postmock_core::crop::CropRect;

/// Crop rectangle in image pixel coordinates.
#[derive(Clone, Debug)]
pub struct CropRectPixels {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRectPixels {
    /// Convert to the core crop rect, rounding to whole pixels.
    pub fn to_crop_rect(&self) -> CropRect {
        CropRect {
            x: self.x.round() as u32,
            y: self.y.round() as u32,
            width: self.width.round() as u32,
            height: self.height.round() as u32,
        }
    }

    /// Largest rect of the given width/height ratio centered in the image.
    pub fn centered_max(img_w: f32, img_h: f32, ratio: f32) -> Self {
        let mut w = img_w;
        let mut h = w / ratio;
        if h > img_h {
            h = img_h;
            w = h * ratio;
        }
        Self {
            x: (img_w - w) / 2.0,
            y: (img_h - h) / 2.0,
            width: w,
            height: h,
        }
    }

    /// Re-snap to a new ratio around the current center, clamped to bounds.
    pub fn snap_to_ratio(&mut self, ratio: f32, img_w: f32, img_h: f32) {
        let cx = self.x + self.width / 2.0;
        let cy = self.y + self.height / 2.0;

        // Try keeping width, adjust height
        let mut w = self.width;
        let mut h = w / ratio;

        if h > img_h {
            h = img_h;
            w = h * ratio;
        }
        if w > img_w {
            w = img_w;
            h = w / ratio;
        }

        self.x = (cx - w / 2.0).max(0.0).min(img_w - w);
        self.y = (cy - h / 2.0).max(0.0).min(img_h - h);
        self.width = w;
        self.height = h;
    }
}

/// State for the crop interaction on the photo view.
#[derive(Default)]
pub struct CropState {
    /// Current selection in image coords.
    pub rect: Option<CropRectPixels>,
    /// Screen coords of drag start (for creating a new selection).
    pub drag_start: Option<egui::Pos2>,
    /// True when the user is dragging to move an existing crop rect.
    pub moving: bool,
    /// Offset from pointer (image coords) to crop rect top-left when move started.
    pub move_offset: Option<egui::Vec2>,
}

/// Which worker stage is currently running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Generating,
    Restyling,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Generating => f.write_str("Generating mockup"),
            Stage::Restyling => f.write_str("Restyling photo"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub photo_path: Option<PathBuf>,

    /// Which stage is currently running (None = idle).
    pub running_stage: Option<Stage>,

    /// Error from the last user action, shown next to the generate button.
    pub error: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Crop state.
    pub crop_state: CropState,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.running_stage.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewport display state. The photo texture backs the crop view; the
/// mockup texture, when present, replaces it with the generated preview —
/// the two views are mutually exclusive.
pub struct ViewportState {
    pub photo_texture: Option<egui::TextureHandle>,
    /// Original photo size (before any display scaling).
    pub photo_size: Option<[usize; 2]>,
    pub mockup_texture: Option<egui::TextureHandle>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    /// Re-fit the photo to the viewport on the next frame.
    pub fit_requested: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            photo_texture: None,
            photo_size: None,
            mockup_texture: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            fit_requested: false,
        }
    }
}

impl ViewportState {
    pub fn showing_mockup(&self) -> bool {
        self.mockup_texture.is_some()
    }

    pub fn clear_mockup(&mut self) {
        self.mockup_texture = None;
    }
}
