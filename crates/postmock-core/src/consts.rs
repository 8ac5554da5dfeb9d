/// Width in pixels of every resolved crop output. The mockup media block
/// scales this bitmap down to the platform container width.
pub const FINAL_IMAGE_WIDTH: u32 = 1024;

/// JPEG quality factor used when encoding a resolved crop.
pub const FINAL_IMAGE_JPEG_QUALITY: u8 = 95;

/// Scale factor applied when rasterizing a mockup for download.
pub const EXPORT_SCALE: f32 = 2.0;

/// Preview rasterization scale (1:1 with the layout's CSS-pixel metrics).
pub const PREVIEW_SCALE: f32 = 1.0;
