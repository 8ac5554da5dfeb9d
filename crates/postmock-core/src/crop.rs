use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, RgbaImage};

use crate::consts::{FINAL_IMAGE_JPEG_QUALITY, FINAL_IMAGE_WIDTH};
use crate::error::{PostmockError, Result};

/// A rectangle in source-image pixel coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Validate the rect against the source dimensions.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<CropRect> {
        if self.width == 0 || self.height == 0 {
            return Err(PostmockError::InvalidCrop(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.x + self.width > src_w || self.y + self.height > src_h {
            return Err(PostmockError::InvalidCrop(format!(
                "Crop region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(self.clone())
    }

    /// Width/height ratio of the selected region.
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// The fixed-width bitmap a crop resolves to. Immutable once produced;
/// a re-crop replaces it wholesale.
#[derive(Clone)]
pub struct FinalImage {
    image: RgbaImage,
}

impl FinalImage {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Encode as JPEG at the fixed quality factor.
    pub fn encode_jpeg(&self) -> Result<Vec<u8>> {
        let rgb = DynamicImage::ImageRgba8(self.image.clone()).to_rgb8();
        let mut buf = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buf, FINAL_IMAGE_JPEG_QUALITY);
        rgb.write_with_encoder(encoder)?;
        Ok(buf)
    }
}

impl std::fmt::Debug for FinalImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinalImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Resolve a user-selected crop into the fixed-width output bitmap.
///
/// Output width is always [`FINAL_IMAGE_WIDTH`]; height is
/// `round(width * crop.h / crop.w)`, preserving the crop's aspect ratio.
pub fn resolve_crop(source: &RgbaImage, crop: &CropRect) -> Result<FinalImage> {
    let crop = crop.validated(source.width(), source.height())?;

    let region = imageops::crop_imm(source, crop.x, crop.y, crop.width, crop.height).to_image();

    let out_w = FINAL_IMAGE_WIDTH;
    let out_h = (crop.height as f64 / crop.width as f64 * out_w as f64).round() as u32;
    if out_h == 0 {
        return Err(PostmockError::InvalidCrop(format!(
            "Crop ratio {}x{} collapses to zero output height",
            crop.width, crop.height
        )));
    }

    let resampled = imageops::resize(&region, out_w, out_h, imageops::FilterType::Lanczos3);

    tracing::debug!(
        crop_x = crop.x,
        crop_y = crop.y,
        crop_w = crop.width,
        crop_h = crop.height,
        out_w,
        out_h,
        "crop resolved"
    );

    Ok(FinalImage { image: resampled })
}
