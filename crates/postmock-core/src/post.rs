use std::path::Path;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};

use crate::crop::CropRect;
use crate::error::{PostmockError, Result};

/// Supported target platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Facebook,
    LinkedIn,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::LinkedIn,
        Platform::Twitter,
    ];

    /// Display name, also used in export file names.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter(X)",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Post aspect ratio choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Landscape,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "Square",
            AspectRatio::Landscape => "Landscape",
            AspectRatio::Portrait => "Portrait",
        }
    }

    /// Width/height ratio. Constrains the crop tool and sizes the mockup
    /// media block, so the two can never disagree. Portrait is 4:5.
    pub fn ratio(&self) -> f32 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Landscape => 1.91,
            AspectRatio::Portrait => 0.8,
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-selected photo: decoded pixels plus the original encoded bytes.
/// The bytes and MIME type are kept around for the remote restyle payload.
pub struct SourcePhoto {
    pub image: RgbaImage,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl SourcePhoto {
    /// Decode an in-memory image buffer, sniffing the container format.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&bytes).map_err(|e| {
            PostmockError::ImageProcessing(format!("unrecognized image data: {e}"))
        })?;
        let image = image::load_from_memory_with_format(&bytes, format)
            .map_err(|e| PostmockError::ImageProcessing(format!("decode failed: {e}")))?
            .to_rgba8();
        Ok(Self {
            image,
            bytes,
            mime: format.to_mime_type(),
        })
    }

    /// Read and decode a photo from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl std::fmt::Debug for SourcePhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourcePhoto")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("mime", &self.mime)
            .finish()
    }
}

/// Everything the user has entered so far. Updated through the `with_*`
/// transitions; each one changes exactly its own field.
#[derive(Clone, Debug)]
pub struct PostInputs {
    pub platform: Platform,
    pub username: String,
    pub photo: Option<Arc<SourcePhoto>>,
    pub aspect_ratio: AspectRatio,
}

impl Default for PostInputs {
    fn default() -> Self {
        Self {
            platform: Platform::Instagram,
            username: String::new(),
            photo: None,
            aspect_ratio: AspectRatio::Square,
        }
    }
}

impl PostInputs {
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_photo(mut self, photo: Option<Arc<SourcePhoto>>) -> Self {
        self.photo = photo;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Check that a mockup can be generated from the current inputs.
    pub fn ready_to_generate(&self, crop: Option<&CropRect>) -> Result<()> {
        if self.photo.is_none() || crop.is_none() {
            return Err(PostmockError::Validation(
                "Please upload and adjust your photo first.".into(),
            ));
        }
        Ok(())
    }
}
