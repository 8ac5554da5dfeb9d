use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use postmock_core::crop::CropRect;
use postmock_core::post::{AspectRatio, Platform, SourcePhoto};
use postmock_core::RgbaImage;

/// Everything the compositor needs besides the resolved crop bitmap.
#[derive(Clone)]
pub struct MockupParams {
    pub platform: Platform,
    pub username: String,
    pub aspect_ratio: AspectRatio,
    pub caption: String,
    pub hashtags: String,
}

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode a photo picked by the user.
    LoadPhoto { path: PathBuf },

    /// Resolve the crop, then compose the platform mockup.
    Generate {
        photo: Arc<SourcePhoto>,
        crop: CropRect,
        params: MockupParams,
    },

    /// Re-compose the preview from the cached final image (platform or
    /// text changed while the mockup is showing).
    RenderMockup { params: MockupParams },

    /// Rasterize at export scale and write a PNG.
    ExportMockup { params: MockupParams, path: PathBuf },

    /// Send the photo to the generative restyle service.
    TransformPhoto { photo: Arc<SourcePhoto> },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    PhotoLoaded {
        path: PathBuf,
        photo: Arc<SourcePhoto>,
    },

    /// Crop resolved and mockup composed, ready for preview.
    MockupReady {
        preview: RgbaImage,
        final_size: (u32, u32),
        elapsed: Duration,
    },

    Exported {
        path: PathBuf,
        elapsed: Duration,
    },

    /// Restyled photo returned by the remote service.
    PhotoTransformed {
        photo: Arc<SourcePhoto>,
        elapsed: Duration,
    },

    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
