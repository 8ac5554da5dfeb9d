use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use image::ImageFormat;

use crate::consts::EXPORT_SCALE;
use crate::error::{PostmockError, Result};
use crate::mockup::draw::flatten_onto_white;
use crate::mockup::{MockupRenderer, MockupRequest};
use crate::post::Platform;

/// Rasterize the mockup at export scale, flatten onto a white background
/// and write a lossless PNG to `path`.
pub fn export_mockup(
    renderer: &MockupRenderer,
    req: &MockupRequest<'_>,
    path: &Path,
) -> Result<()> {
    let rendered = renderer
        .render(req, EXPORT_SCALE)
        .map_err(|e| PostmockError::Export(e.to_string()))?;
    let flattened = flatten_onto_white(&rendered);

    flattened
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| PostmockError::Export(format!("could not write {}: {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        width = flattened.width(),
        height = flattened.height(),
        "mockup exported"
    );
    Ok(())
}

/// Download file name: `Mockup-<platform>-<unix_millis>.png`.
pub fn export_file_name(platform: Platform, at: SystemTime) -> String {
    let millis = at
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("Mockup-{}-{millis}.png", platform.label())
}
