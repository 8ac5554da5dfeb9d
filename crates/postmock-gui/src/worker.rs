use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use postmock_core::consts::PREVIEW_SCALE;
use postmock_core::crop::{resolve_crop, CropRect, FinalImage};
use postmock_core::error::Result;
use postmock_core::export::export_mockup;
use postmock_core::mockup::{MockupFont, MockupRenderer, MockupRequest};
use postmock_core::post::SourcePhoto;
use postmock_core::transform::TransformClient;

use crate::messages::{MockupParams, WorkerCommand, WorkerResult};

/// Cached intermediate state living on the worker thread. Re-render and
/// export reuse the resolved crop instead of recomputing it.
struct MockupCache {
    final_image: Option<FinalImage>,
}

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
    let font_sources = bundled_font_sources();

    std::thread::Builder::new()
        .name("postmock-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, font_sources);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

/// TTF payloads of egui's bundled text fonts, used for mockup composition
/// so the app needs no system font.
fn bundled_font_sources() -> Vec<Vec<u8>> {
    egui::FontDefinitions::default()
        .font_data
        .iter()
        .filter(|(name, _)| !name.to_ascii_lowercase().contains("emoji"))
        .map(|(_, data)| data.font.to_vec())
        .collect()
}

fn build_renderer(font_sources: Vec<Vec<u8>>) -> Result<MockupRenderer> {
    for bytes in font_sources {
        if let Ok(font) = MockupFont::from_bytes(bytes) {
            return Ok(MockupRenderer::new(font));
        }
    }
    MockupRenderer::with_system_font()
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    font_sources: Vec<Vec<u8>>,
) {
    let renderer = match build_renderer(font_sources) {
        Ok(r) => r,
        Err(e) => {
            send_error(&tx, &ctx, format!("Font setup failed: {e}"));
            return;
        }
    };
    let mut cache = MockupCache { final_image: None };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadPhoto { path } => {
                handle_load_photo(&path, &tx, &ctx);
            }
            WorkerCommand::Generate {
                photo,
                crop,
                params,
            } => {
                handle_generate(&renderer, &photo, &crop, &params, &mut cache, &tx, &ctx);
            }
            WorkerCommand::RenderMockup { params } => {
                compose_and_send(&renderer, &params, &cache, Instant::now(), &tx, &ctx);
            }
            WorkerCommand::ExportMockup { params, path } => {
                handle_export(&renderer, &params, &path, &cache, &tx, &ctx);
            }
            WorkerCommand::TransformPhoto { photo } => {
                handle_transform(&photo, &tx, &ctx);
            }
        }
    }
}

fn handle_load_photo(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match SourcePhoto::load(path) {
        Ok(photo) => {
            send(
                tx,
                ctx,
                WorkerResult::PhotoLoaded {
                    path: path.to_path_buf(),
                    photo: Arc::new(photo),
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to load photo: {e}")),
    }
}

fn handle_generate(
    renderer: &MockupRenderer,
    photo: &SourcePhoto,
    crop: &CropRect,
    params: &MockupParams,
    cache: &mut MockupCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    send_log(
        tx,
        ctx,
        format!(
            "Cropping {}x{} at ({},{})...",
            crop.width, crop.height, crop.x, crop.y
        ),
    );

    match resolve_crop(&photo.image, crop) {
        Ok(final_image) => {
            cache.final_image = Some(final_image);
            compose_and_send(renderer, params, cache, start, tx, ctx);
        }
        Err(e) => send_error(tx, ctx, format!("Failed to process image: {e}")),
    }
}

/// Compose the mockup from the cached final image and ship the preview.
fn compose_and_send(
    renderer: &MockupRenderer,
    params: &MockupParams,
    cache: &MockupCache,
    start: Instant,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some(final_image) = cache.final_image.as_ref() else {
        send_error(tx, ctx, "No generated image. Run Generate first.");
        return;
    };

    let req = MockupRequest {
        platform: params.platform,
        username: &params.username,
        image: final_image,
        aspect_ratio: params.aspect_ratio,
        caption: &params.caption,
        hashtags: &params.hashtags,
    };

    match renderer.render(&req, PREVIEW_SCALE) {
        Ok(preview) => {
            send(
                tx,
                ctx,
                WorkerResult::MockupReady {
                    preview,
                    final_size: (final_image.width(), final_image.height()),
                    elapsed: start.elapsed(),
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to compose mockup: {e}")),
    }
}

fn handle_export(
    renderer: &MockupRenderer,
    params: &MockupParams,
    path: &Path,
    cache: &MockupCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some(final_image) = cache.final_image.as_ref() else {
        send_error(tx, ctx, "No mockup to export. Run Generate first.");
        return;
    };

    let start = Instant::now();
    let req = MockupRequest {
        platform: params.platform,
        username: &params.username,
        image: final_image,
        aspect_ratio: params.aspect_ratio,
        caption: &params.caption,
        hashtags: &params.hashtags,
    };

    match export_mockup(renderer, &req, path) {
        Ok(()) => {
            send(
                tx,
                ctx,
                WorkerResult::Exported {
                    path: path.to_path_buf(),
                    elapsed: start.elapsed(),
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("{e}. Try again.")),
    }
}

fn handle_transform(
    photo: &SourcePhoto,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    send_log(tx, ctx, "Sending photo to the restyle service...");

    // Built fresh per call so the current environment is used.
    let client = match TransformClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            send_error(tx, ctx, e.to_string());
            return;
        }
    };

    match client.transform_to_mosaic(&photo.bytes, photo.mime) {
        Ok(bytes) => match SourcePhoto::from_bytes(bytes) {
            Ok(restyled) => {
                send(
                    tx,
                    ctx,
                    WorkerResult::PhotoTransformed {
                        photo: Arc::new(restyled),
                        elapsed: start.elapsed(),
                    },
                );
            }
            Err(e) => send_error(tx, ctx, format!("Transform returned a bad image: {e}")),
        },
        Err(e) => send_error(tx, ctx, e.to_string()),
    }
}
