use std::sync::mpsc;
use std::sync::Arc;

use postmock_core::post::{PostInputs, SourcePhoto};
use postmock_core::settings::{Settings, SettingsStore};

use crate::convert::rgba_to_color_image;
use crate::messages::{MockupParams, WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{CropRectPixels, Stage, UIState, ViewportState};
use crate::worker;

pub struct PostmockApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub inputs: PostInputs,
    pub settings: Settings,
    pub settings_store: SettingsStore,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_settings: bool,
    pub show_about: bool,
}

impl PostmockApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let settings_store = SettingsStore::default_location();
        let settings = settings_store.load_or_default();

        Self {
            cmd_tx,
            result_rx,
            inputs: PostInputs::default(),
            settings,
            settings_store,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_settings: false,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::PhotoLoaded { path, photo } => {
                    self.ui_state.add_log(format!(
                        "Loaded: {} ({}x{}, {})",
                        path.display(),
                        photo.width(),
                        photo.height(),
                        photo.mime
                    ));
                    self.ui_state.running_stage = None;
                    self.ui_state.error = None;
                    self.install_photo(ctx, photo);
                    self.ui_state.photo_path = Some(path);
                }
                WorkerResult::MockupReady {
                    preview,
                    final_size,
                    elapsed,
                } => {
                    self.ui_state.running_stage = None;
                    self.ui_state.add_log(format!(
                        "Mockup ready from {}x{} crop ({})",
                        final_size.0,
                        final_size.1,
                        format_duration(elapsed)
                    ));
                    let image = rgba_to_color_image(&preview);
                    let texture =
                        ctx.load_texture("mockup", image, egui::TextureOptions::LINEAR);
                    self.viewport.mockup_texture = Some(texture);
                }
                WorkerResult::Exported { path, elapsed } => {
                    self.ui_state.running_stage = None;
                    self.ui_state.add_log(format!(
                        "Saved: {} ({})",
                        path.display(),
                        format_duration(elapsed)
                    ));
                }
                WorkerResult::PhotoTransformed { photo, elapsed } => {
                    self.ui_state.running_stage = None;
                    self.ui_state.add_log(format!(
                        "Mosaic restyle applied ({})",
                        format_duration(elapsed)
                    ));
                    self.install_photo(ctx, photo);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.running_stage = None;
                    self.ui_state.error = Some(message.clone());
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Swap in a new source photo: rebuild the texture, reset the crop to
    /// the maximal centered rect, drop any generated mockup.
    fn install_photo(&mut self, ctx: &egui::Context, photo: Arc<SourcePhoto>) {
        let image = rgba_to_color_image(&photo.image);
        let size = image.size;
        let texture = ctx.load_texture("photo", image, egui::TextureOptions::LINEAR);

        self.viewport.photo_texture = Some(texture);
        self.viewport.photo_size = Some(size);
        self.viewport.mockup_texture = None;
        self.viewport.fit_requested = true;

        self.ui_state.crop_state = Default::default();
        self.ui_state.crop_state.rect = Some(CropRectPixels::centered_max(
            size[0] as f32,
            size[1] as f32,
            self.inputs.aspect_ratio.ratio(),
        ));

        self.inputs = self.inputs.clone().with_photo(Some(photo));
    }

    pub fn mockup_params(&self) -> MockupParams {
        MockupParams {
            platform: self.inputs.platform,
            username: self.inputs.username.clone(),
            aspect_ratio: self.inputs.aspect_ratio,
            caption: self.settings.caption.clone(),
            hashtags: self.settings.hashtags.clone(),
        }
    }

    /// Validate the inputs and kick off crop resolution + composition.
    pub fn generate(&mut self) {
        let crop = self
            .ui_state
            .crop_state
            .rect
            .as_ref()
            .map(|r| r.to_crop_rect());
        if let Err(e) = self.inputs.ready_to_generate(crop.as_ref()) {
            self.ui_state.error = Some(e.to_string());
            return;
        }
        let (Some(photo), Some(crop)) = (self.inputs.photo.clone(), crop) else {
            return;
        };

        self.ui_state.error = None;
        self.ui_state.running_stage = Some(Stage::Generating);
        self.send_command(WorkerCommand::Generate {
            photo,
            crop,
            params: self.mockup_params(),
        });
    }

    /// Re-compose the preview if one is currently showing.
    pub fn refresh_mockup(&mut self) {
        if self.viewport.showing_mockup() && !self.ui_state.is_busy() {
            self.send_command(WorkerCommand::RenderMockup {
                params: self.mockup_params(),
            });
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for PostmockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::settings_dialog::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About PostMock")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("PostMock");
                        ui.label("Social Media Post Mockup Studio");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

pub(crate) fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
