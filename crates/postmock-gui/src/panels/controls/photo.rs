use crate::app::PostmockApp;
use crate::messages::WorkerCommand;

pub(super) fn photo_section(ui: &mut egui::Ui, app: &mut PostmockApp) {
    super::section_header(ui, "4. Photo", None);
    ui.add_space(4.0);

    if ui.button("Open Photo...").clicked() {
        open_photo(app);
    }

    if let Some(ref path) = app.ui_state.photo_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }

    if let Some(ref photo) = app.inputs.photo {
        ui.small(format!(
            "{}x{}, {}",
            photo.width(),
            photo.height(),
            photo.mime
        ));
    }
}

pub(crate) fn open_photo(app: &PostmockApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif", "bmp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadPhoto { path });
        }
    });
}
