use postmock_core::transform::API_KEY_VAR;

use crate::app::PostmockApp;
use crate::messages::WorkerCommand;
use crate::state::Stage;

/// Optional path: send the source photo to the generative restyle service.
/// Decoupled from generate/export; on success the photo is replaced.
pub(super) fn restyle_section(ui: &mut egui::Ui, app: &mut PostmockApp) {
    super::section_header(ui, "Mosaic Restyle", None);
    ui.add_space(4.0);

    ui.small("Optional: restyle the photo as mosaic tile art.");

    let enabled = app.inputs.photo.is_some() && !app.ui_state.is_busy();
    if ui
        .add_enabled(enabled, egui::Button::new("Restyle Photo"))
        .clicked()
    {
        if let Some(photo) = app.inputs.photo.clone() {
            app.ui_state.error = None;
            app.ui_state.running_stage = Some(Stage::Restyling);
            app.send_command(WorkerCommand::TransformPhoto { photo });
        }
    }

    ui.small(format!("Uses the {API_KEY_VAR} credential."));
}
