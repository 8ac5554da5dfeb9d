use crate::app::PostmockApp;

pub(super) fn generate_section(ui: &mut egui::Ui, app: &mut PostmockApp) {
    super::section_header(ui, "Generate", None);
    ui.add_space(4.0);

    let enabled = app.inputs.photo.is_some() && !app.ui_state.is_busy();
    if ui
        .add_enabled(enabled, egui::Button::new("Generate Mockup Post"))
        .clicked()
    {
        app.generate();
    }

    if app.viewport.showing_mockup() {
        ui.small("Preview follows platform and text edits.");
    }

    if let Some(ref error) = app.ui_state.error {
        ui.add_space(4.0);
        ui.colored_label(egui::Color32::from_rgb(220, 38, 38), error);
    }
}
