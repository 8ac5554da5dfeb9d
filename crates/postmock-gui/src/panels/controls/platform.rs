use postmock_core::post::Platform;

use crate::app::PostmockApp;

pub(super) fn platform_section(ui: &mut egui::Ui, app: &mut PostmockApp) {
    super::section_header(ui, "1. Platform", None);
    ui.add_space(4.0);

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for p in Platform::ALL {
            if ui
                .selectable_label(app.inputs.platform == p, p.label())
                .clicked()
                && app.inputs.platform != p
            {
                clicked = Some(p);
            }
        }
    });

    if let Some(p) = clicked {
        app.inputs = app.inputs.clone().with_platform(p);
        // A visible preview tracks the new platform template.
        app.refresh_mockup();
    }
}
