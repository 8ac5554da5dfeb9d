use postmock_core::post::AspectRatio;

use crate::app::PostmockApp;

pub(super) fn aspect_section(ui: &mut egui::Ui, app: &mut PostmockApp) {
    super::section_header(ui, "3. Post Aspect Ratio", None);
    ui.add_space(4.0);

    let mut clicked = None;
    ui.horizontal(|ui| {
        for ratio in AspectRatio::ALL {
            if ui
                .selectable_label(app.inputs.aspect_ratio == ratio, ratio.label())
                .clicked()
                && app.inputs.aspect_ratio != ratio
            {
                clicked = Some(ratio);
            }
        }
    });

    if let Some(ratio) = clicked {
        select_aspect(app, ratio);
    }

    if let Some(ref rect) = app.ui_state.crop_state.rect {
        ui.small(format!(
            "Crop: {}x{} at ({}, {})",
            rect.width.round() as u32,
            rect.height.round() as u32,
            rect.x.round() as u32,
            rect.y.round() as u32,
        ));
    }
}

fn select_aspect(app: &mut PostmockApp, ratio: AspectRatio) {
    app.inputs = app.inputs.clone().with_aspect_ratio(ratio);

    // A generated mockup is stale under a new ratio.
    app.viewport.clear_mockup();

    if let Some(size) = app.viewport.photo_size {
        if let Some(rect) = app.ui_state.crop_state.rect.as_mut() {
            rect.snap_to_ratio(ratio.ratio(), size[0] as f32, size[1] as f32);
        }
    }
}
