use postmock_core::settings::Settings;

use crate::app::PostmockApp;

/// Caption/hashtag defaults editor. Every edit is persisted immediately.
pub fn show(ctx: &egui::Context, app: &mut PostmockApp) {
    if !app.show_settings {
        return;
    }

    let mut open = app.show_settings;
    let mut changed = false;
    let mut close_clicked = false;

    egui::Window::new("Post Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Default Caption");
            changed |= ui
                .add(
                    egui::TextEdit::multiline(&mut app.settings.caption)
                        .desired_rows(5)
                        .desired_width(380.0)
                        .hint_text("Enter post description..."),
                )
                .changed();

            ui.add_space(8.0);
            ui.label("Default Hashtags");
            changed |= ui
                .add(
                    egui::TextEdit::multiline(&mut app.settings.hashtags)
                        .desired_rows(3)
                        .desired_width(380.0)
                        .hint_text("#your #hashtags #here"),
                )
                .changed();

            ui.small("Saved automatically on every change.");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Reset Defaults").clicked() {
                    app.settings = Settings::default();
                    changed = true;
                }
                if ui.button("Save & Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    app.show_settings = open && !close_clicked;

    if changed {
        if let Err(e) = app.settings_store.save(&app.settings) {
            app.ui_state
                .add_log(format!("ERROR: failed to save settings: {e}"));
        }
        app.refresh_mockup();
    }
}
