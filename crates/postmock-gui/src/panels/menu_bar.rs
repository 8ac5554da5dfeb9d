use std::time::SystemTime;

use postmock_core::export::export_file_name;
use postmock_core::settings::Settings;

use crate::app::PostmockApp;
use crate::messages::WorkerCommand;
use crate::panels::controls;

pub fn show(ctx: &egui::Context, app: &mut PostmockApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Photo...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    controls::open_photo(app);
                }

                let export_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let can_export = app.viewport.showing_mockup();
                if ui
                    .add_enabled(
                        can_export,
                        egui::Button::new("Export PNG...")
                            .shortcut_text(ctx.format_shortcut(&export_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    export_mockup_dialog(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Post Settings...").clicked() {
                    ui.close();
                    app.show_settings = true;
                }

                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.settings = Settings::default();
                    if let Err(e) = app.settings_store.save(&app.settings) {
                        app.ui_state
                            .add_log(format!("ERROR: failed to save settings: {e}"));
                    } else {
                        app.ui_state.add_log("Settings reset to defaults".into());
                    }
                    app.refresh_mockup();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            controls::open_photo(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::S,
            ))
        }) {
            export_mockup_dialog(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Pick a destination and export the current mockup at 2x.
pub(crate) fn export_mockup_dialog(app: &PostmockApp) {
    if !app.viewport.showing_mockup() {
        return;
    }

    let params = app.mockup_params();
    let file_name = export_file_name(params.platform, SystemTime::now());
    let cmd_tx = app.cmd_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(&file_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ExportMockup { params, path });
        }
    });
}
