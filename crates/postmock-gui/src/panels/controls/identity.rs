use crate::app::PostmockApp;

pub(super) fn username_section(ui: &mut egui::Ui, app: &mut PostmockApp) {
    super::section_header(ui, "2. Username", None);
    ui.add_space(4.0);

    let mut username = app.inputs.username.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut username)
            .hint_text("@your_username")
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        app.inputs = app.inputs.clone().with_username(username);
        app.refresh_mockup();
    }
}
