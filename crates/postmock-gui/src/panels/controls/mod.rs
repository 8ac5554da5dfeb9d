mod aspect;
mod generate;
mod identity;
mod photo;
mod platform;
mod restyle;

pub(crate) use photo::open_photo;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::PostmockApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                platform::platform_section(ui, app);
                ui.separator();
                identity::username_section(ui, app);
                ui.separator();
                aspect::aspect_section(ui, app);
                ui.separator();
                photo::photo_section(ui, app);
                ui.separator();
                generate::generate_section(ui, app);
                ui.separator();
                restyle::restyle_section(ui, app);
            });
        });
}

fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}
