// Set Windows subsystem to "windows" to prevent console window from appearing
#![cfg_attr(windows, windows_subsystem = "windows")]

mod app;

use app::HolaApp;
use eframe::egui;

fn setup_fonts(ctx: &egui::Context, base_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (egui::TextStyle::Heading, egui::FontId::new(base_size * 1.4, egui::FontFamily::Proportional)),
        (egui::TextStyle::Body, egui::FontId::new(base_size, egui::FontFamily::Proportional)),
        (egui::TextStyle::Monospace, egui::FontId::new(base_size * 0.93, egui::FontFamily::Monospace)),
        (egui::TextStyle::Button, egui::FontId::new(base_size, egui::FontFamily::Proportional)),
        (egui::TextStyle::Small, egui::FontId::new(base_size * 0.87, egui::FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    #[cfg(windows)]
    {
        use std::fs::OpenOptions;
        use std::sync::Mutex;
        use tracing_subscriber::fmt::writer::MakeWriterExt;

        if let Ok(log_file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("hola-gui.log")
        {
            tracing_subscriber::fmt()
                .with_writer(Mutex::new(log_file).with_max_level(tracing::Level::INFO))
                .init();
        } else {
            tracing_subscriber::fmt::init();
        }
    }

    #[cfg(not(windows))]
    {
        tracing_subscriber::fmt::init();
    }

    let app = HolaApp::new();
    let window = app.settings().window.clone();
    let font_size = app.settings().appearance.font_size;
    tracing::info!("Starting {} ({}x{})", window.title, window.width, window.height);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_title(window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &window.title,
        options,
        Box::new(move |cc| {
            setup_fonts(&cc.egui_ctx, font_size);
            Box::new(app)
        }),
    )
}
