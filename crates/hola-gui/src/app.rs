use eframe::egui;
use hola_core::{AppSettings, AppState, TextDialog, Theme};

/// One user action. Each frame collects these while drawing and
/// dispatches them afterwards through [`HolaApp::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Increment,
    TextChanged(String),
    ShowText,
    Clear,
    SetDarkTheme(bool),
    Exit,
}

pub struct HolaApp {
    settings: AppSettings,
    state: AppState,
    // Buffer bound to the entry widget; mirrors `state.last_text` except after `Clear`
    entry: String,
    dialog: Option<TextDialog>,
    theme: Theme,
    quit_requested: bool,
}

impl HolaApp {
    pub fn new() -> Self {
        Self::with_settings(Self::load_settings())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        let theme = settings.appearance.theme;
        Self {
            settings,
            state: AppState::new(),
            entry: String::new(),
            dialog: None,
            theme,
            quit_requested: false,
        }
    }

    fn load_settings() -> AppSettings {
        let runtime = match tokio::runtime::Builder::new_current_thread().build() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!("Failed to create runtime for settings: {}", e);
                return AppSettings::default();
            }
        };

        match runtime.block_on(AppSettings::load()) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    "Failed to load settings from {}: {}",
                    AppSettings::settings_path().display(),
                    e
                );
                AppSettings::default()
            }
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn handle(&mut self, event: UiEvent) {
        tracing::debug!("Handling {:?}", event);

        match event {
            UiEvent::Increment => self.state.increment(),
            UiEvent::TextChanged(text) => self.state.set_text(text),
            UiEvent::ShowText => self.dialog = Some(TextDialog::from_state(&self.state)),
            UiEvent::Clear => {
                self.state.clear();
                self.entry.clear();
            }
            UiEvent::SetDarkTheme(dark) => {
                self.theme = Theme::from_dark(dark);
                tracing::info!("Theme set to {:?}", self.theme);
            }
            UiEvent::Exit => {
                tracing::info!("Exit requested");
                self.quit_requested = true;
            }
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    fn render_main(&mut self, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("🚀 Aplicación GUI con Rust y egui").strong());
            ui.separator();
            ui.add_space(10.0);

            ui.label(self.state.counter_label());
            ui.horizontal(|ui| {
                if ui.button("➕ Incrementar").clicked() {
                    events.push(UiEvent::Increment);
                }
                if ui.button("🧹 Limpiar").clicked() {
                    events.push(UiEvent::Clear);
                }
            });
            ui.add_space(10.0);

            ui.label("Entrada de texto:");
            let entry = ui.add(
                egui::TextEdit::singleline(&mut self.entry)
                    .hint_text("Escribe algo aquí...")
                    .desired_width(f32::INFINITY),
            );
            if entry.changed() {
                events.push(UiEvent::TextChanged(self.entry.clone()));
            }
            if ui.button("👁 Mostrar Texto").clicked() {
                events.push(UiEvent::ShowText);
            }
            ui.add_space(10.0);

            let mut dark = self.theme.is_dark();
            if ui.checkbox(&mut dark, "Tema Oscuro").changed() {
                events.push(UiEvent::SetDarkTheme(dark));
            }
            ui.add_space(10.0);

            ui.label(system_info());
            ui.add_space(10.0);

            if ui.button("❌ Salir").clicked() {
                events.push(UiEvent::Exit);
            }
        });
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.dialog else {
            return;
        };

        let mut window_open = true;
        let mut dismissed = false;
        egui::Window::new(dialog.title.as_str())
            .open(&mut window_open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(dialog.message.as_str());
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if !window_open || dismissed {
            self.dialog = None;
        }
    }
}

fn system_info() -> String {
    format!(
        "Sistema: {}\nLenguaje: Rust\nGUI: egui",
        std::env::consts::OS
    )
}

impl eframe::App for HolaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            // The dialog is modal: the window underneath stays inert while it is open
            ui.set_enabled(self.dialog.is_none());
            self.render_main(ui, &mut events);
        });

        self.render_dialog(ctx);

        for event in events {
            self.handle(event);
        }

        if self.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl Default for HolaApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> HolaApp {
        HolaApp::with_settings(AppSettings::default())
    }

    #[test]
    fn test_increment_updates_label() {
        let mut app = app();
        for _ in 0..3 {
            app.handle(UiEvent::Increment);
        }
        assert_eq!(app.state.counter(), 3);
        assert_eq!(app.state.counter_label(), "Contador: ⭐⭐⭐");
    }

    #[test]
    fn test_text_changed_tracks_latest_value() {
        let mut app = app();
        app.handle(UiEvent::TextChanged("h".to_string()));
        app.handle(UiEvent::TextChanged("hola".to_string()));
        assert_eq!(app.state.describe_text(), Some("hola"));
    }

    #[test]
    fn test_show_text_opens_matching_dialog() {
        let mut app = app();
        app.handle(UiEvent::ShowText);
        assert_eq!(app.dialog.as_ref().map(|d| d.title.as_str()), Some("Info"));

        app.handle(UiEvent::TextChanged("abc".to_string()));
        app.handle(UiEvent::ShowText);
        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.title, "Texto ingresado");
        assert!(dialog.message.contains("\"abc\""));
    }

    #[test]
    fn test_clear_empties_state_and_entry() {
        let mut app = app();
        app.entry = "abc".to_string();
        app.handle(UiEvent::TextChanged("abc".to_string()));
        app.handle(UiEvent::Increment);
        app.handle(UiEvent::Clear);

        assert_eq!(app.state, AppState::new());
        assert!(app.entry.is_empty());
        assert_eq!(app.state.counter_label(), "Contador: 0");
    }

    #[test]
    fn test_theme_toggle_starts_from_settings() {
        let mut settings = AppSettings::default();
        settings.appearance.theme = Theme::Light;
        let mut app = HolaApp::with_settings(settings);
        assert_eq!(app.theme, Theme::Light);

        app.handle(UiEvent::SetDarkTheme(true));
        assert_eq!(app.theme, Theme::Dark);
        app.handle(UiEvent::SetDarkTheme(false));
        assert_eq!(app.theme, Theme::Light);
        // Presentation only
        assert_eq!(app.state, AppState::new());
    }

    #[test]
    fn test_exit_requests_close() {
        let mut app = app();
        assert!(!app.quit_requested);
        app.handle(UiEvent::Exit);
        assert!(app.quit_requested);
    }
}
