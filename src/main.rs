//! Circuit Schematic Editor.
//!
//! Schaltplan-Editor mit egui: Bauteile platzieren, verdrahten, Werte
//! bearbeiten und die Schaltung an einen externen Solver übergeben.

use circuit_schematic_editor::{
    ui, AppController, AppIntent, AppState, EditorOptions, HttpSolverClient, NotificationInbox,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Circuit Schematic Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Circuit Schematic Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Circuit Schematic Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    inbox: NotificationInbox,
    notifications: Vec<String>,
    canvas_input: ui::CanvasInput,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let inbox = NotificationInbox::new();
        let controller = AppController::new(
            Box::new(inbox.clone()),
            Box::new(HttpSolverClient::new(editor_options.solver_url.clone())),
        );

        Self {
            state: AppState::with_options(editor_options),
            controller,
            inbox,
            notifications: Vec::new(),
            canvas_input: ui::CanvasInput::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        self.process_events(events);

        self.notifications.extend(self.inbox.drain());

        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::show_results_window(ctx, &self.state.ui));
        events.extend(ui::show_netlist_preview(ctx, &self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));
        ui::show_notifications(ctx, &mut self.notifications);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(
                    self.canvas_input
                        .collect_canvas_events(ui, &response, rect),
                );

                let scene = self.controller.build_render_scene(&self.state);
                ui::canvas::paint_scene(ui.painter(), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.needs_repaint
            || !self.notifications.is_empty()
            || self.state.ui.show_options_dialog
        {
            self.state.needs_repaint = false;
            ctx.request_repaint();
        }
    }
}
