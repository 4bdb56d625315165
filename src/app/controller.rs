//! Application Controller für zentrale Event-Verarbeitung.

use std::path::PathBuf;

use super::notifier::{LogNotifier, Notifier};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::export::{HttpSolverClient, SolverClient};
use crate::shared::{EditorOptions, RenderScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Hält die externen Kollaborateure (Benachrichtigung, Solver), damit
/// der gesamte Ablauf ohne UI testbar bleibt.
pub struct AppController {
    notifier: Box<dyn Notifier>,
    solver: Box<dyn SolverClient>,
    options_path: PathBuf,
}

impl AppController {
    /// Erstellt einen Controller mit den gegebenen Kollaborateuren.
    pub fn new(notifier: Box<dyn Notifier>, solver: Box<dyn SolverClient>) -> Self {
        Self {
            notifier,
            solver,
            options_path: EditorOptions::config_path(),
        }
    }

    /// Speichert Optionen künftig unter `path` statt neben der Binary.
    pub fn with_options_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options_path = path.into();
        self
    }

    /// Erstellt einen Controller mit Log-Benachrichtigung und HTTP-Solver aus den Optionen.
    pub fn with_options(options: &EditorOptions) -> Self {
        Self::new(
            Box::new(LogNotifier),
            Box::new(HttpSolverClient::new(options.solver_url.clone())),
        )
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::PlaceComponent {
                component_type,
                world_pos,
            } => handlers::editing::place_component(
                state,
                self.notifier.as_ref(),
                component_type,
                world_pos,
            ),
            AppCommand::WireToolPick {
                world_pos,
                max_distance,
            } => handlers::editing::wire_tool_pick(state, world_pos, max_distance),
            AppCommand::UpdateRubberBand { world_pos } => {
                handlers::editing::update_rubber_band(state, world_pos)
            }
            AppCommand::DeleteComponentAt { world_pos } => {
                handlers::editing::delete_component_at(state, world_pos)
            }
            AppCommand::ResetDocument => handlers::editing::reset_document(state),

            // === Selektion ===
            AppCommand::SelectComponentAt { world_pos } => {
                handlers::selection::select_component_at(state, world_pos)
            }
            AppCommand::SetSelectedValue { text } => {
                handlers::selection::set_selected_value(state, text)
            }

            // === Simulation ===
            AppCommand::RunSimulation => {
                handlers::simulation::run(state, self.solver.as_ref(), self.notifier.as_ref())
            }
            AppCommand::BuildNetlistPreview => handlers::simulation::build_netlist_preview(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::CloseResults => handlers::dialog::close_results(state),
            AppCommand::CloseNetlistPreview => handlers::dialog::close_netlist_preview(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                let saved = handlers::dialog::apply_options(state, *options, &self.options_path);
                self.solver.set_endpoint(&state.options.solver_url);
                self.report_save_failure(saved);
            }
            AppCommand::ResetOptions => {
                let saved = handlers::dialog::reset_options(state, &self.options_path);
                self.solver.set_endpoint(&state.options.solver_url);
                self.report_save_failure(saved);
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        state.needs_repaint = true;
        Ok(())
    }

    fn report_save_failure(&self, saved: anyhow::Result<()>) {
        if let Err(e) = saved {
            log::error!("Optionen konnten nicht gespeichert werden: {:#}", e);
            self.notifier
                .report_failure(&format!("Optionen konnten nicht gespeichert werden: {}", e));
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
