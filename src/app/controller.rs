//! Application Controller für zentrale Event-Verarbeitung und den Frame-Tick.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und die Simulation auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
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
            AppCommand::SetViewportSize { size } => {
                handlers::simulation::set_viewport_size(state, size)
            }

            // === Zeiger ===
            AppCommand::PointerMove { pos } => handlers::pointer::moved(state, pos),
            AppCommand::PointerDown { pos } => handlers::pointer::pressed(state, pos),
            AppCommand::PointerUp => handlers::pointer::released(state),
            AppCommand::PointerLeave => handlers::pointer::left(state),

            // === Tunables ===
            AppCommand::SetSpringConstant { value } => {
                handlers::simulation::set_spring_constant(state, value)
            }
            AppCommand::SetDampingFactor { value } => {
                handlers::simulation::set_damping_factor(state, value)
            }
            AppCommand::SetInfluenceFactor { value } => {
                handlers::simulation::set_influence_factor(state, value)
            }
            AppCommand::SetInteractionRadius { value } => {
                handlers::simulation::set_interaction_radius(state, value)
            }
            AppCommand::SetTangentSampleDensity { value } => {
                handlers::simulation::set_tangent_sample_density(state, value)
            }
            AppCommand::ToggleTangents => handlers::simulation::toggle_tangents(state),
            AppCommand::ToggleAnchors => handlers::simulation::toggle_anchors(state),

            // === Kurve & Optionen ===
            AppCommand::ResetCurve => handlers::simulation::reset_curve(state),
            AppCommand::SaveOptions => handlers::options::save_options(state)?,
            AppCommand::ResetOptions => handlers::options::reset_options(state),
            AppCommand::RequestExit => handlers::options::request_exit(state),
        }

        Ok(())
    }

    /// Verarbeitet alle Intents eines Frames und integriert danach höchstens einmal.
    ///
    /// Fehlgeschlagene Intents werden geloggt, die übrigen laufen weiter.
    /// Mit `advance == false` (z.B. verworfener egui-Pass) bleibt die Simulation stehen.
    pub fn handle_frame(&mut self, state: &mut AppState, intents: Vec<AppIntent>, advance: bool) {
        for intent in intents {
            if let Err(e) = self.handle_intent(state, intent) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
        if advance {
            self.tick(state);
        }
    }

    /// Ein Frame der Simulation: Kraft am gehaltenen Zeiger erneuern, dann
    /// genau ein Integrationsschritt.
    pub fn tick(&mut self, state: &mut AppState) {
        state.curve.tick();
        state.tick_count += 1;
        log::trace!(
            "Tick {}: P1={:?} P2={:?}",
            state.tick_count,
            state.curve.points()[1],
            state.curve.points()[2]
        );
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
