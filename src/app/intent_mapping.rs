//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => {
            // Wird jeden Frame gemeldet; nur echte Änderungen erzeugen einen Command
            if state.viewport_size == Some(size) {
                vec![]
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }
        AppIntent::PointerMoved { pos } => vec![AppCommand::PointerMove { pos }],
        AppIntent::PointerPressed { pos } => vec![AppCommand::PointerDown { pos }],
        AppIntent::PointerReleased => vec![AppCommand::PointerUp],
        AppIntent::PointerLeft => vec![AppCommand::PointerLeave],

        AppIntent::SpringConstantChanged { value } => {
            vec![AppCommand::SetSpringConstant { value }]
        }
        AppIntent::DampingFactorChanged { value } => vec![AppCommand::SetDampingFactor { value }],
        AppIntent::InfluenceFactorChanged { value } => {
            vec![AppCommand::SetInfluenceFactor { value }]
        }
        AppIntent::InteractionRadiusChanged { value } => {
            vec![AppCommand::SetInteractionRadius { value }]
        }
        AppIntent::TangentDensityChanged { value } => {
            vec![AppCommand::SetTangentSampleDensity { value }]
        }
        AppIntent::ToggleTangents => vec![AppCommand::ToggleTangents],
        AppIntent::ToggleAnchors => vec![AppCommand::ToggleAnchors],

        AppIntent::ResetCurveRequested => vec![AppCommand::ResetCurve],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ResetOptionsRequested => {
            vec![AppCommand::ResetOptions, AppCommand::SaveOptions]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
