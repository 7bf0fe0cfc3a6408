//! Baut die read-only Render-Szene aus dem AppState.

use super::AppState;
use crate::shared::RenderScene;

/// Erstellt die Render-Szene für den aktuellen Frame.
pub fn build(state: &AppState) -> RenderScene {
    let curve = &state.curve;
    let interaction = curve.interaction();

    RenderScene {
        control_points: *curve.points().as_array(),
        anchors: curve.springs().anchors(),
        curve: curve.samples().to_vec(),
        tangents: if state.options.show_tangents {
            curve.tangents()
        } else {
            Vec::new()
        },
        curve_length: curve.length(),
        dragged_index: interaction.state().target_index,
        hovered_index: interaction.hovered_index(curve.points()),
        pointer: interaction.pointer(),
        interaction_radius: interaction.radius(),
        show_anchors: state.options.show_anchors,
    }
}
