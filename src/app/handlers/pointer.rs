//! Handler für Zeiger-Events auf der Zeichenfläche.
//!
//! Handler rufen nie `tick` auf; integriert wird ausschließlich einmal pro Frame.

use crate::app::AppState;
use glam::DVec2;

/// Zeiger bewegt (zieht ggf. den gegriffenen Punkt).
pub fn moved(state: &mut AppState, pos: DVec2) {
    state.curve.pointer_move(pos);
}

/// Primärtaste gedrückt: Hit-Test und ggf. Drag-Start.
pub fn pressed(state: &mut AppState, pos: DVec2) {
    if state.curve.pointer_down(pos) {
        state.status_message = state
            .curve
            .interaction_state()
            .target_index
            .map(|index| format!("Steuerpunkt P{index} gegriffen"));
    }
}

/// Primärtaste losgelassen.
pub fn released(state: &mut AppState) {
    if state.curve.interaction().is_dragging() {
        state.status_message = None;
    }
    state.curve.pointer_up();
}

/// Zeiger hat die Fläche verlassen.
pub fn left(state: &mut AppState) {
    released(state);
    state.curve.pointer_leave();
}
