//! Handler für Flächengröße, Kurven-Reset und Simulations-Parameter.

use crate::app::AppState;
use glam::DVec2;

/// Übernimmt eine neue Flächengröße und legt die Kontrollpunkte neu aus.
pub fn set_viewport_size(state: &mut AppState, size: DVec2) {
    if state.viewport_size == Some(size) {
        return;
    }
    state.viewport_size = Some(size);
    let points = state.default_control_points();
    state.curve.install(points);
}

/// Setzt die Kurve auf das Standard-Layout der aktuellen Fläche zurück.
pub fn reset_curve(state: &mut AppState) {
    let points = state.default_control_points();
    state.curve.install(points);
    state.status_message = Some("Kurve zurueckgesetzt".to_string());
}

pub fn set_spring_constant(state: &mut AppState, value: f64) {
    state.options.spring_constant = state.curve.set_spring_constant(value);
}

pub fn set_damping_factor(state: &mut AppState, value: f64) {
    state.options.damping_factor = state.curve.set_damping_factor(value);
}

pub fn set_influence_factor(state: &mut AppState, value: f64) {
    state.options.influence_factor = state.curve.set_influence_factor(value);
}

pub fn set_interaction_radius(state: &mut AppState, value: f64) {
    state.options.interaction_radius = state.curve.set_interaction_radius(value);
}

pub fn set_tangent_sample_density(state: &mut AppState, value: usize) {
    state.options.tangent_sample_density = state.curve.set_tangent_sample_density(value);
}

pub fn toggle_tangents(state: &mut AppState) {
    state.options.show_tangents = !state.options.show_tangents;
}

pub fn toggle_anchors(state: &mut AppState) {
    state.options.show_anchors = !state.options.show_anchors;
}
