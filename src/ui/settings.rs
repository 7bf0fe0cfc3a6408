//! Einstellungs-Panel rechts: Feder-Parameter, Interaktion, Darstellung.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{
    DAMPING_FACTOR_MAX, DAMPING_FACTOR_MIN, INFLUENCE_FACTOR_MAX, INFLUENCE_FACTOR_MIN,
    INTERACTION_RADIUS_MAX, INTERACTION_RADIUS_MIN, SPRING_CONSTANT_MAX, SPRING_CONSTANT_MIN,
    TANGENT_SAMPLE_DENSITY_MAX, TANGENT_SAMPLE_DENSITY_MIN,
};

/// Rendert das Einstellungs-Panel und gibt erzeugte Events zurück.
pub fn render_settings_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Arbeitskopie; Änderungen gehen ausschließlich als Intent zurück
    let mut opts = state.options.clone();

    egui::SidePanel::right("settings_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Einstellungen");
            ui.separator();

            // ── Feder ───────────────────────────────────────────
            ui.label("Feder");
            if ui
                .add(
                    egui::Slider::new(
                        &mut opts.spring_constant,
                        SPRING_CONSTANT_MIN..=SPRING_CONSTANT_MAX,
                    )
                    .text("Steifigkeit k"),
                )
                .changed()
            {
                events.push(AppIntent::SpringConstantChanged {
                    value: opts.spring_constant,
                });
            }
            if ui
                .add(
                    egui::Slider::new(
                        &mut opts.damping_factor,
                        DAMPING_FACTOR_MIN..=DAMPING_FACTOR_MAX,
                    )
                    .text("Daempfung c"),
                )
                .changed()
            {
                events.push(AppIntent::DampingFactorChanged {
                    value: opts.damping_factor,
                });
            }

            ui.separator();

            // ── Interaktion ─────────────────────────────────────
            ui.label("Interaktion");
            if ui
                .add(
                    egui::Slider::new(
                        &mut opts.influence_factor,
                        INFLUENCE_FACTOR_MIN..=INFLUENCE_FACTOR_MAX,
                    )
                    .text("Einfluss"),
                )
                .changed()
            {
                events.push(AppIntent::InfluenceFactorChanged {
                    value: opts.influence_factor,
                });
            }
            if ui
                .add(
                    egui::Slider::new(
                        &mut opts.interaction_radius,
                        INTERACTION_RADIUS_MIN..=INTERACTION_RADIUS_MAX,
                    )
                    .text("Radius"),
                )
                .changed()
            {
                events.push(AppIntent::InteractionRadiusChanged {
                    value: opts.interaction_radius,
                });
            }

            ui.separator();

            // ── Darstellung ─────────────────────────────────────
            ui.label("Darstellung");
            if ui
                .add(
                    egui::Slider::new(
                        &mut opts.tangent_sample_density,
                        TANGENT_SAMPLE_DENSITY_MIN..=TANGENT_SAMPLE_DENSITY_MAX,
                    )
                    .text("Tangenten"),
                )
                .changed()
            {
                events.push(AppIntent::TangentDensityChanged {
                    value: opts.tangent_sample_density,
                });
            }
            if ui.checkbox(&mut opts.show_tangents, "Tangenten anzeigen").changed() {
                events.push(AppIntent::ToggleTangents);
            }
            if ui.checkbox(&mut opts.show_anchors, "Anker anzeigen").changed() {
                events.push(AppIntent::ToggleAnchors);
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Kurve zuruecksetzen").clicked() {
                    events.push(AppIntent::ResetCurveRequested);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
            });
        });

    events
}
