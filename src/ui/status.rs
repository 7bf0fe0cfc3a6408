//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let interaction = state.curve.interaction_state();
            match interaction.target_index {
                Some(index) => ui.label(format!("Ziehe P{index}")),
                None => ui.label("Bereit"),
            };

            ui.separator();

            ui.label(format!(
                "Zeiger: ({:.0}, {:.0})",
                interaction.pointer_position.x, interaction.pointer_position.y
            ));

            ui.separator();

            ui.label(format!("Laenge: {:.1}", state.curve.length()));

            ui.separator();

            if state.curve.is_settled() {
                ui.label("Ruhe");
            } else {
                ui.label(format!("Tick {}", state.tick_count));
            }

            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
