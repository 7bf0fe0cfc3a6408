//! Handler für Optionen-Persistenz und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::SimulationOptions;

/// Speichert die aktuellen Optionen in die Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.config_path)?;
    state.status_message = Some(format!("Optionen gespeichert: {}", state.config_path.display()));
    Ok(())
}

/// Setzt Optionen auf Standardwerte zurück und wendet sie auf die Kurve an.
pub fn reset_options(state: &mut AppState) {
    state.options = state.curve.apply_options(&SimulationOptions::default());
    log::info!("Optionen auf Standardwerte zurueckgesetzt");
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
