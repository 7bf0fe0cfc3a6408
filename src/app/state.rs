//! Application State — zentrale Datenhaltung.

use super::{CommandLog, SpringCurve};
use crate::core::ControlPointSet;
use crate::shared::SimulationOptions;
use glam::DVec2;
use std::path::PathBuf;

/// Gesamter Anwendungszustand eines Fensters.
pub struct AppState {
    /// Die simulierte Kurve
    pub curve: SpringCurve,
    /// Laufzeit-Optionen (spiegeln die tatsächlich übernommenen, geklemmten Werte)
    pub options: SimulationOptions,
    /// Größe der Zeichenfläche; `None` bis zur ersten Meldung
    pub viewport_size: Option<DVec2>,
    /// Ziel für `SaveOptions`/`ResetOptions`
    pub config_path: PathBuf,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
    /// Anzahl ausgeführter Simulations-Ticks
    pub tick_count: u64,
    /// Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
    /// Anwendung soll im nächsten Frame beendet werden
    pub should_exit: bool,
}

impl AppState {
    /// Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SimulationOptions::default())
    }

    /// Zustand mit vorgegebenen Optionen (werden geklemmt übernommen).
    pub fn with_options(options: SimulationOptions) -> Self {
        let mut curve = SpringCurve::new(ControlPointSet::default(), &options);
        let options = curve.apply_options(&options);
        Self {
            curve,
            options,
            viewport_size: None,
            config_path: SimulationOptions::config_path(),
            command_log: CommandLog::new(),
            tick_count: 0,
            status_message: None,
            should_exit: false,
        }
    }

    /// Standard-Kontrollpunkte für die aktuelle Flächengröße.
    pub fn default_control_points(&self) -> ControlPointSet {
        self.viewport_size
            .map(ControlPointSet::for_surface)
            .unwrap_or_default()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
