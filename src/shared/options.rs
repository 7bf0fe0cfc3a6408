//! Zentrale Konfiguration für Spring-Bezier.
//!
//! `SimulationOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default bzw. Wertebereich erhalten.

use serde::{Deserialize, Serialize};

// ── Feder & Kraft-Einleitung (definiert in der Physik) ─────────────

pub use crate::core::spring::{
    CONTACT_KICK, DAMPING_FACTOR_MAX, DAMPING_FACTOR_MIN, DEFAULT_DAMPING_FACTOR,
    DEFAULT_INFLUENCE_FACTOR, DEFAULT_SPRING_CONSTANT, INFLUENCE_FACTOR_MAX, INFLUENCE_FACTOR_MIN,
    SPRING_CONSTANT_MAX, SPRING_CONSTANT_MIN, VELOCITY_DECAY,
};

// ── Interaktion ─────────────────────────────────────────────────────

/// Hit-Radius um dynamische Punkte (Oberflächen-Einheiten).
pub const DEFAULT_INTERACTION_RADIUS: f64 = 80.0;
pub const INTERACTION_RADIUS_MIN: f64 = 1.0;
pub const INTERACTION_RADIUS_MAX: f64 = 400.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Anzahl Tangenten-Intervalle entlang der Kurve (ergibt n + 1 Pfeile).
pub const DEFAULT_TANGENT_SAMPLE_DENSITY: usize = 10;
pub const TANGENT_SAMPLE_DENSITY_MIN: usize = 1;
pub const TANGENT_SAMPLE_DENSITY_MAX: usize = 64;

/// Polylinien-Segmente für die Kurvendarstellung.
pub const DEFAULT_CURVE_SAMPLE_COUNT: usize = 100;
pub const CURVE_SAMPLE_COUNT_MIN: usize = 8;
pub const CURVE_SAMPLE_COUNT_MAX: usize = 1000;

/// Schwelle, unter der die Simulation als ruhend gilt (kein Repaint nötig).
pub const SETTLE_EPSILON: f64 = 1e-3;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Simulations-Optionen.
/// Wird als `spring_bezier.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    // ── Feder ───────────────────────────────────────────────────
    /// Federkonstante k
    pub spring_constant: f64,
    /// Dämpfungsfaktor c
    pub damping_factor: f64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Anker-Einfluss pro Kraft-Einleitung
    pub influence_factor: f64,
    /// Hit-Radius für das Greifen eines Steuerpunkts
    pub interaction_radius: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Tangenten-Intervalle entlang der Kurve
    pub tangent_sample_density: usize,
    /// Polylinien-Segmente der Kurve
    pub curve_sample_count: usize,
    /// Tangenten-Pfeile zeichnen
    pub show_tangents: bool,
    /// Anker der Federn zeichnen
    pub show_anchors: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            spring_constant: DEFAULT_SPRING_CONSTANT,
            damping_factor: DEFAULT_DAMPING_FACTOR,
            influence_factor: DEFAULT_INFLUENCE_FACTOR,
            interaction_radius: DEFAULT_INTERACTION_RADIUS,
            tangent_sample_density: DEFAULT_TANGENT_SAMPLE_DENSITY,
            curve_sample_count: DEFAULT_CURVE_SAMPLE_COUNT,
            show_tangents: true,
            show_anchors: false,
        }
    }
}

/// Wie `f64::clamp`, aber nicht-endliche Werte fallen auf `fallback` zurück.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

impl SimulationOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    ///
    /// Geladene Werte werden auf ihre Wertebereiche geklemmt.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.clamped()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spring_bezier"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spring_bezier.toml")
    }

    /// Kopie mit allen Werten in ihren zulässigen Bereichen.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            spring_constant: clamp_or(
                self.spring_constant,
                SPRING_CONSTANT_MIN,
                SPRING_CONSTANT_MAX,
                defaults.spring_constant,
            ),
            damping_factor: clamp_or(
                self.damping_factor,
                DAMPING_FACTOR_MIN,
                DAMPING_FACTOR_MAX,
                defaults.damping_factor,
            ),
            influence_factor: clamp_or(
                self.influence_factor,
                INFLUENCE_FACTOR_MIN,
                INFLUENCE_FACTOR_MAX,
                defaults.influence_factor,
            ),
            interaction_radius: clamp_or(
                self.interaction_radius,
                INTERACTION_RADIUS_MIN,
                INTERACTION_RADIUS_MAX,
                defaults.interaction_radius,
            ),
            tangent_sample_density: self
                .tangent_sample_density
                .clamp(TANGENT_SAMPLE_DENSITY_MIN, TANGENT_SAMPLE_DENSITY_MAX),
            curve_sample_count: self
                .curve_sample_count
                .clamp(CURVE_SAMPLE_COUNT_MIN, CURVE_SAMPLE_COUNT_MAX),
            show_tangents: self.show_tangents,
            show_anchors: self.show_anchors,
        }
    }
}
