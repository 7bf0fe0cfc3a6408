//! Fehlertypen der Kurven-Mathematik.

use thiserror::Error;

/// Fehler bei Kurvenoperationen.
///
/// Einziger Fehlerfall: ein Kontrollpunkt-Satz mit falscher Länge. Alle anderen
/// Randfälle (ungültige Indizes, degenerierte Tangenten) sind als No-op bzw.
/// Null-Vektor definiert und kein Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Kubische Kurven brauchen genau 4 Kontrollpunkte.
    #[error("ungueltige Anzahl Kontrollpunkte: {found} (erwartet 4)")]
    InvalidControlPointCount {
        /// Tatsaechlich uebergebene Anzahl
        found: usize,
    },
}
