//! Feder-Dämpfer-Simulation der beiden dynamischen Kontrollpunkte.
//!
//! Pro Punkt (Index 1 und 2) gibt es eine Geschwindigkeit und einen Anker.
//! Der Anker ist das Ziel der Feder; Interaktion verschiebt nur den Anker
//! (und gibt einen Geschwindigkeits-Impuls), niemals direkt die Position.
//!
//! Integration: explizites Euler mit Einheits-Zeitschritt und Masse 1.
//! Ein `step` entspricht genau einer Zeiteinheit (ein Frame).

use super::{ControlPointSet, Point2D, Vector2D, DYNAMIC_INDICES, DYNAMIC_POINT_COUNT};
use glam::DVec2;

/// Standard-Federkonstante k.
pub const DEFAULT_SPRING_CONSTANT: f64 = 0.15;
/// Kleinste zulässige Federkonstante.
pub const SPRING_CONSTANT_MIN: f64 = 0.01;
/// Größte zulässige Federkonstante.
pub const SPRING_CONSTANT_MAX: f64 = 0.5;

/// Standard-Dämpfungsfaktor c.
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.88;
/// Kleinster zulässiger Dämpfungsfaktor.
pub const DAMPING_FACTOR_MIN: f64 = 0.7;
/// Größter zulässiger Dämpfungsfaktor.
pub const DAMPING_FACTOR_MAX: f64 = 0.99;

/// Multiplikativer Geschwindigkeits-Abfall pro Schritt (nach der Integration).
pub const VELOCITY_DECAY: f64 = 0.995;

/// Anteil, um den der Anker pro Kraft-Einleitung Richtung Ziel wandert.
pub const DEFAULT_INFLUENCE_FACTOR: f64 = 0.8;
pub const INFLUENCE_FACTOR_MIN: f64 = 0.0;
pub const INFLUENCE_FACTOR_MAX: f64 = 1.0;
/// Geschwindigkeits-Impuls beim Kontakt: `v += CONTACT_KICK · (Ziel - P)`.
pub const CONTACT_KICK: f64 = 0.1;

/// Feder-Zustand eines dynamischen Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    /// Aktuelle Geschwindigkeit (Einheiten pro Schritt)
    pub velocity: Vector2D,
    /// Ruhelage, zu der die Feder zieht
    pub anchor: Point2D,
}

/// Simuliert die Kontrollpunkte 1 und 2 als gedämpfte Federn.
#[derive(Debug, Clone)]
pub struct SpringSimulator {
    states: [SpringState; DYNAMIC_POINT_COUNT],
    spring_constant: f64,
    damping_factor: f64,
    influence_factor: f64,
}

/// Slot im Zustands-Array für einen Kontrollpunkt-Index.
fn slot(index: usize) -> Option<usize> {
    DYNAMIC_INDICES.iter().position(|&i| i == index)
}

/// Klemmt `value` auf `[min, max]`; nicht-endliche Werte behalten `current`.
fn clamp_tunable(name: &str, value: f64, current: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("{name}: ungueltiger Wert {value}, behalte {current}");
        return current;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::debug!("{name}: {value} auf {clamped} geklemmt");
    }
    clamped
}

impl SpringSimulator {
    /// Erstellt einen Simulator mit Standard-Parametern und leerem Zustand.
    ///
    /// Vor dem ersten `step` muss `initialize` mit dem aktiven Satz laufen.
    pub fn new() -> Self {
        Self {
            states: [SpringState::default(); DYNAMIC_POINT_COUNT],
            spring_constant: DEFAULT_SPRING_CONSTANT,
            damping_factor: DEFAULT_DAMPING_FACTOR,
            influence_factor: DEFAULT_INFLUENCE_FACTOR,
        }
    }

    /// Setzt die Federn auf den übergebenen Satz zurück: Anker = aktuelle
    /// Position, Geschwindigkeit = 0.
    pub fn initialize(&mut self, points: &ControlPointSet) {
        for (state, &index) in self.states.iter_mut().zip(DYNAMIC_INDICES.iter()) {
            *state = SpringState {
                velocity: DVec2::ZERO,
                anchor: points[index],
            };
        }
    }

    /// Ein Integrationsschritt für beide dynamischen Punkte.
    ///
    /// `a = -k·(P - Anker) - c·v`, dann `v += a`, `P += v`, `v *= 0.995`.
    pub fn step(&mut self, points: &mut ControlPointSet) {
        let k = self.spring_constant;
        let c = self.damping_factor;
        for (state, &index) in self.states.iter_mut().zip(DYNAMIC_INDICES.iter()) {
            let Some(position) = points.dynamic_mut(index) else {
                continue;
            };
            let displacement = *position - state.anchor;
            let acceleration = -k * displacement - c * state.velocity;
            state.velocity += acceleration;
            *position += state.velocity;
            state.velocity *= VELOCITY_DECAY;
        }
    }

    /// Zieht den Anker von `index` in Richtung `target` und gibt einen
    /// Geschwindigkeits-Impuls. Indizes außerhalb von {1, 2} werden ignoriert.
    ///
    /// - Anker: `a += influence · (target - a)` (weiche Leine, kein Teleport)
    /// - Impuls: `v += 0.1 · (target - P)` für sofortige Reaktion im ersten Frame
    pub fn inject_force(&mut self, index: usize, target: Point2D, points: &ControlPointSet) {
        let (Some(s), Some(position)) = (slot(index), points.get(index)) else {
            return;
        };
        let influence = self.influence_factor;
        let state = &mut self.states[s];
        state.anchor += influence * (target - state.anchor);
        state.velocity += CONTACT_KICK * (target - position);
    }

    /// Setzt nur die Geschwindigkeit von `index` auf 0; der Anker bleibt.
    pub fn reset_velocity(&mut self, index: usize) {
        if let Some(s) = slot(index) {
            self.states[s].velocity = DVec2::ZERO;
        }
    }

    /// Feder-Zustand für Index 1 oder 2.
    pub fn state(&self, index: usize) -> Option<&SpringState> {
        slot(index).map(|s| &self.states[s])
    }

    /// Anker beider dynamischer Punkte in Index-Reihenfolge.
    pub fn anchors(&self) -> [Point2D; DYNAMIC_POINT_COUNT] {
        self.states.map(|s| s.anchor)
    }

    /// True wenn Auslenkung und Geschwindigkeit beider Punkte unter `epsilon` liegen.
    pub fn is_settled(&self, points: &ControlPointSet, epsilon: f64) -> bool {
        self.states
            .iter()
            .zip(DYNAMIC_INDICES.iter())
            .all(|(state, &index)| {
                state.velocity.length() < epsilon
                    && points[index].distance(state.anchor) < epsilon
            })
    }

    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }

    pub fn damping_factor(&self) -> f64 {
        self.damping_factor
    }

    pub fn influence_factor(&self) -> f64 {
        self.influence_factor
    }

    /// Setzt die Federkonstante, geklemmt auf `[0.01, 0.5]`. Gibt den
    /// übernommenen Wert zurück.
    pub fn set_spring_constant(&mut self, k: f64) -> f64 {
        self.spring_constant = clamp_tunable(
            "Federkonstante",
            k,
            self.spring_constant,
            SPRING_CONSTANT_MIN,
            SPRING_CONSTANT_MAX,
        );
        self.spring_constant
    }

    /// Setzt den Dämpfungsfaktor, geklemmt auf `[0.7, 0.99]`.
    pub fn set_damping_factor(&mut self, c: f64) -> f64 {
        self.damping_factor = clamp_tunable(
            "Daempfung",
            c,
            self.damping_factor,
            DAMPING_FACTOR_MIN,
            DAMPING_FACTOR_MAX,
        );
        self.damping_factor
    }

    /// Setzt den Anker-Einfluss der Interaktion, geklemmt auf `[0, 1]`.
    pub fn set_influence_factor(&mut self, influence: f64) -> f64 {
        self.influence_factor = clamp_tunable(
            "Einfluss",
            influence,
            self.influence_factor,
            INFLUENCE_FACTOR_MIN,
            INFLUENCE_FACTOR_MAX,
        );
        self.influence_factor
    }
}

impl Default for SpringSimulator {
    fn default() -> Self {
        Self::new()
    }
}
