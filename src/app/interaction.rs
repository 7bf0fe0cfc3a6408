//! Zeiger-Interaktion: Zustandsautomat `Idle` ↔ `Dragging(index)`.
//!
//! Der Controller verändert nie direkt Kontrollpunkte, sondern ruft nur
//! `SpringSimulator::inject_force` auf.

use crate::core::{ControlPointSet, Point2D, SpringSimulator, DYNAMIC_INDICES};
use crate::shared::options::{
    DEFAULT_INTERACTION_RADIUS, INTERACTION_RADIUS_MAX, INTERACTION_RADIUS_MIN,
};
use glam::DVec2;

/// Phase des Zustandsautomaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// Kein Punkt gegriffen
    #[default]
    Idle,
    /// Punkt mit diesem Index wird gezogen
    Dragging(usize),
}

/// Momentaufnahme des Interaktions-Zustands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    pub active: bool,
    pub target_index: Option<usize>,
    pub pointer_position: Point2D,
}

/// Übersetzt Zeiger-Events in Kraft-Einleitungen auf die Federn.
#[derive(Debug, Clone)]
pub struct InteractionController {
    phase: InteractionPhase,
    pointer_position: Point2D,
    /// Zeiger befindet sich auf der Fläche (für Hover-Anzeige)
    pointer_inside: bool,
    radius: f64,
}

impl InteractionController {
    pub fn new(radius: f64) -> Self {
        let mut controller = Self {
            phase: InteractionPhase::Idle,
            pointer_position: DVec2::ZERO,
            pointer_inside: false,
            radius: DEFAULT_INTERACTION_RADIUS,
        };
        controller.set_interaction_radius(radius);
        controller
    }

    /// Erster dynamischer Punkt mit Abstand < Radius. Index 1 gewinnt bei Gleichstand.
    pub fn hit_test(&self, pos: Point2D, points: &ControlPointSet) -> Option<usize> {
        DYNAMIC_INDICES
            .into_iter()
            .find(|&index| points[index].distance(pos) < self.radius)
    }

    /// Zeiger gedrückt: bei Treffer `Idle → Dragging(i)` mit sofortiger Kraft.
    ///
    /// Gibt `true` zurück wenn danach ein Punkt gezogen wird.
    pub fn pointer_down(
        &mut self,
        pos: Point2D,
        points: &ControlPointSet,
        springs: &mut SpringSimulator,
    ) -> bool {
        self.pointer_position = pos;
        self.pointer_inside = true;

        if let InteractionPhase::Dragging(index) = self.phase {
            // Zweiter Down ohne Up (z.B. verlorenes Release): wie Move behandeln
            springs.inject_force(index, pos, points);
            return true;
        }

        match self.hit_test(pos, points) {
            Some(index) => {
                log::debug!("Interaktion: Idle -> Dragging({index})");
                self.phase = InteractionPhase::Dragging(index);
                springs.inject_force(index, pos, points);
                true
            }
            None => false,
        }
    }

    /// Zeiger bewegt: merkt die Position, beim Ziehen sofortige Kraft.
    pub fn pointer_move(
        &mut self,
        pos: Point2D,
        points: &ControlPointSet,
        springs: &mut SpringSimulator,
    ) {
        self.pointer_position = pos;
        self.pointer_inside = true;
        if let InteractionPhase::Dragging(index) = self.phase {
            springs.inject_force(index, pos, points);
        }
    }

    /// Zeiger losgelassen: zurück nach `Idle`.
    pub fn pointer_up(&mut self) {
        self.release("Release");
    }

    /// Zeiger hat die Fläche verlassen: zurück nach `Idle`.
    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.release("Leave");
    }

    fn release(&mut self, reason: &str) {
        if let InteractionPhase::Dragging(index) = self.phase {
            log::debug!("Interaktion: Dragging({index}) -> Idle ({reason})");
        }
        self.phase = InteractionPhase::Idle;
    }

    /// Pro Tick: hält die Feder an einem ruhenden, gedrückten Zeiger.
    pub fn reapply(&self, points: &ControlPointSet, springs: &mut SpringSimulator) {
        if let InteractionPhase::Dragging(index) = self.phase {
            springs.inject_force(index, self.pointer_position, points);
        }
    }

    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, InteractionPhase::Dragging(_))
    }

    pub fn state(&self) -> InteractionState {
        let target_index = match self.phase {
            InteractionPhase::Idle => None,
            InteractionPhase::Dragging(index) => Some(index),
        };
        InteractionState {
            active: target_index.is_some(),
            target_index,
            pointer_position: self.pointer_position,
        }
    }

    /// Zeigerposition, solange der Zeiger auf der Fläche ist.
    pub fn pointer(&self) -> Option<Point2D> {
        self.pointer_inside.then_some(self.pointer_position)
    }

    /// Punkt, der bei einem Klick an der aktuellen Position gegriffen würde.
    pub fn hovered_index(&self, points: &ControlPointSet) -> Option<usize> {
        if self.is_dragging() {
            return None;
        }
        self.pointer().and_then(|pos| self.hit_test(pos, points))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Setzt den Hit-Radius, geklemmt auf `[1, 400]`; NaN behält den alten Wert.
    pub fn set_interaction_radius(&mut self, radius: f64) -> f64 {
        if radius.is_finite() {
            self.radius = radius.clamp(INTERACTION_RADIUS_MIN, INTERACTION_RADIUS_MAX);
        } else {
            log::warn!("Interaktions-Radius: ungueltiger Wert {radius}, behalte {}", self.radius);
        }
        self.radius
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(DEFAULT_INTERACTION_RADIUS)
    }
}
