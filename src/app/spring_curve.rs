//! Eine vollständige Kurven-Instanz: Punkte, Federn, Interaktion, Sample-Cache.
//!
//! Jede Instanz hält ihren Zustand selbst; mehrere Kurven laufen unabhängig.

use super::interaction::{InteractionController, InteractionState};
use crate::core::{
    curve, ControlPointSet, Point2D, SampleCache, SpringSimulator, TangentSample,
};
use crate::shared::options::{
    CURVE_SAMPLE_COUNT_MAX, CURVE_SAMPLE_COUNT_MIN, TANGENT_SAMPLE_DENSITY_MAX,
    TANGENT_SAMPLE_DENSITY_MIN,
};
use crate::shared::{SimulationOptions, SETTLE_EPSILON};

/// Kontrollpunkte plus die Komponenten, die sie bewegen und abtasten.
#[derive(Debug, Clone)]
pub struct SpringCurve {
    points: ControlPointSet,
    springs: SpringSimulator,
    interaction: InteractionController,
    samples: SampleCache,
    curve_sample_count: usize,
    tangent_sample_density: usize,
}

impl SpringCurve {
    /// Erstellt eine Instanz und übernimmt die Tunables aus `options`.
    pub fn new(points: ControlPointSet, options: &SimulationOptions) -> Self {
        let mut curve = Self {
            points,
            springs: SpringSimulator::new(),
            interaction: InteractionController::new(options.interaction_radius),
            samples: SampleCache::new(),
            curve_sample_count: options.curve_sample_count,
            tangent_sample_density: options.tangent_sample_density,
        };
        curve.apply_options(options);
        curve.install(points);
        curve
    }

    /// Übernimmt einen neuen Satz und setzt das Feder-Gedächtnis zurück.
    pub fn install(&mut self, points: ControlPointSet) {
        log::debug!("Neuer Kontrollpunkt-Satz: {:?}", points.as_slice());
        self.points = points;
        self.springs.initialize(&self.points);
        self.interaction.pointer_up();
        self.refresh_samples();
    }

    /// Wendet alle Tunables an (geklemmt) und gibt die übernommenen Werte zurück.
    pub fn apply_options(&mut self, options: &SimulationOptions) -> SimulationOptions {
        SimulationOptions {
            spring_constant: self.springs.set_spring_constant(options.spring_constant),
            damping_factor: self.springs.set_damping_factor(options.damping_factor),
            influence_factor: self.springs.set_influence_factor(options.influence_factor),
            interaction_radius: self
                .interaction
                .set_interaction_radius(options.interaction_radius),
            tangent_sample_density: self
                .set_tangent_sample_density(options.tangent_sample_density),
            curve_sample_count: self.set_curve_sample_count(options.curve_sample_count),
            ..options.clone()
        }
    }

    /// Ein Frame: Kraft am gehaltenen Zeiger erneuern, integrieren, neu abtasten.
    pub fn tick(&mut self) {
        self.interaction.reapply(&self.points, &mut self.springs);
        self.springs.step(&mut self.points);
        self.refresh_samples();
    }

    fn refresh_samples(&mut self) {
        self.samples.refresh(&self.points, self.curve_sample_count);
    }

    // ── Zeiger ──────────────────────────────────────────────────

    pub fn pointer_down(&mut self, pos: Point2D) -> bool {
        self.interaction
            .pointer_down(pos, &self.points, &mut self.springs)
    }

    pub fn pointer_move(&mut self, pos: Point2D) {
        self.interaction
            .pointer_move(pos, &self.points, &mut self.springs);
    }

    pub fn pointer_up(&mut self) {
        self.interaction.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    // ── Tunables ────────────────────────────────────────────────

    pub fn set_spring_constant(&mut self, k: f64) -> f64 {
        self.springs.set_spring_constant(k)
    }

    pub fn set_damping_factor(&mut self, c: f64) -> f64 {
        self.springs.set_damping_factor(c)
    }

    pub fn set_influence_factor(&mut self, influence: f64) -> f64 {
        self.springs.set_influence_factor(influence)
    }

    pub fn set_interaction_radius(&mut self, radius: f64) -> f64 {
        self.interaction.set_interaction_radius(radius)
    }

    /// Setzt die Tangenten-Dichte, geklemmt auf `[1, 64]`.
    pub fn set_tangent_sample_density(&mut self, density: usize) -> usize {
        self.tangent_sample_density =
            density.clamp(TANGENT_SAMPLE_DENSITY_MIN, TANGENT_SAMPLE_DENSITY_MAX);
        self.tangent_sample_density
    }

    /// Setzt die Polylinien-Auflösung, geklemmt auf `[8, 1000]`.
    pub fn set_curve_sample_count(&mut self, count: usize) -> usize {
        self.curve_sample_count = count.clamp(CURVE_SAMPLE_COUNT_MIN, CURVE_SAMPLE_COUNT_MAX);
        self.refresh_samples();
        self.curve_sample_count
    }

    // ── Lesezugriff ─────────────────────────────────────────────

    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    pub fn springs(&self) -> &SpringSimulator {
        &self.springs
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    /// Polylinie der aktuellen Kurve.
    pub fn samples(&self) -> &[Point2D] {
        self.samples.samples()
    }

    pub fn length(&self) -> f64 {
        self.samples.length()
    }

    /// Tangenten-Samples in der eingestellten Dichte.
    pub fn tangents(&self) -> Vec<TangentSample> {
        curve::tangents_set(&self.points, self.tangent_sample_density)
    }

    pub fn tangent_sample_density(&self) -> usize {
        self.tangent_sample_density
    }

    pub fn curve_sample_count(&self) -> usize {
        self.curve_sample_count
    }

    /// True wenn kein Punkt gezogen wird und die Federn zur Ruhe gekommen sind.
    pub fn is_settled(&self) -> bool {
        !self.interaction.is_dragging() && self.springs.is_settled(&self.points, SETTLE_EPSILON)
    }
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::new(ControlPointSet::default(), &SimulationOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_new_installs_points_and_samples() {
        let curve = SpringCurve::default();
        assert_eq!(*curve.points(), ControlPointSet::default());
        assert_eq!(curve.samples().len(), curve.curve_sample_count() + 1);
        assert_eq!(curve.samples()[0], curve.points().start());
        assert!(curve.length() > 0.0);
        assert!(curve.is_settled());
    }

    #[test]
    fn test_held_pointer_keeps_pulling_every_tick() {
        let mut curve = SpringCurve::default();
        let start = curve.points()[1];
        let held = start + DVec2::new(0.0, 60.0);

        assert!(curve.pointer_down(held));
        for _ in 0..300 {
            curve.tick();
        }
        // Anker konvergiert gegen den gehaltenen Zeiger, der Punkt folgt
        let anchor = curve.springs().state(1).unwrap().anchor;
        assert!(anchor.distance(held) < 1e-6);
        assert!(curve.points()[1].distance(held) < 1.0);
        assert!(!curve.is_settled());

        curve.pointer_up();
        for _ in 0..500 {
            curve.tick();
        }
        assert!(curve.is_settled());
        // Nach dem Loslassen bleibt der Punkt am zuletzt gehaltenen Anker
        assert!(curve.points()[1].distance(held) < 1e-2);
    }

    #[test]
    fn test_tick_refreshes_samples() {
        let mut curve = SpringCurve::default();
        let before = curve.samples().to_vec();
        curve.pointer_down(curve.points()[2]);
        curve.pointer_move(DVec2::new(300.0, 400.0));
        curve.tick();
        assert_ne!(curve.samples(), &before[..]);
        assert_eq!(
            curve.samples(),
            &curve::sample(curve.points().as_slice(), curve.curve_sample_count()).unwrap()[..]
        );
    }

    #[test]
    fn test_install_resets_springs_and_drag() {
        let mut curve = SpringCurve::default();
        curve.pointer_down(curve.points()[1]);
        curve.pointer_move(DVec2::new(0.0, 0.0));
        curve.tick();

        let fresh = ControlPointSet::for_surface(DVec2::new(800.0, 600.0));
        curve.install(fresh);
        assert_eq!(*curve.points(), fresh);
        assert!(!curve.interaction().is_dragging());
        assert_eq!(curve.springs().state(1).unwrap().anchor, fresh[1]);
        assert_eq!(curve.springs().state(1).unwrap().velocity, DVec2::ZERO);
    }

    #[test]
    fn test_apply_options_reports_clamped_values() {
        let mut curve = SpringCurve::default();
        let requested = SimulationOptions {
            spring_constant: 9.0,
            tangent_sample_density: 500,
            interaction_radius: 0.5,
            ..SimulationOptions::default()
        };
        let applied = curve.apply_options(&requested);
        assert_eq!(applied.spring_constant, 0.5);
        assert_eq!(applied.tangent_sample_density, 64);
        assert_eq!(applied.interaction_radius, 1.0);
        assert_eq!(curve.tangents().len(), 65);
    }
}
