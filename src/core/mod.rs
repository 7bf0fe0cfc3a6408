//! Core-Domäne: Kontrollpunkte, Kurven-Mathematik und Feder-Simulation.
//!
//! Keine UI-Abhängigkeiten; alles hier ist ohne Zeichenfläche testbar.

pub mod control_points;
/// Kubische Bézier-Kurve
///
/// Position, exakte Ableitung, Tangenten, Abtastung und Polylinien-Länge.
pub mod curve;
pub mod error;
pub mod spring;

pub use control_points::{
    ControlPointSet, Point2D, Vector2D, CONTROL_POINT_COUNT, DYNAMIC_INDICES, DYNAMIC_POINT_COUNT,
};
pub use curve::{SampleCache, TangentSample};
pub use error::CurveError;
pub use spring::{SpringSimulator, SpringState};
