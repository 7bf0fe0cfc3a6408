//! Kontrollpunkt-Satz der kubischen Kurve.
//!
//! Index 0 und 3 sind fix (Start/Ende), Index 1 und 2 sind dynamisch und werden
//! ausschließlich vom `SpringSimulator` verschoben.

use super::CurveError;
use glam::DVec2;

/// Punkt in Oberflächen-Koordinaten (f64).
pub type Point2D = DVec2;
/// Richtungs- bzw. Geschwindigkeitsvektor (f64).
pub type Vector2D = DVec2;

/// Anzahl Kontrollpunkte einer kubischen Kurve.
pub const CONTROL_POINT_COUNT: usize = 4;
/// Indizes der federgelagerten Kontrollpunkte, in Prüfreihenfolge.
pub const DYNAMIC_INDICES: [usize; DYNAMIC_POINT_COUNT] = [1, 2];
/// Anzahl federgelagerter Kontrollpunkte.
pub const DYNAMIC_POINT_COUNT: usize = 2;

/// Genau vier Kontrollpunkte: Start, CP1, CP2, Ende.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointSet {
    points: [Point2D; CONTROL_POINT_COUNT],
}

impl ControlPointSet {
    /// Erstellt einen Satz aus vier Punkten.
    pub fn new(start: Point2D, cp1: Point2D, cp2: Point2D, end: Point2D) -> Self {
        Self {
            points: [start, cp1, cp2, end],
        }
    }

    /// Standard-Layout für eine Zeichenfläche der Größe `size`.
    ///
    /// Endpunkte auf halber Höhe bei 10 % bzw. 90 % der Breite, die
    /// Steuerpunkte bei einem bzw. zwei Dritteln, gegenläufig versetzt (S-Form).
    pub fn for_surface(size: Vector2D) -> Self {
        let w = size.x.max(1.0);
        let h = size.y.max(1.0);
        let mid = h * 0.5;
        Self::new(
            DVec2::new(w * 0.1, mid),
            DVec2::new(w * (0.1 + 0.8 / 3.0), mid - h * 0.25),
            DVec2::new(w * (0.1 + 1.6 / 3.0), mid + h * 0.25),
            DVec2::new(w * 0.9, mid),
        )
    }

    /// True für die Indizes 1 und 2.
    pub fn is_dynamic(index: usize) -> bool {
        DYNAMIC_INDICES.contains(&index)
    }

    /// Punkt an `index`, `None` außerhalb von 0..4.
    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    /// Fixer Startpunkt (Index 0).
    pub fn start(&self) -> Point2D {
        self.points[0]
    }

    /// Fixer Endpunkt (Index 3).
    pub fn end(&self) -> Point2D {
        self.points[CONTROL_POINT_COUNT - 1]
    }

    pub fn as_slice(&self) -> &[Point2D] {
        &self.points
    }

    pub fn as_array(&self) -> &[Point2D; CONTROL_POINT_COUNT] {
        &self.points
    }

    /// Schreibzugriff auf einen dynamischen Punkt. Fixe Indizes liefern `None`.
    pub(crate) fn dynamic_mut(&mut self, index: usize) -> Option<&mut Point2D> {
        if Self::is_dynamic(index) {
            self.points.get_mut(index)
        } else {
            None
        }
    }
}

impl Default for ControlPointSet {
    fn default() -> Self {
        Self::new(
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 50.0),
            DVec2::new(300.0, 150.0),
            DVec2::new(400.0, 100.0),
        )
    }
}

impl TryFrom<&[Point2D]> for ControlPointSet {
    type Error = CurveError;

    fn try_from(points: &[Point2D]) -> Result<Self, Self::Error> {
        let points = <[Point2D; CONTROL_POINT_COUNT]>::try_from(points).map_err(|_| {
            CurveError::InvalidControlPointCount {
                found: points.len(),
            }
        })?;
        Ok(Self { points })
    }
}

impl std::ops::Index<usize> for ControlPointSet {
    type Output = Point2D;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
