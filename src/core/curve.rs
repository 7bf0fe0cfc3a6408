//! Kubische Bézier-Kurve: Position, Ableitung, Tangenten und Abtastung.
//!
//! Öffentliche Funktionen nehmen beliebige Punkt-Slices entgegen und prüfen die
//! Länge (genau 4). Für einen bereits validierten `ControlPointSet` gibt es
//! `tangents_set` und den `SampleCache`.

use super::{ControlPointSet, CurveError, Point2D, Vector2D, CONTROL_POINT_COUNT};
use glam::DVec2;

type Quad = [Point2D; CONTROL_POINT_COUNT];

/// Abgeleiteter Tangenten-Sample: Kurvenpunkt plus normierte Richtung.
///
/// `direction` ist der Null-Vektor an stationären Stellen (keine Tangente zeichnen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentSample {
    pub t: f64,
    pub point: Point2D,
    pub direction: Vector2D,
}

fn as_quad(points: &[Point2D]) -> Result<Quad, CurveError> {
    Quad::try_from(points).map_err(|_| CurveError::InvalidControlPointCount {
        found: points.len(),
    })
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
fn cubic_point(p: &Quad, t: f64) -> Point2D {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p[0] + 3.0 * inv2 * t * p[1] + 3.0 * inv * t2 * p[2] + t2 * t * p[3]
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
fn cubic_derivative(p: &Quad, t: f64) -> Vector2D {
    let inv = 1.0 - t;
    3.0 * inv * inv * (p[1] - p[0]) + 6.0 * inv * t * (p[2] - p[1]) + 3.0 * t * t * (p[3] - p[2])
}

fn normalize_or_zero(v: Vector2D) -> Vector2D {
    let len = v.length();
    if len == 0.0 {
        DVec2::ZERO
    } else {
        v / len
    }
}

fn sample_quad(p: &Quad, count: usize) -> Vec<Point2D> {
    let n = count.max(1);
    (0..=n)
        .map(|i| cubic_point(p, i as f64 / n as f64))
        .collect()
}

fn polyline_length(samples: &[Point2D]) -> f64 {
    samples.windows(2).map(|w| w[0].distance(w[1])).sum()
}

fn tangents_quad(p: &Quad, density: usize) -> Vec<TangentSample> {
    let n = density.max(1);
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            TangentSample {
                t,
                point: cubic_point(p, t),
                direction: normalize_or_zero(cubic_derivative(p, t)),
            }
        })
        .collect()
}

/// Kurvenposition bei Parameter `t`.
///
/// Jedes reelle `t` ist erlaubt; auf der Kurve liegen nur Werte aus `[0, 1]`.
pub fn evaluate(points: &[Point2D], t: f64) -> Result<Point2D, CurveError> {
    Ok(cubic_point(&as_quad(points)?, t))
}

/// Exakte analytische Ableitung von [`evaluate`] nach `t`.
pub fn derivative(points: &[Point2D], t: f64) -> Result<Vector2D, CurveError> {
    Ok(cubic_derivative(&as_quad(points)?, t))
}

/// Normierte Ableitung; exakt `(0, 0)` wenn der Betrag der Ableitung 0 ist.
pub fn normalized_derivative(points: &[Point2D], t: f64) -> Result<Vector2D, CurveError> {
    Ok(normalize_or_zero(cubic_derivative(&as_quad(points)?, t)))
}

/// `count + 1` Punkte bei `t = i / count`.
///
/// `count == 0` wird wie `1` behandelt und liefert die beiden Endpunkte,
/// also 2 statt 1 Punkt.
pub fn sample(points: &[Point2D], count: usize) -> Result<Vec<Point2D>, CurveError> {
    Ok(sample_quad(&as_quad(points)?, count))
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
///
/// Unterschätzt die echte Bogenlänge; der Fehler sinkt mit steigendem `count`.
pub fn approximate_length(points: &[Point2D], count: usize) -> Result<f64, CurveError> {
    Ok(polyline_length(&sample_quad(&as_quad(points)?, count)))
}

/// `density + 1` Tangenten-Samples bei `t = i / density` für die Visualisierung.
pub fn tangents(points: &[Point2D], density: usize) -> Result<Vec<TangentSample>, CurveError> {
    Ok(tangents_quad(&as_quad(points)?, density))
}

/// [`tangents`] für einen validierten Satz.
pub fn tangents_set(points: &ControlPointSet, density: usize) -> Vec<TangentSample> {
    tangents_quad(points.as_array(), density)
}

/// Merkt sich die zuletzt abgetastete Polylinie.
///
/// Neu berechnet wird nur, wenn sich Punkte oder Sample-Anzahl geändert haben.
#[derive(Debug, Clone, Default)]
pub struct SampleCache {
    key: Option<(Quad, usize)>,
    samples: Vec<Point2D>,
    length: f64,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktualisiert den Cache falls nötig und liefert die Samples.
    pub fn refresh(&mut self, points: &ControlPointSet, count: usize) -> &[Point2D] {
        let key = (*points.as_array(), count);
        if self.key != Some(key) {
            self.samples = sample_quad(points.as_array(), count);
            self.length = polyline_length(&self.samples);
            self.key = Some(key);
        }
        &self.samples
    }

    /// Zuletzt berechnete Samples (leer vor dem ersten `refresh`).
    pub fn samples(&self) -> &[Point2D] {
        &self.samples
    }

    /// Polylinien-Länge der zuletzt berechneten Samples.
    pub fn length(&self) -> f64 {
        self.length
    }
}
