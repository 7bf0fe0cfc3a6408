//! Render-Szene als expliziter Übergabevertrag zwischen App und Zeichenfläche.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use crate::core::{Point2D, TangentSample, CONTROL_POINT_COUNT, DYNAMIC_POINT_COUNT};

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktuelle Kontrollpunkte (0 und 3 fix, 1 und 2 federnd)
    pub control_points: [Point2D; CONTROL_POINT_COUNT],
    /// Anker der Federn für Index 1 und 2
    pub anchors: [Point2D; DYNAMIC_POINT_COUNT],
    /// Abgetastete Kurve als Polylinie
    pub curve: Vec<Point2D>,
    /// Tangenten-Samples (leer wenn ausgeblendet)
    pub tangents: Vec<TangentSample>,
    /// Polylinien-Länge der Kurve
    pub curve_length: f64,
    /// Gerade gezogener Punkt
    pub dragged_index: Option<usize>,
    /// Punkt unter dem Zeiger (innerhalb des Hit-Radius)
    pub hovered_index: Option<usize>,
    /// Letzte bekannte Zeigerposition auf der Fläche
    pub pointer: Option<Point2D>,
    /// Hit-Radius für die Hervorhebung
    pub interaction_radius: f64,
    /// Anker zeichnen
    pub show_anchors: bool,
}

impl RenderScene {
    /// True wenn ein Punkt gezogen oder überfahren wird.
    pub fn has_focus(&self) -> bool {
        self.dragged_index.is_some() || self.hovered_index.is_some()
    }
}
