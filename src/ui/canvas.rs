//! Zeichenfläche: malt eine `RenderScene` mit dem egui-Painter.

use crate::core::{Point2D, DYNAMIC_INDICES};
use crate::shared::RenderScene;
use egui::{Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, Vec2};

const BACKGROUND: Color32 = Color32::from_rgb(24, 26, 30);
const CURVE_COLOR: Color32 = Color32::from_rgb(90, 170, 255);
const POLYGON_COLOR: Color32 = Color32::from_gray(110);
const TANGENT_COLOR: Color32 = Color32::from_rgb(255, 170, 60);
const FIXED_POINT_COLOR: Color32 = Color32::from_gray(200);
const DYNAMIC_POINT_COLOR: Color32 = Color32::from_rgb(120, 220, 140);
const ACTIVE_POINT_COLOR: Color32 = Color32::from_rgb(255, 90, 90);
const POINTER_COLOR: Color32 = Color32::from_gray(160);
const ANCHOR_COLOR: Color32 = Color32::from_rgb(200, 120, 255);
const LABEL_COLOR: Color32 = Color32::from_gray(220);

const CURVE_WIDTH: f32 = 2.5;
const TANGENT_LENGTH: f32 = 28.0;
const FIXED_POINT_RADIUS: f32 = 5.0;
const DYNAMIC_POINT_RADIUS: f32 = 7.0;
const ANCHOR_SIZE: f32 = 4.0;
const POINTER_MARKER_RADIUS: f32 = 3.0;

/// Flächen-Koordinaten → Bildschirm-Position.
fn to_screen(rect: Rect, p: Point2D) -> Pos2 {
    rect.min + Vec2::new(p.x as f32, p.y as f32)
}

/// Zeichnet einen Frame: Hintergrund, Kontrollpolygon, Kurve, Tangenten, Punkte.
pub fn paint_scene(painter: &egui::Painter, rect: Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let control: Vec<Pos2> = scene
        .control_points
        .iter()
        .map(|&p| to_screen(rect, p))
        .collect();
    painter.extend(Shape::dashed_line(
        &control,
        Stroke::new(1.0, POLYGON_COLOR),
        6.0,
        4.0,
    ));

    if scene.curve.len() >= 2 {
        let polyline: Vec<Pos2> = scene.curve.iter().map(|&p| to_screen(rect, p)).collect();
        painter.add(Shape::line(polyline, Stroke::new(CURVE_WIDTH, CURVE_COLOR)));
    }

    let tangent_stroke = Stroke::new(1.5, TANGENT_COLOR);
    for sample in &scene.tangents {
        // Entartete Stellen haben keine Richtung
        if sample.direction == Point2D::ZERO {
            continue;
        }
        let dir = Vec2::new(sample.direction.x as f32, sample.direction.y as f32);
        painter.arrow(to_screen(rect, sample.point), dir * TANGENT_LENGTH, tangent_stroke);
    }

    if scene.show_anchors {
        paint_anchors(painter, rect, scene);
    }

    if let Some((index, color)) = focus_ring(scene) {
        painter.circle_stroke(
            control[index],
            scene.interaction_radius as f32,
            Stroke::new(1.0, color.gamma_multiply(0.5)),
        );
    }

    for (index, &pos) in control.iter().enumerate() {
        if !DYNAMIC_INDICES.contains(&index) {
            painter.circle_filled(pos, FIXED_POINT_RADIUS, FIXED_POINT_COLOR);
        } else {
            let color = if scene.dragged_index == Some(index) {
                ACTIVE_POINT_COLOR
            } else {
                DYNAMIC_POINT_COLOR
            };
            painter.circle_filled(pos, DYNAMIC_POINT_RADIUS, color);
            painter.circle_stroke(pos, DYNAMIC_POINT_RADIUS + 2.0, Stroke::new(1.0, color));
        }
        painter.text(
            pos + Vec2::new(10.0, -10.0),
            Align2::LEFT_BOTTOM,
            format!("P{index}"),
            FontId::monospace(12.0),
            LABEL_COLOR,
        );
    }

    if let Some(pos) = pointer_marker(rect, scene) {
        painter.circle_stroke(pos, POINTER_MARKER_RADIUS, Stroke::new(1.0, POINTER_COLOR));
    }

    painter.text(
        rect.left_bottom() + Vec2::new(8.0, -8.0),
        Align2::LEFT_BOTTOM,
        format!("Laenge: {:.1}", scene.curve_length),
        FontId::monospace(12.0),
        LABEL_COLOR,
    );
}

/// Punkt und Farbe für den Hit-Radius-Ring; nur wenn etwas im Fokus ist.
fn focus_ring(scene: &RenderScene) -> Option<(usize, Color32)> {
    if !scene.has_focus() {
        return None;
    }
    match scene.dragged_index {
        Some(index) => Some((index, ACTIVE_POINT_COLOR)),
        None => scene.hovered_index.map(|index| (index, DYNAMIC_POINT_COLOR)),
    }
}

/// Bildschirm-Position der Zeiger-Markierung (nur solange der Zeiger auf der Fläche ist).
fn pointer_marker(rect: Rect, scene: &RenderScene) -> Option<Pos2> {
    scene.pointer.map(|p| to_screen(rect, p))
}

/// Anker als Kreuz mit Verbindungslinie zum federnden Punkt.
fn paint_anchors(painter: &egui::Painter, rect: Rect, scene: &RenderScene) {
    let stroke = Stroke::new(1.0, ANCHOR_COLOR);
    for (&anchor, index) in scene.anchors.iter().zip(DYNAMIC_INDICES) {
        let a = to_screen(rect, anchor);
        let p = to_screen(rect, scene.control_points[index]);
        painter.line_segment([a, p], stroke);
        painter.line_segment(
            [a - Vec2::splat(ANCHOR_SIZE), a + Vec2::splat(ANCHOR_SIZE)],
            stroke,
        );
        painter.line_segment(
            [
                a + Vec2::new(-ANCHOR_SIZE, ANCHOR_SIZE),
                a + Vec2::new(ANCHOR_SIZE, -ANCHOR_SIZE),
            ],
            stroke,
        );
    }
}
