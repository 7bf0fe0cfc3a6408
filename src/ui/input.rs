//! Zeichenflächen-Input: egui-Zeigerzustand → AppIntents in Flächen-Koordinaten.

use crate::app::AppIntent;
use glam::DVec2;

/// Zeigerzustand eines Frames, bereits relativ zur Zeichenfläche.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct PointerFrame {
    /// Position relativ zur linken oberen Ecke; `None` außerhalb der Fläche
    pub local_pos: Option<DVec2>,
    pub pressed: bool,
    pub released: bool,
}

/// Merkt sich den Zeiger zwischen Frames, um Bewegung und Verlassen zu erkennen.
#[derive(Debug, Default)]
pub struct InputState {
    last_pos: Option<DVec2>,
}

/// Bildschirm-Position → Flächen-Koordinaten.
pub(crate) fn to_surface(pos: egui::Pos2, rect: egui::Rect) -> DVec2 {
    DVec2::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Zeichenflächen-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Meldet jeden Frame die Flächengröße; Zeiger-Events nur bei Änderungen.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let frame = ui.input(|i| PointerFrame {
            local_pos: i
                .pointer
                .hover_pos()
                .filter(|p| rect.contains(*p))
                .map(|p| to_surface(p, rect)),
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
        });

        let mut events = vec![AppIntent::ViewportResized {
            size: DVec2::new(rect.width() as f64, rect.height() as f64),
        }];
        events.extend(self.translate(frame));
        events
    }

    /// Übersetzt einen Zeiger-Frame in Intents (ohne egui-Kontext testbar).
    pub(crate) fn translate(&mut self, frame: PointerFrame) -> Vec<AppIntent> {
        let mut events = Vec::new();
        match frame.local_pos {
            Some(pos) => {
                if self.last_pos != Some(pos) {
                    events.push(AppIntent::PointerMoved { pos });
                }
                if frame.pressed {
                    events.push(AppIntent::PointerPressed { pos });
                }
                self.last_pos = Some(pos);
            }
            None => {
                if self.last_pos.take().is_some() {
                    events.push(AppIntent::PointerLeft);
                }
            }
        }
        if frame.released {
            events.push(AppIntent::PointerReleased);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> PointerFrame {
        PointerFrame {
            local_pos: Some(DVec2::new(x, y)),
            ..PointerFrame::default()
        }
    }

    #[test]
    fn test_to_surface_subtracts_rect_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(200.0, 30.0), egui::vec2(400.0, 300.0));
        assert_eq!(to_surface(egui::pos2(250.0, 40.0), rect), DVec2::new(50.0, 10.0));
    }

    #[test]
    fn test_move_reported_only_on_change() {
        let mut input = InputState::new();
        assert_eq!(
            input.translate(at(10.0, 10.0)),
            vec![AppIntent::PointerMoved {
                pos: DVec2::new(10.0, 10.0)
            }]
        );
        assert!(input.translate(at(10.0, 10.0)).is_empty());
    }

    #[test]
    fn test_press_and_release_sequence() {
        let mut input = InputState::new();
        input.translate(at(5.0, 5.0));

        let press = PointerFrame {
            pressed: true,
            ..at(5.0, 5.0)
        };
        assert_eq!(
            input.translate(press),
            vec![AppIntent::PointerPressed {
                pos: DVec2::new(5.0, 5.0)
            }]
        );

        let release = PointerFrame {
            released: true,
            ..at(6.0, 5.0)
        };
        assert_eq!(
            input.translate(release),
            vec![
                AppIntent::PointerMoved {
                    pos: DVec2::new(6.0, 5.0)
                },
                AppIntent::PointerReleased
            ]
        );
    }

    #[test]
    fn test_leaving_surface_reports_once() {
        let mut input = InputState::new();
        input.translate(at(1.0, 1.0));

        let outside = PointerFrame::default();
        assert_eq!(input.translate(outside), vec![AppIntent::PointerLeft]);
        assert!(input.translate(outside).is_empty());
    }

    #[test]
    fn test_press_outside_surface_is_ignored() {
        let mut input = InputState::new();
        let outside_press = PointerFrame {
            pressed: true,
            ..PointerFrame::default()
        };
        assert!(input.translate(outside_press).is_empty());
    }
}
