//! UI-Komponenten: Zeichenfläche, Einstellungs-Panel, Status-Bar, Input-Handling.

/// Zeichnet eine RenderScene mit dem egui-Painter
pub mod canvas;
pub mod input;
pub mod settings;
pub mod status;

pub use canvas::paint_scene;
pub use input::InputState;
pub use settings::render_settings_panel;
pub use status::render_status_bar;
