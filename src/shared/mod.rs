//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und die Render-Szene, die zwischen `app` und `ui`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::SimulationOptions;
pub use options::{SETTLE_EPSILON, VELOCITY_DECAY};
pub use render_scene::RenderScene;
