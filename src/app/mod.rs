//! Application-Layer: Controller, State, Events, Interaktion und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
/// Zeiger-Interaktion als expliziter Zustandsautomat
pub mod interaction;
mod intent_mapping;
pub mod render_scene;
pub mod spring_curve;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use interaction::{InteractionController, InteractionPhase, InteractionState};
pub use render_scene::build as build_render_scene;
pub use spring_curve::SpringCurve;
pub use state::AppState;
