//! Spring-Bezier Library.
//! Kurven-Mathematik, Feder-Simulation und App-Layer als Library exportiert für Tests.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InteractionController, InteractionPhase,
    InteractionState, SpringCurve,
};
pub use core::curve;
pub use core::{
    ControlPointSet, CurveError, Point2D, SampleCache, SpringSimulator, SpringState,
    TangentSample, Vector2D,
};
pub use shared::{RenderScene, SimulationOptions};
