use glam::DVec2;

/// Mutierende Commands, die der Controller auf dem `AppState` ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neue Flächengröße übernehmen und Punkte neu auslegen
    SetViewportSize { size: DVec2 },

    // === Zeiger ===
    PointerMove { pos: DVec2 },
    PointerDown { pos: DVec2 },
    PointerUp,
    PointerLeave,

    // === Tunables ===
    SetSpringConstant { value: f64 },
    SetDampingFactor { value: f64 },
    SetInfluenceFactor { value: f64 },
    SetInteractionRadius { value: f64 },
    SetTangentSampleDensity { value: usize },
    ToggleTangents,
    ToggleAnchors,

    // === Kurve & Optionen ===
    ResetCurve,
    SaveOptions,
    ResetOptions,
    RequestExit,
}
