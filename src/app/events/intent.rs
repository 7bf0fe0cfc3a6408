use glam::DVec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Zeiger-Positionen sind bereits in Oberflächen-Koordinaten übersetzt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Größe der Zeichenfläche (jeden Frame gemeldet)
    ViewportResized { size: DVec2 },
    /// Zeiger bewegt
    PointerMoved { pos: DVec2 },
    /// Primärtaste gedrückt
    PointerPressed { pos: DVec2 },
    /// Primärtaste losgelassen
    PointerReleased,
    /// Zeiger hat die Zeichenfläche verlassen
    PointerLeft,

    /// Federkonstante im Einstellungs-Panel geändert
    SpringConstantChanged { value: f64 },
    /// Dämpfungsfaktor geändert
    DampingFactorChanged { value: f64 },
    /// Anker-Einfluss geändert
    InfluenceFactorChanged { value: f64 },
    /// Hit-Radius geändert
    InteractionRadiusChanged { value: f64 },
    /// Tangenten-Dichte geändert
    TangentDensityChanged { value: usize },
    /// Tangenten ein-/ausblenden
    ToggleTangents,
    /// Anker ein-/ausblenden
    ToggleAnchors,

    /// Kurve auf das Standard-Layout zurücksetzen
    ResetCurveRequested,
    /// Aktuelle Optionen speichern
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
