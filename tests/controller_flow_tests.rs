use approx::assert_relative_eq;
use glam::DVec2;
use spring_bezier::{AppCommand, AppController, AppIntent, AppState, ControlPointSet};

fn surface() -> DVec2 {
    DVec2::new(800.0, 600.0)
}

/// AppState mit gemeldeter Flächengröße 800×600.
fn make_state() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.config_path = std::env::temp_dir().join(format!(
        "spring_bezier_flow_test_{}_{}.toml",
        std::process::id(),
        rand_suffix()
    ));
    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: surface() })
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

/// Eindeutiger Dateiname je Test (Tests laufen parallel).
fn rand_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_first_resize_lays_out_points_for_surface() {
    let (_, state) = make_state();
    let expected = ControlPointSet::for_surface(surface());

    assert_eq!(*state.curve.points(), expected);
    assert_eq!(state.viewport_size, Some(surface()));
    assert_relative_eq!(state.curve.points().start().x, 80.0);
    assert_relative_eq!(state.curve.points().end().x, 720.0);
    assert_eq!(
        state.command_log.entries(),
        &[AppCommand::SetViewportSize { size: surface() }]
    );
}

#[test]
fn test_unchanged_resize_keeps_simulation_state() {
    let (mut controller, mut state) = make_state();
    let p1 = state.curve.points()[1];

    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: p1 });
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: p1 + DVec2::new(0.0, 100.0),
        },
    );
    controller.tick(&mut state);
    let moved = state.curve.points()[1];

    send(&mut controller, &mut state, AppIntent::ViewportResized { size: surface() });
    assert_eq!(state.curve.points()[1], moved);
    assert!(state.curve.interaction().is_dragging());
}

#[test]
fn test_changed_resize_relayouts_and_ends_drag() {
    let (mut controller, mut state) = make_state();
    let p2 = state.curve.points()[2];
    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: p2 });
    assert!(state.curve.interaction().is_dragging());

    let bigger = DVec2::new(1200.0, 900.0);
    send(&mut controller, &mut state, AppIntent::ViewportResized { size: bigger });

    assert_eq!(*state.curve.points(), ControlPointSet::for_surface(bigger));
    assert!(!state.curve.interaction().is_dragging());
    assert!(state.curve.is_settled());
}

#[test]
fn test_drag_flow_pulls_point_and_release_settles() {
    let (mut controller, mut state) = make_state();
    let p1 = state.curve.points()[1];
    let target = p1 + DVec2::new(40.0, 120.0);

    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: p1 });
    assert_eq!(state.curve.interaction_state().target_index, Some(1));
    assert_eq!(
        state.status_message.as_deref(),
        Some("Steuerpunkt P1 gegriffen")
    );

    send(&mut controller, &mut state, AppIntent::PointerMoved { pos: target });
    for _ in 0..200 {
        controller.tick(&mut state);
    }
    assert!(state.curve.points()[1].distance(target) < 1.0);
    assert_eq!(state.tick_count, 200);

    // Feste Punkte bewegen sich nie
    let layout = ControlPointSet::for_surface(surface());
    assert_eq!(state.curve.points().start(), layout.start());
    assert_eq!(state.curve.points().end(), layout.end());

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(!state.curve.interaction().is_dragging());
    for _ in 0..600 {
        controller.tick(&mut state);
    }
    assert!(state.curve.is_settled());
}

#[test]
fn test_press_on_empty_area_does_not_drag() {
    let (mut controller, mut state) = make_state();
    let before = *state.curve.points();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: DVec2::new(5.0, 5.0),
        },
    );
    controller.tick(&mut state);

    assert!(!state.curve.interaction().is_dragging());
    assert_eq!(*state.curve.points(), before);
    assert!(state.status_message.is_none());
}

#[test]
fn test_overlapping_radii_pick_lower_index() {
    let (mut controller, mut state) = make_state();
    send(
        &mut controller,
        &mut state,
        AppIntent::InteractionRadiusChanged { value: 400.0 },
    );

    let points = *state.curve.points();
    let midpoint = (points[1] + points[2]) * 0.5;
    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: midpoint });

    assert_eq!(state.curve.interaction_state().target_index, Some(1));
}

#[test]
fn test_pointer_left_ends_drag() {
    let (mut controller, mut state) = make_state();
    let p2 = state.curve.points()[2];
    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: p2 });
    send(&mut controller, &mut state, AppIntent::PointerLeft);

    assert!(!state.curve.interaction().is_dragging());
    assert_eq!(state.curve.interaction().pointer(), None);
    assert_eq!(state.command_log.entries().last(), Some(&AppCommand::PointerLeave));
}

#[test]
fn test_tunables_are_clamped_and_reflected_in_options() {
    let (mut controller, mut state) = make_state();

    send(&mut controller, &mut state, AppIntent::SpringConstantChanged { value: 2.0 });
    send(&mut controller, &mut state, AppIntent::DampingFactorChanged { value: 0.1 });
    send(
        &mut controller,
        &mut state,
        AppIntent::InfluenceFactorChanged { value: 0.5 },
    );
    send(&mut controller, &mut state, AppIntent::TangentDensityChanged { value: 0 });

    assert_eq!(state.options.spring_constant, 0.5);
    assert_eq!(state.curve.springs().spring_constant(), 0.5);
    assert_eq!(state.options.damping_factor, 0.7);
    assert_eq!(state.options.influence_factor, 0.5);
    assert_eq!(state.options.tangent_sample_density, 1);
    assert_eq!(state.curve.tangents().len(), 2);
}

#[test]
fn test_non_finite_tunable_keeps_current_value() {
    let (mut controller, mut state) = make_state();
    send(
        &mut controller,
        &mut state,
        AppIntent::SpringConstantChanged { value: f64::NAN },
    );
    assert_eq!(state.options.spring_constant, 0.15);
}

#[test]
fn test_render_scene_reflects_toggles() {
    let (mut controller, mut state) = make_state();

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.tangents.len(), state.options.tangent_sample_density + 1);
    assert_eq!(scene.curve.len(), state.options.curve_sample_count + 1);
    assert!(!scene.show_anchors);
    assert!(!scene.has_focus());

    send(&mut controller, &mut state, AppIntent::ToggleTangents);
    send(&mut controller, &mut state, AppIntent::ToggleAnchors);
    let scene = controller.build_render_scene(&state);
    assert!(scene.tangents.is_empty());
    assert!(scene.show_anchors);
}

#[test]
fn test_render_scene_reports_hover_and_drag() {
    let (mut controller, mut state) = make_state();
    let p2 = state.curve.points()[2];

    send(&mut controller, &mut state, AppIntent::PointerMoved { pos: p2 });
    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.hovered_index, Some(2));
    assert_eq!(scene.dragged_index, None);
    assert_eq!(scene.pointer, Some(p2));

    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: p2 });
    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.dragged_index, Some(2));
    assert_eq!(scene.hovered_index, None);
    assert!(scene.has_focus());
}

#[test]
fn test_reset_curve_restores_layout() {
    let (mut controller, mut state) = make_state();
    let p1 = state.curve.points()[1];
    send(&mut controller, &mut state, AppIntent::PointerPressed { pos: p1 });
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: DVec2::new(10.0, 10.0),
        },
    );
    for _ in 0..20 {
        controller.tick(&mut state);
    }

    send(&mut controller, &mut state, AppIntent::ResetCurveRequested);
    assert_eq!(*state.curve.points(), ControlPointSet::for_surface(surface()));
    assert!(!state.curve.interaction().is_dragging());
}

#[test]
fn test_reset_options_restores_defaults_and_saves() {
    let (mut controller, mut state) = make_state();
    send(&mut controller, &mut state, AppIntent::SpringConstantChanged { value: 0.4 });
    send(&mut controller, &mut state, AppIntent::ToggleAnchors);

    send(&mut controller, &mut state, AppIntent::ResetOptionsRequested);

    assert_eq!(state.options, spring_bezier::SimulationOptions::default());
    assert_eq!(state.curve.springs().spring_constant(), 0.15);
    let saved = spring_bezier::SimulationOptions::load_from_file(&state.config_path);
    let _ = std::fs::remove_file(&state.config_path);
    assert_eq!(saved, spring_bezier::SimulationOptions::default());

    let tail: Vec<_> = state.command_log.entries().iter().rev().take(2).collect();
    assert_eq!(tail, vec![&AppCommand::SaveOptions, &AppCommand::ResetOptions]);
}

#[test]
fn test_save_options_writes_current_values() {
    let (mut controller, mut state) = make_state();
    send(&mut controller, &mut state, AppIntent::DampingFactorChanged { value: 0.93 });
    send(&mut controller, &mut state, AppIntent::SaveOptionsRequested);

    let saved = spring_bezier::SimulationOptions::load_from_file(&state.config_path);
    let _ = std::fs::remove_file(&state.config_path);
    assert_eq!(saved.damping_factor, 0.93);
    assert!(state
        .status_message
        .as_deref()
        .is_some_and(|msg| msg.starts_with("Optionen gespeichert")));
}

#[test]
fn test_save_to_unwritable_path_reports_error() {
    let (mut controller, mut state) = make_state();
    state.config_path = std::env::temp_dir()
        .join("spring_bezier_missing_dir_9c1e")
        .join("sub")
        .join("opts.toml");

    let result = controller.handle_intent(&mut state, AppIntent::SaveOptionsRequested);
    assert!(result.is_err(), "Speichern in fehlendes Verzeichnis muss fehlschlagen");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = make_state();
    assert!(!state.should_exit);

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_handle_frame_integrates_once_per_visible_frame() {
    let (mut controller, mut state) = make_state();
    let p1 = state.curve.points()[1];
    let target = p1 + DVec2::new(0.0, 80.0);

    controller.handle_frame(
        &mut state,
        vec![
            AppIntent::PointerPressed { pos: p1 },
            AppIntent::PointerMoved { pos: target },
        ],
        true,
    );
    assert_eq!(state.tick_count, 1);
    let after_first = state.curve.points()[1];
    assert_ne!(after_first, p1, "ein Schritt muss den Punkt bewegen");

    // Verworfener Pass: Intents werden verarbeitet, integriert wird nicht
    controller.handle_frame(&mut state, vec![AppIntent::PointerReleased], false);
    assert_eq!(state.tick_count, 1);
    assert_eq!(state.curve.points()[1], after_first);
    assert!(!state.curve.interaction().is_dragging());
}

#[test]
fn test_handle_frame_keeps_going_after_failed_intent() {
    let (mut controller, mut state) = make_state();
    state.config_path = std::env::temp_dir()
        .join("spring_bezier_missing_dir_4b7d")
        .join("opts.toml");

    controller.handle_frame(
        &mut state,
        vec![AppIntent::SaveOptionsRequested, AppIntent::ExitRequested],
        true,
    );

    assert!(state.should_exit, "Intents nach einem Fehler laufen weiter");
    assert_eq!(state.tick_count, 1);
}
