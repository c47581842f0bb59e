use super::{click, move_held, pointer, press, release, screen, setup};
use approx::assert_relative_eq;
use glam::Vec2;
use hermite_keyframe_editor::{AppCommand, AppIntent, InteractionState, PointerInput};

#[test]
fn test_canvas_resize_moves_plot_into_margins() {
    let (_, state) = setup();
    let mapper = state.session.mapper();

    assert_eq!(mapper.left(), state.options.plot_margin_left);
    assert_eq!(mapper.top(), state.options.plot_margin_top);
    assert_eq!(mapper.right(), 1600.0 - state.options.plot_margin_right);
    assert_eq!(mapper.bottom(), 900.0 - state.options.plot_margin_bottom);
}

#[test]
fn test_pointer_snapshots_are_not_logged() {
    let (mut controller, mut state) = setup();
    let logged = state.command_log.len();

    pointer(&mut controller, &mut state, PointerInput::at(Vec2::new(500.0, 500.0)));

    assert_eq!(state.command_log.len(), logged);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::SetCanvasRect { .. })
    ));
}

#[test]
fn test_click_on_keyframe_selects_it() {
    let (mut controller, mut state) = setup();
    let pos = screen(&state, 15.0, 0.5);

    click(&mut controller, &mut state, pos);

    let selected = state
        .session
        .selected_keyframe()
        .expect("Keyframe sollte selektiert sein");
    assert_eq!(selected.frame, 15);
    assert!(matches!(state.session.state(), InteractionState::Selected { .. }));
}

#[test]
fn test_value_drag_moves_selected_keyframe() {
    let (mut controller, mut state) = setup();
    let start = screen(&state, 15.0, 0.5);
    let target = screen(&state, 15.0, 0.8);

    press(&mut controller, &mut state, start);
    move_held(&mut controller, &mut state, start, target);
    release(&mut controller, &mut state, target);

    let kf = state
        .session
        .selected_keyframe()
        .expect("Selektion sollte den Drag überstehen");
    assert_eq!(kf.frame, 15);
    assert_relative_eq!(kf.value, 0.8, epsilon = 1e-4);
    assert!(!state.session.state().is_dragging());
}

#[test]
fn test_tangent_handle_drag_sets_slope() {
    let (mut controller, mut state) = setup();
    let pos = screen(&state, 15.0, 0.5);
    click(&mut controller, &mut state, pos);
    let key = state.session.selected().expect("selektiert");
    let (_, right) = state
        .session
        .tangent_handle_positions(key)
        .expect("Griffe sollten existieren");

    // Einen Frame nach rechts, 0.5 Einheiten nach oben
    let target = screen(&state, 16.0, 1.0);
    press(&mut controller, &mut state, right);
    assert!(matches!(
        state.session.state(),
        InteractionState::AdjustingTangent { .. }
    ));
    move_held(&mut controller, &mut state, right, target);
    release(&mut controller, &mut state, target);

    let kf = state.session.selected_keyframe().expect("selektiert");
    assert_relative_eq!(kf.slope, 0.5, epsilon = 1e-3);
    assert_relative_eq!(kf.value, 0.5, epsilon = 1e-6);
}

#[test]
fn test_cancel_intent_clears_selection() {
    let (mut controller, mut state) = setup();
    let pos = screen(&state, 15.0, 0.5);
    click(&mut controller, &mut state, pos);
    assert!(state.session.selected().is_some());

    controller
        .handle_intent(&mut state, AppIntent::CancelRequested)
        .expect("CancelRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.state(), InteractionState::Idle);
}

#[test]
fn test_shrinking_frame_count_drops_hidden_selection() {
    let (mut controller, mut state) = setup();
    let pos = screen(&state, 26.0, 0.53);
    click(&mut controller, &mut state, pos);
    assert_eq!(state.session.selected_keyframe().map(|kf| kf.frame), Some(26));

    for _ in 0..5 {
        controller
            .handle_intent(&mut state, AppIntent::DecreaseFrameCountRequested)
            .expect("Decrease sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.session.mapper().frame_count(), 25);
    assert!(state.session.selected().is_none());
    assert_eq!(state.keyframe_count(), 5);
}
