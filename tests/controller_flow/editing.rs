use super::{click, pointer, screen, setup};
use approx::assert_relative_eq;
use hermite_keyframe_editor::{AppIntent, PointerInput};

#[test]
fn test_add_keyframe_places_on_click_and_selects_it() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(&mut state, AppIntent::AddKeyframeRequested)
        .expect("AddKeyframeRequested sollte ohne Fehler durchlaufen");
    assert!(state.session.is_placing());

    let pos = screen(&state, 10.0, 1.5);
    pointer(&mut controller, &mut state, PointerInput::at(pos));
    assert!(state.session.ghost().is_some());

    click(&mut controller, &mut state, pos);

    assert_eq!(state.keyframe_count(), 6);
    let kf = state
        .session
        .selected_keyframe()
        .expect("Neuer Keyframe sollte selektiert sein");
    assert_eq!(kf.frame, 10);
    assert_relative_eq!(kf.value, 1.5, epsilon = 1e-4);
    assert_eq!(kf.slope, 0.0);
    assert!(!state.session.is_placing());

    let frames: Vec<u32> = state.session.track().iter().map(|kf| kf.frame).collect();
    assert_eq!(frames, vec![0, 4, 10, 15, 26, 30]);
}

#[test]
fn test_placing_on_occupied_frame_keeps_track_unchanged() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(&mut state, AppIntent::AddKeyframeRequested)
        .expect("AddKeyframeRequested sollte ohne Fehler durchlaufen");
    let pos = screen(&state, 15.0, 1.8);
    click(&mut controller, &mut state, pos);

    assert_eq!(state.keyframe_count(), 5);
    assert!(state.session.is_placing());
}

#[test]
fn test_secondary_click_aborts_placing() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(&mut state, AppIntent::AddKeyframeRequested)
        .expect("AddKeyframeRequested sollte ohne Fehler durchlaufen");
    let pos = screen(&state, 8.0, 1.0);
    pointer(
        &mut controller,
        &mut state,
        PointerInput {
            secondary_pressed: true,
            ..PointerInput::at(pos)
        },
    );

    assert!(!state.session.is_placing());
    assert_eq!(state.keyframe_count(), 5);
}

#[test]
fn test_delete_selected_removes_keyframe() {
    let (mut controller, mut state) = setup();
    let pos = screen(&state, 4.0, 0.53);
    click(&mut controller, &mut state, pos);

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .expect("DeleteSelectedRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.keyframe_count(), 4);
    assert!(state.session.selected().is_none());
    assert!(state.session.track().iter().all(|kf| kf.frame != 4));
}

#[test]
fn test_clear_all_empties_track_and_copy_yields_nothing() {
    let (mut controller, mut state) = setup();
    let pos = screen(&state, 0.0, 1.0);
    click(&mut controller, &mut state, pos);

    controller
        .handle_intent(&mut state, AppIntent::ClearAllRequested)
        .expect("ClearAllRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::CopyToClipboardRequested)
        .expect("CopyToClipboardRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.keyframe_count(), 0);
    assert!(state.session.selected().is_none());
    assert!(state.clipboard_text.is_none());
    assert_eq!(state.session.evaluate(12.0), 0.0);
}

#[test]
fn test_properties_edits_apply_to_selection() {
    let (mut controller, mut state) = setup();
    let pos = screen(&state, 15.0, 0.5);
    click(&mut controller, &mut state, pos);

    controller
        .handle_intent(&mut state, AppIntent::SelectedValueEdited { value: 1.25 })
        .expect("SelectedValueEdited sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::SelectedSlopeEdited { slope: 1e6 })
        .expect("SelectedSlopeEdited sollte ohne Fehler durchlaufen");

    let kf = state.session.selected_keyframe().expect("selektiert");
    assert_eq!(kf.value, 1.25);
    assert_eq!(kf.slope, state.options.max_slope);
}
