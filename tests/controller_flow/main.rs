//! Controller-Abläufe über Zeiger-Intents auf einer festen Zeichenfläche.

mod editing;
mod interaction;

use glam::Vec2;
use hermite_keyframe_editor::{AppController, AppIntent, AppState, PointerInput};

/// Zeichenfläche der Tests (entspricht der Startgröße des Fensters).
pub const CANVAS: [f32; 4] = [0.0, 0.0, 1600.0, 900.0];

/// Controller und Standard-State mit gesetzter Zeichenfläche.
pub fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::CanvasResized { canvas: CANVAS })
        .expect("CanvasResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

/// Bildschirmposition eines Kurvenpunkts.
pub fn screen(state: &AppState, frame: f32, value: f32) -> Vec2 {
    state
        .session
        .mapper()
        .coord_to_screen(Vec2::new(frame, value))
}

pub fn pointer(controller: &mut AppController, state: &mut AppState, input: PointerInput) {
    controller
        .handle_intent(state, AppIntent::PointerUpdated { input })
        .expect("PointerUpdated sollte ohne Fehler durchlaufen");
}

pub fn press(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    pointer(
        controller,
        state,
        PointerInput {
            primary_pressed: true,
            primary_down: true,
            ..PointerInput::at(pos)
        },
    );
}

pub fn move_held(controller: &mut AppController, state: &mut AppState, from: Vec2, to: Vec2) {
    pointer(
        controller,
        state,
        PointerInput {
            delta: to - from,
            primary_down: true,
            ..PointerInput::at(to)
        },
    );
}

pub fn release(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    pointer(
        controller,
        state,
        PointerInput {
            primary_released: true,
            ..PointerInput::at(pos)
        },
    );
}

pub fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    press(controller, state, pos);
    release(controller, state, pos);
}
