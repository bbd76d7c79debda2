use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::{Button, ButtonAction, grid_area_height, grid_area_width};

/// Camera pan speed in cells per second
const PAN_SPEED: f32 = 50.0;
/// Relative zoom change per second while K or J is held
const ZOOM_RATE: f32 = 0.5;
/// Relative zoom change per mouse wheel notch
const WHEEL_ZOOM: f32 = 1.1;

const PATTERN_KEYS: [KeyCode; 7] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
];

/// Process one-shot key presses functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::E, GameState::step_once),
        (KeyCode::R, GameState::reset),
        (KeyCode::C, GameState::clear),
        (KeyCode::Tab, GameState::cycle_algorithm),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Holding Q keeps stepping every frame
    let state = if is_key_down(KeyCode::Q) { state.step_once() } else { state };

    PATTERN_KEYS
        .iter()
        .enumerate()
        .fold(state, |s, (idx, key)| {
            if is_key_pressed(*key) { s.select_pattern(idx) } else { s }
        })
}

/// Pan with W/A/S/D, zoom with K/J and the mouse wheel, H to go home
pub fn handle_camera(state: &mut GameState, delta_time: f32) {
    let camera = &mut state.camera;

    let mut vel = (0.0, 0.0);
    if is_key_down(KeyCode::D) { vel.0 += 1.0; }
    if is_key_down(KeyCode::A) { vel.0 -= 1.0; }
    if is_key_down(KeyCode::S) { vel.1 += 1.0; }
    if is_key_down(KeyCode::W) { vel.1 -= 1.0; }
    if vel != (0.0, 0.0) {
        let step = PAN_SPEED * delta_time / camera.zoom;
        camera.pan(vel.0 * step, vel.1 * step);
    }

    let mut zoom = 0.0;
    if is_key_down(KeyCode::K) { zoom += 1.0; }
    if is_key_down(KeyCode::J) { zoom -= 1.0; }
    if zoom != 0.0 {
        camera.zoom_by(1.0 + zoom * ZOOM_RATE * delta_time);
    }

    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_by(WHEEL_ZOOM);
    } else if wheel < 0.0 {
        camera.zoom_by(1.0 / WHEEL_ZOOM);
    }

    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Left click on the grid stamps the selected pattern under the cursor
pub fn handle_mouse_stamp(state: &mut GameState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return;
    }
    let viewport = (grid_area_width(), grid_area_height());
    let Some((x, y)) = state.camera.screen_to_grid(mouse_pos.0, mouse_pos.1, viewport) else {
        return;
    };
    if let Ok(centre) = state.stepper.dimensions().coord(x, y) {
        state.stamp_selected(centre);
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().fold(state, |s, btn| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match btn.action {
            ButtonAction::PlayPause => s.toggle_running(),
            ButtonAction::Step => s.step_once(),
            ButtonAction::Reset => s.reset(),
            ButtonAction::Clear => s.clear(),
            ButtonAction::Algorithm => s.cycle_algorithm(),
        }
    })
}
