mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_SPACING: f32 = 44.0;
const BUTTONS_TOP: f32 = 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Y position just below the last button, where the info text starts
pub fn info_top() -> f32 {
    BUTTONS_TOP + BUTTON_SPACING * ButtonAction::ALL.len() as f32 + 10.0
}

/// Panel buttons stacked from the top, one per action
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    ButtonAction::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            Button::new(
                px + 10.0,
                BUTTONS_TOP + BUTTON_SPACING * i as f32,
                PANEL_WIDTH - 20.0,
                BUTTON_HEIGHT,
                action,
            )
        })
        .collect()
}
