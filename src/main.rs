use std::time::Instant;

use decay_life::{
    Config, GameState, input, rendering::{self, GridRenderer}, ui,
};
use log::{error, info};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Decay Life".to_owned(),
        window_width: 1280,
        window_height: 800,
        high_dpi: true,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("could not build grid: {e}");
            std::process::exit(1);
        }
    };

    let Some(mut renderer) = GridRenderer::new(state.stepper.dimensions()) else {
        error!("grid is too large to display");
        std::process::exit(1);
    };

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("quit at generation {}", state.stepper.generation());
            break;
        }

        let mouse_pos = mouse_position();
        let frame_time = get_frame_time();
        let buttons = ui::create_buttons();

        // Input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);
        input::handle_camera(&mut state, frame_time);
        input::handle_mouse_stamp(&mut state, mouse_pos);

        // Simulation
        state = state.advance(frame_time);

        // Render
        let render_start = Instant::now();
        clear_background(Color::from_rgba(0, 6, 51, 255));
        renderer.upload(state.stepper.raw_buffer());
        renderer.draw(&state);
        rendering::draw_stamp_cursor(&state, mouse_pos);
        rendering::draw_controls(&state, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
