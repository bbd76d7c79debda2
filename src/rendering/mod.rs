use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{Cell, Dimensions};
use crate::ui::{Button, grid_area_height, grid_area_width, info_top, panel_x, PANEL_WIDTH};

const LIVE_COLOR: [u8; 4] = [0, 255, 150, 255];
const BACKGROUND: [u8; 4] = [0, 6, 51, 255];

/// Colour of one raw cell value: live cells are bright, decaying cells fade
/// linearly towards the background as their counter climbs to zero.
pub fn cell_color(raw: i8) -> [u8; 4] {
    let Some(cell) = Cell::from_raw(raw) else {
        return BACKGROUND;
    };
    if cell.is_alive() {
        return LIVE_COLOR;
    }
    let t = cell.decay_remaining() as f32 / Cell::DECAY_START.decay_remaining() as f32;
    let mut out = BACKGROUND;
    for ((o, &live), &bg) in out.iter_mut().zip(&LIVE_COLOR).zip(&BACKGROUND).take(3) {
        *o = (bg as f32 + (live as f32 - bg as f32) * t) as u8;
    }
    out
}

/// Uploads the current generation's raw buffer into a texture each frame
pub struct GridRenderer {
    image: Image,
    texture: Texture2D,
}

impl GridRenderer {
    /// `None` if either side does not fit a texture dimension
    pub fn new(dims: Dimensions) -> Option<Self> {
        let width = u16::try_from(dims.width()).ok()?;
        let height = u16::try_from(dims.height()).ok()?;
        let image = Image::gen_image_color(width, height, Color::from_rgba(0, 6, 51, 255));
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Some(Self { image, texture })
    }

    /// Copy `raw` (row-major cell bytes) into the texture
    pub fn upload(&mut self, raw: &[i8]) {
        self.image
            .get_image_data_mut()
            .iter_mut()
            .zip(raw)
            .for_each(|(pixel, &value)| *pixel = cell_color(value));
        self.texture.update(&self.image);
    }

    /// Draw the part of the grid the camera sees, filling the grid area
    pub fn draw(&self, state: &GameState) {
        let (min_x, min_y, w, h) = state.camera.visible_rect();
        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(grid_area_width(), grid_area_height())),
                source: Some(Rect::new(min_x, min_y, w, h)),
                ..Default::default()
            },
        );
    }
}

/// Screen rectangle the selected pattern would cover if stamped at
/// `mouse_pos`, matching the centring used by `GameState::stamp_selected`
pub fn stamp_outline(state: &GameState, mouse_pos: (f32, f32), viewport: (f32, f32)) -> Option<Rect> {
    if mouse_pos.0 >= viewport.0 {
        return None;
    }
    let patterns = crate::domain::presets::all_patterns();
    let pattern = patterns.get(state.selected_pattern)?;
    let (cx, cy) = state.camera.screen_to_grid(mouse_pos.0, mouse_pos.1, viewport)?;

    let gx = cx.saturating_sub(pattern.width / 2) as f32;
    let gy = cy.saturating_sub(pattern.height / 2) as f32;
    let (x0, y0) = state.camera.grid_to_screen(gx, gy, viewport);
    let (x1, y1) = state.camera.grid_to_screen(
        gx + pattern.width as f32,
        gy + pattern.height as f32,
        viewport,
    );
    Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
}

/// Outline the stamp footprint under the cursor
pub fn draw_stamp_cursor(state: &GameState, mouse_pos: (f32, f32)) {
    let viewport = (grid_area_width(), grid_area_height());
    if let Some(r) = stamp_outline(state, mouse_pos, viewport) {
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.5, Color::from_rgba(255, 255, 0, 180));
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(10, 16, 40, 255),
    );
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;
    let top = info_top();
    let current = state.stepper.current();
    let dims = state.stepper.dimensions();
    let patterns = crate::domain::presets::all_patterns();
    let pattern = patterns
        .get(state.selected_pattern)
        .map_or("-", |p| p.name);

    let status = if state.is_running { "Running" } else { "Paused" };
    let lines = [
        format!("Grid: {}x{}", dims.width(), dims.height()),
        format!("Generation: {}", state.stepper.generation()),
        format!("Alive: {}", current.population()),
        format!("Decaying: {}", current.decaying()),
        format!("Status: {status}"),
        format!("Speed: {:.0} gen/s", state.updates_per_second),
        format!("Tick: {:.2}ms", state.last_tick_time_ms),
        format!("Render: {:.2}ms", state.last_render_time_ms),
        format!("Algo: {}", state.stepper.algorithm().name()),
        format!("Zoom: {:.1}x", state.camera.zoom),
        format!("Pattern [1-7]: {pattern}"),
    ];

    lines.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, top + 18.0 * i as f32, 16.0, Color::from_rgba(190, 190, 190, 255));
    });

    let help = ["WASD: Pan", "K/J, Wheel: Zoom", "Q (hold): Run steps", "LMB: Stamp", "H: Home  Esc: Quit"];
    let help_top = top + 18.0 * lines.len() as f32 + 16.0;
    help.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, help_top + 15.0 * i as f32, 14.0, GRAY);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn state() -> GameState {
        let config = Config {
            width: 40,
            height: 30,
            seed: Some(3),
            ..Config::default()
        };
        GameState::new(&config).unwrap()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_live_and_dead_colors() {
        assert_eq!(cell_color(1), LIVE_COLOR);
        assert_eq!(cell_color(0), BACKGROUND);
    }

    #[test]
    fn test_decay_fades_towards_background() {
        let fresh = cell_color(-20);
        let old = cell_color(-1);
        assert!(fresh[1] > old[1]);
        assert!(old[1] >= BACKGROUND[1]);
        assert_eq!(fresh[3], 255);
    }

    #[test]
    fn test_fresh_decay_starts_at_live_color() {
        assert_eq!(cell_color(-20), LIVE_COLOR);
        assert_eq!(cell_color(-10)[1], (BACKGROUND[1] as f32 + (255.0 - BACKGROUND[1] as f32) * 0.5) as u8);
    }

    #[test]
    fn test_out_of_domain_drawn_as_background() {
        assert_eq!(cell_color(7), BACKGROUND);
    }

    #[test]
    fn test_stamp_outline_covers_centred_blinker() {
        // 40x30 grid in a 400x300 viewport: 10px per cell at zoom 1
        let r = stamp_outline(&state(), (105.0, 55.0), (400.0, 300.0)).unwrap();
        assert!(close(r.x, 90.0) && close(r.y, 50.0), "{r:?}");
        assert!(close(r.w, 30.0) && close(r.h, 10.0), "{r:?}");
    }

    #[test]
    fn test_stamp_outline_follows_zoom() {
        let mut s = state();
        s.camera.zoom_by(2.0);
        let r = stamp_outline(&s, (200.0, 150.0), (400.0, 300.0)).unwrap();
        assert!(close(r.w, 60.0) && close(r.h, 20.0), "{r:?}");
    }

    #[test]
    fn test_no_outline_over_panel() {
        assert!(stamp_outline(&state(), (400.0, 10.0), (400.0, 300.0)).is_none());
    }
}
