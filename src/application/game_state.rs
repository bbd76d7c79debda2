use std::time::Instant;

use log::{debug, info};

use super::{Camera, Config, ConfigError};
use crate::domain::{Coord, Stepper, presets, seeder};

/// GameState is the viewer's whole simulation context.
/// The pause flag lives here: the stepper itself only knows how to tick.
pub struct GameState {
    pub stepper: Stepper,
    pub camera: Camera,
    pub is_running: bool,
    pub reset_seed: u64,
    pub updates_per_second: f32,
    pub update_timer: f32,
    pub last_tick_time_ms: f32,   // Tick performance metric
    pub last_render_time_ms: f32, // Render performance metric
    /// Index into `presets::all_patterns()` stamped by a click
    pub selected_pattern: usize,
}

impl GameState {
    /// Build the grid described by `config` and seed it
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let dims = config.dimensions()?;
        let seed = config.seed.unwrap_or_else(seeder::entropy_seed);
        let mut stepper = Stepper::with_seed(dims.width(), dims.height(), seed)?;
        stepper.set_algorithm(config.algorithm);

        info!(
            "{}x{} grid, seed {}, reset seed {}, {} neighbor counting",
            dims.width(),
            dims.height(),
            seed,
            config.reset_seed,
            config.algorithm.name()
        );

        Ok(Self {
            stepper,
            camera: Camera::new(dims.width(), dims.height()),
            is_running: true,
            reset_seed: config.reset_seed,
            updates_per_second: config.updates_per_second,
            update_timer: 0.0,
            last_tick_time_ms: 0.0,
            last_render_time_ms: 0.0,
            selected_pattern: 0,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Pause and advance exactly one generation
    pub fn step_once(mut self) -> Self {
        self.is_running = false;
        self.run_tick();
        self
    }

    /// Reseed from the configured reset seed; play/pause is left alone
    pub fn reset(mut self) -> Self {
        self.stepper.reset(self.reset_seed);
        self.update_timer = 0.0;
        self
    }

    /// Kill every cell and pause
    pub fn clear(mut self) -> Self {
        self.stepper.clear();
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Switch to the next neighbor-counting strategy
    pub fn cycle_algorithm(mut self) -> Self {
        let next = self.stepper.algorithm().next();
        self.stepper.set_algorithm(next);
        self
    }

    /// Choose which preset a click stamps; out-of-range indices are ignored
    pub fn select_pattern(mut self, index: usize) -> Self {
        if index < presets::all_patterns().len() {
            self.selected_pattern = index;
            debug!("selected pattern {}", presets::all_patterns()[index].name);
        }
        self
    }

    /// Stamp the selected preset centred on `centre`
    pub fn stamp_selected(&mut self, centre: Coord) {
        let patterns = presets::all_patterns();
        let Some(pattern) = patterns.get(self.selected_pattern) else {
            return;
        };
        let x = centre.x().saturating_sub(pattern.width / 2);
        let y = centre.y().saturating_sub(pattern.height / 2);
        if let Ok(origin) = self.stepper.dimensions().coord(x, y) {
            self.stepper.stamp(pattern, origin);
        }
    }

    /// Advance the clock by one frame, ticking when an update is due
    pub fn advance(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.run_tick();
            self.update_timer = 0.0;
        }

        self
    }

    fn run_tick(&mut self) {
        let start = Instant::now();
        self.stepper.tick();
        self.last_tick_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let config = Config {
            width: 40,
            height: 30,
            seed: Some(3),
            ..Config::default()
        };
        GameState::new(&config).unwrap()
    }

    #[test]
    fn test_new_uses_seed() {
        let a = state();
        let b = state();
        assert_eq!(a.stepper.raw_buffer(), b.stepper.raw_buffer());
        assert!(a.is_running);
    }

    #[test]
    fn test_zero_size_config_rejected() {
        let config = Config { width: 0, ..Config::default() };
        assert!(GameState::new(&config).is_err());
    }

    #[test]
    fn test_paused_state_does_not_tick() {
        let s = state().toggle_running().advance(10.0);
        assert_eq!(s.stepper.generation(), 0);
    }

    #[test]
    fn test_advance_waits_for_interval() {
        let s = state().adjust_speed(-100.0); // 1 update per second
        let s = s.advance(0.5);
        assert_eq!(s.stepper.generation(), 0);
        let s = s.advance(0.6);
        assert_eq!(s.stepper.generation(), 1);
    }

    #[test]
    fn test_step_once_pauses() {
        let s = state().step_once();
        assert!(!s.is_running);
        assert_eq!(s.stepper.generation(), 1);
    }

    #[test]
    fn test_reset_uses_reset_seed() {
        let s = state().step_once().reset();
        let mut expected = Stepper::new(40, 30).unwrap();
        expected.reset(5);
        assert_eq!(s.stepper.raw_buffer(), expected.raw_buffer());
        assert_eq!(s.stepper.generation(), 0);
    }

    #[test]
    fn test_clear_pauses_and_empties() {
        let s = state().clear();
        assert!(!s.is_running);
        assert_eq!(s.stepper.current().population(), 0);
    }

    #[test]
    fn test_cycle_algorithm() {
        let s = state();
        let before = s.stepper.algorithm();
        let s = s.cycle_algorithm();
        assert_eq!(s.stepper.algorithm(), before.next());
    }

    #[test]
    fn test_stamp_selected_pattern() {
        let mut s = state().clear().select_pattern(4); // Block
        let centre = s.stepper.dimensions().coord(10, 10).unwrap();
        s.stamp_selected(centre);
        assert_eq!(s.stepper.current().population(), 4);

        let s = s.select_pattern(99);
        assert_eq!(s.selected_pattern, 4);
    }
}
