// Domain layer - automaton core: grid, neighbor counting, rule, stepping
pub mod domain;

// Application layer - viewer state, camera, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Dimensions, Generation, GridError, Pattern, Stepper, presets};
pub use application::{Camera, Config, ConfigError, GameState};
