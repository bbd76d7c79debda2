mod camera;
mod config;
mod game_state;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM};
pub use config::{Config, ConfigError, MAX_VIEW_DIMENSION};
pub use game_state::GameState;
