mod cell;
mod error;
mod grid;
mod neighbors;
mod patterns;
mod algorithm;
mod stepper;
pub mod rules;
pub mod seeder;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Coord, Dimensions, Generation, GridBuffer};
pub use neighbors::NeighborCounts;
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use stepper::Stepper;
