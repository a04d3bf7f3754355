//! Game session state machine
//!
//! The engine owns all session state; presentation layers read it and feed
//! user actions back in.

mod config;
mod engine;
mod rejection;
mod stats;

pub use config::GameConfig;
pub use engine::{GameEngine, Phase};
pub use rejection::Rejection;
pub use stats::Statistics;
