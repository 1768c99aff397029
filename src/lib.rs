//! Flappy: a terminal flappy-bird game built around a pure, tick-driven
//! simulation core.
//!
//! The [`sim`] module is the game; everything else is the driver shell that
//! feeds it input, paces it, and draws the result.

pub mod build_info;
pub mod constants;
pub mod input;
pub mod sim;
pub mod ui;

pub use constants::*;
pub use sim::types::GameWorld;
