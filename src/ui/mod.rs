//! Terminal rendering for the game shell. Presentation only: these functions
//! read the [`crate::sim::types::GameWorld`] and never mutate it.

pub mod game_common;
pub mod game_scene;
