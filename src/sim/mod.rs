//! The flappy simulation core.
//!
//! A bird falls under constant gravity and is flapped upward on input while
//! pipe pairs scroll toward it; passing a pipe scores a point, touching one
//! (or the ground or ceiling) ends the run. The core is a pure tick function
//! over an explicit [`types::GameWorld`] value: no rendering, no timers, no
//! ambient randomness — the driver supplies the cadence, the input, and an
//! injected RNG for gap placement.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
