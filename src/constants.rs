//! Driver-level tuning constants.
//!
//! The simulation's own physics constants live in [`crate::sim::types`];
//! these only control how the shell paces and sizes it.

use crate::sim::types::Playfield;

/// Milliseconds between simulation ticks (~60 fps).
pub const TICK_INTERVAL_MS: u64 = 16;

/// Input poll timeout on screens with no running simulation. Keeps the event
/// loop sleeping between key presses instead of spinning on redraws.
pub const INPUT_POLL_MS: u64 = 50;

/// Virtual playfield the simulation runs in. The renderer scales this to
/// whatever terminal area is available.
pub const PLAYFIELD: Playfield = Playfield {
    width: 400.0,
    height: 600.0,
};

/// Seconds counted down before play starts (and before each replay).
pub const COUNTDOWN_SECS: u8 = 3;
