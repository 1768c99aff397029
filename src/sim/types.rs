//! Data structures for the flappy simulation.
//!
//! The world scrolls past a bird fixed at one column; pairs of pipes leave a
//! vertical gap the bird must pass through. All coordinates are in virtual
//! playfield units (not terminal cells) with y growing downward, matching the
//! renderer's row order.

use std::collections::VecDeque;

/// Downward acceleration applied to the bird each tick.
pub const GRAVITY: f64 = 0.5;

/// Velocity the bird is set to on a flap (negative = upward).
///
/// The impulse overwrites the current velocity rather than adding to it, so
/// mashing flap never accumulates extra lift.
pub const FLAP_IMPULSE: f64 = -10.0;

/// Horizontal extent of each pipe pair.
pub const PIPE_WIDTH: f64 = 50.0;

/// Vertical opening between the top and bottom obstacle of a pipe pair.
pub const PIPE_GAP: f64 = 150.0;

/// Columns each pipe moves left per tick.
pub const PIPE_SPEED: f64 = 2.0;

/// A new pipe spawns once the newest one is this far from the right edge.
pub const PIPE_SPACING: f64 = 200.0;

/// Bird bounding box, fixed for the whole game.
pub const BIRD_WIDTH: f64 = 30.0;
pub const BIRD_HEIGHT: f64 = 30.0;

/// Fixed horizontal position of the bird's left edge.
pub const BIRD_X: f64 = 50.0;

/// Playfield dimensions, supplied by the driver at world creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

/// The player-controlled bird. Only `y` and `velocity` change after creation;
/// the world scrolls, the bird does not move horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    /// Bird at its start pose: fixed column, vertically centered, at rest.
    pub fn at_start(playfield: Playfield) -> Self {
        Self {
            x: BIRD_X,
            y: playfield.height / 2.0,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            velocity: 0.0,
        }
    }
}

/// One pipe pair. The top obstacle covers `[0, gap_y - PIPE_GAP)` and the
/// bottom obstacle `[gap_y, playfield height]`, leaving the gap between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge; decreases by `PIPE_SPEED` every tick.
    pub x: f64,
    /// Bottom edge of the gap (top edge of the bottom obstacle).
    pub gap_y: f64,
}

impl Pipe {
    /// Right edge of the pipe.
    pub fn right(&self) -> f64 {
        self.x + PIPE_WIDTH
    }
}

/// Complete simulation state, owned by the driver and advanced by
/// [`crate::sim::logic::tick`].
///
/// Pipes are kept in creation order, which is also left-to-right screen order
/// since they all scroll at the same speed: the front of the deque is the
/// oldest (leftmost) pipe, the back the newest.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWorld {
    pub playfield: Playfield,
    pub bird: Bird,
    pub pipes: VecDeque<Pipe>,
    /// Pipes fully scrolled off the left edge. Never decreases until reset.
    pub score: u32,
    /// Set on collision; once set, only a reset clears it.
    pub game_over: bool,
}

impl GameWorld {
    /// Fresh world with no pipes. The driver calls
    /// [`crate::sim::logic::reset`] before play to seed the first pipe.
    pub fn new(playfield: Playfield) -> Self {
        Self {
            playfield,
            bird: Bird::at_start(playfield),
            pipes: VecDeque::new(),
            score: 0,
            game_over: false,
        }
    }
}
