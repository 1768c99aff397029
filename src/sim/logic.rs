//! Per-tick update logic for the flappy simulation.
//!
//! [`tick`] is the whole game: gravity integration, pipe scrolling, pipe
//! lifecycle, and collision detection run in a fixed order once per frame.
//! The driver owns the [`GameWorld`] and decides when (and whether) to call
//! into here; the simulation itself never blocks, errors, or spawns anything
//! but pipes.

use super::types::{
    GameWorld, Pipe, FLAP_IMPULSE, GRAVITY, PIPE_GAP, PIPE_SPACING, PIPE_SPEED, PIPE_WIDTH,
};
use rand::Rng;

/// Apply a flap: the bird's velocity is set to [`FLAP_IMPULSE`] outright,
/// discarding whatever it was. Ignored once the game is over.
pub fn flap(world: &mut GameWorld) {
    if world.game_over {
        return;
    }
    world.bird.velocity = FLAP_IMPULSE;
}

/// Advance the simulation by one tick.
///
/// Order matters and is fixed: bird integration, pipe translation, despawn +
/// scoring, spawn, pipe collision, boundary collision. Velocity updates
/// before position (semi-implicit Euler), so a tick's gravity is felt in the
/// same tick's movement.
pub fn tick<R: Rng>(world: &mut GameWorld, rng: &mut R) {
    if world.game_over {
        return;
    }

    // Bird integration
    world.bird.velocity += GRAVITY;
    world.bird.y += world.bird.velocity;

    // Pipes scroll left
    for pipe in &mut world.pipes {
        pipe.x -= PIPE_SPEED;
    }

    // Oldest pipe leaves the playfield: despawn and score. Spacing guarantees
    // at most one pipe can exit per tick.
    if let Some(head) = world.pipes.front() {
        if head.right() < 0.0 {
            world.pipes.pop_front();
            world.score += 1;
        }
    }

    // Spawn a new pipe once the newest one has scrolled far enough in
    if world
        .pipes
        .back()
        .map_or(true, |tail| tail.x < world.playfield.width - PIPE_SPACING)
    {
        spawn_pipe(world, rng);
    }

    // Pipe collision. The flag is idempotent, so no need to short-circuit.
    for pipe in &world.pipes {
        if bird_hits_pipe(world, pipe) {
            world.game_over = true;
        }
    }

    // Ground and ceiling
    let bird = &world.bird;
    if bird.y + bird.height >= world.playfield.height || bird.y <= 0.0 {
        world.game_over = true;
    }
}

/// Restore the world to its start state and seed exactly one pipe.
pub fn reset<R: Rng>(world: &mut GameWorld, rng: &mut R) {
    world.bird.y = world.playfield.height / 2.0;
    world.bird.velocity = 0.0;
    world.pipes.clear();
    world.score = 0;
    world.game_over = false;
    spawn_pipe(world, rng);
}

/// Append a pipe at the right edge with a uniformly random gap position.
///
/// One uniform draw per spawn: the gap's bottom edge lands in
/// `[50, height - PIPE_GAP - 50)`, which keeps the bottom obstacle at least
/// 50 units tall. Gaps near the low end reach up past the ceiling, so their
/// effective opening is clipped by it; that's part of the game's balance.
pub fn spawn_pipe<R: Rng>(world: &mut GameWorld, rng: &mut R) {
    let gap_y = rng.gen::<f64>() * (world.playfield.height - PIPE_GAP - 100.0) + 50.0;
    world.pipes.push_back(Pipe {
        x: world.playfield.width,
        gap_y,
    });
}

/// Axis-aligned overlap between the bird and either obstacle of a pipe pair.
fn bird_hits_pipe(world: &GameWorld, pipe: &Pipe) -> bool {
    let bird = &world.bird;
    let horizontal = bird.x < pipe.x + PIPE_WIDTH && bird.x + bird.width > pipe.x;
    // Above the gap (into the top obstacle) or below it (into the bottom one)
    let vertical = bird.y < pipe.gap_y - PIPE_GAP || bird.y + bird.height > pipe.gap_y;
    horizontal && vertical
}
