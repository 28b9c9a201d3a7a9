pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod scene;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use scene::*;
pub use snapshot::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the simulation by one frame
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    commands: &mut CommandQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest host commands (player paddle target)
    ingest_commands(world, commands, config);

    // 2. Move ball
    move_ball(world);

    // 3. Bounce off top/bottom walls
    check_wall_collisions(world, config, events);

    // 4. Bounce off paddles
    check_paddle_collisions(world, events);

    // 5. Check scoring (ball exited surface)
    check_scoring(world, config, score, events, rng);

    // 6. Opponent follows the ball
    drive_opponent(world, config);
}

/// Helper to create a vertically centred paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), config.paddle_spawn_y());
    let paddle = Paddle::new(side, pos, config.paddle_size());
    match side {
        Side::Player => world.spawn((paddle,)),
        Side::Opponent => world.spawn((paddle, OpponentAi::from_config(config))),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_size, config.ball_speed),))
}
