use crate::{Command, CommandQueue, Config, Paddle, Side};
use hecs::World;

/// Apply queued host commands in arrival order (last write wins)
pub fn ingest_commands(world: &mut World, commands: &mut CommandQueue, config: &Config) {
    for command in commands.drain() {
        match command {
            Command::SetPlayerTarget { center_y } => {
                if !center_y.is_finite() {
                    log::warn!("ignoring non-finite paddle target {center_y}");
                    continue;
                }
                for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                    if paddle.side == Side::Player {
                        paddle.pos.y = config.clamp_paddle_y(center_y - paddle.size.y / 2.0);
                    }
                }
            }
        }
    }
}
