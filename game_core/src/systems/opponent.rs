use crate::{Ball, Config, OpponentAi, Paddle};
use hecs::World;

/// Track the ball's centre with the opponent paddle
///
/// The paddle moves a fixed step toward the ball unless their centres are
/// within the dead-zone, then is clamped to the surface.
pub fn drive_opponent(world: &mut World, config: &Config) {
    let ball_center_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| ball.center().y)
    };

    let Some(ball_center_y) = ball_center_y else {
        return;
    };

    for (_entity, (paddle, ai)) in world.query_mut::<(&mut Paddle, &OpponentAi)>() {
        let center = paddle.center_y();
        if center < ball_center_y - ai.dead_zone {
            paddle.pos.y += ai.speed;
        } else if center > ball_center_y + ai.dead_zone {
            paddle.pos.y -= ai.speed;
        }
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}
