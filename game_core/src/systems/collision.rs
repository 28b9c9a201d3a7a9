use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Bounce the ball off the top and bottom walls
pub fn check_wall_collisions(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        } else if ball.pos.y + ball.size >= config.surface_height {
            ball.pos.y = config.surface_height - ball.size;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off any paddle it overlaps, player paddle first
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.bounds().overlaps(&paddle.bounds()) {
                deflect(ball, paddle);
                events.ball_hit_paddle = true;
                log::trace!("ball hit {:?} paddle, vel now {}", paddle.side, ball.vel);
            }
        }
    }
}

/// Send the ball back from `paddle` with spin
///
/// The ball is placed flush against the paddle's facing edge and its
/// horizontal velocity inverted. Vertical velocity becomes the offset of the
/// ball centre from the paddle centre, normalised by half the paddle height
/// and clamped to [-1, 1], times the ball's base speed.
pub fn deflect(ball: &mut Ball, paddle: &Paddle) {
    ball.pos.x = paddle.flush_x(ball.size);
    ball.vel.x = -ball.vel.x;

    let half_height = paddle.size.y / 2.0;
    let collide_point = ((ball.center().y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);
    ball.vel.y = collide_point * ball.speed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, -3.0), Vec2::new(6.0, -4.0), &config);

        check_wall_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos.y, 0.0, "Ball should be clamped to the top edge");
        assert_eq!(ball.vel.y, 4.0, "Ball should bounce down");
        assert_eq!(ball.vel.x, 6.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, 490.0), Vec2::new(6.0, 4.0), &config);

        check_wall_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos.y, config.surface_height - config.ball_size);
        assert_eq!(ball.vel.y, -4.0, "Ball should bounce up");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_bounce_in_open_space() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, 200.0), Vec2::new(6.0, 4.0), &config);

        check_wall_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(6.0, 4.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, &config);
        // Player paddle spans x 10..22, y 205..295; ball centre at paddle centre
        create_ball(&mut world, Vec2::new(15.0, 242.0), Vec2::new(-6.0, 3.0), &config);

        check_paddle_collisions(&mut world, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos.x, 22.0, "Ball should be flush with paddle's right edge");
        assert_eq!(ball.vel.x, 6.0, "Ball should head right");
        assert!(ball.vel.y.abs() < 1e-5, "Centre hit should give no spin");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Opponent, &config);
        // Opponent paddle spans x 778..790; ball centre 45 px below paddle centre
        create_ball(&mut world, Vec2::new(770.0, 287.0), Vec2::new(6.0, 0.0), &config);

        check_paddle_collisions(&mut world, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos.x, 762.0, "Ball should be flush with paddle's left edge");
        assert_eq!(ball.vel.x, -6.0, "Ball should head left");
        assert!((ball.vel.y - 6.0).abs() < 1e-5, "Edge hit should give full spin");
    }

    #[test]
    fn test_spin_is_clamped_to_speed() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, &config);
        // Ball centre 52 px above paddle centre (beyond half height)
        create_ball(&mut world, Vec2::new(15.0, 190.0), Vec2::new(-6.0, 0.0), &config);

        check_paddle_collisions(&mut world, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, -6.0, "Spin should not exceed base speed");
    }

    #[test]
    fn test_no_collision_when_ball_misses_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, &config);
        create_ball(&mut world, Vec2::new(15.0, 20.0), Vec2::new(-6.0, 1.0), &config);

        check_paddle_collisions(&mut world, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel, Vec2::new(-6.0, 1.0));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_touching_paddle_edge_does_not_collide() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, &config);
        create_ball(&mut world, Vec2::new(22.0, 240.0), Vec2::new(6.0, 0.0), &config);

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(ball(&world).vel.x, 6.0, "Flush ball should keep moving away");
        assert!(!events.ball_hit_paddle);
    }
}
