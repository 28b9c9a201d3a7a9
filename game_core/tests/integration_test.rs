use game_core::*;
use glam::Vec2;

#[test]
fn test_ball_past_left_edge_scores_for_opponent() {
    let mut game = Match::new(1);
    let size = game.config.ball_size;
    game.place_ball(Vec2::new(-size, 100.0), Vec2::new(-6.0, 0.0));

    let events = game.tick().clone();

    assert!(events.opponent_scored);
    assert!(!events.player_scored);
    assert_eq!(game.score.opponent, 1);
    assert_eq!(game.score.player, 0);

    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, game.config.ball_spawn(), "Ball should be re-centred");
    assert_eq!(ball.vel.x, 6.0, "Ball should be served rightward");
}

#[test]
fn test_ball_past_right_edge_scores_for_player() {
    let mut game = Match::new(1);
    game.place_ball(Vec2::new(790.0, 100.0), Vec2::new(6.0, 0.0));

    let events = game.tick().clone();

    assert!(events.player_scored);
    assert_eq!(game.score.player, 1);
    assert_eq!(game.score.opponent, 0);
    assert_eq!(game.ball().unwrap().vel.x, -6.0, "Ball should be served leftward");
}

#[test]
fn test_opponent_holds_when_ball_aligned() {
    let mut game = Match::new(1);
    let before = game.paddle(Side::Opponent).unwrap().pos.y;
    // Ball centre lands on y = 250, the opponent paddle centre
    game.place_ball(Vec2::new(400.0, 242.0), Vec2::new(6.0, 0.0));

    game.tick();

    assert_eq!(game.paddle(Side::Opponent).unwrap().pos.y, before);
}

#[test]
fn test_centre_hit_on_player_paddle_gives_no_spin() {
    let mut game = Match::new(1);
    // Ball centre meets the paddle centre at y = 250
    game.place_ball(Vec2::new(25.0, 242.0), Vec2::new(-6.0, 0.0));

    let events = game.tick().clone();

    let ball = game.ball().unwrap();
    assert!(events.ball_hit_paddle);
    assert_eq!(ball.pos.x, 22.0, "Ball should be flush with the paddle");
    assert_eq!(ball.vel.x, 6.0);
    assert!(ball.vel.y.abs() < 1e-5, "Centre hit should have no spin");
}

#[test]
fn test_player_input_then_deflection() {
    let mut game = Match::new(1);
    // Move the paddle up to the top, then send the ball at its lower half
    game.set_player_target(0.0);
    game.place_ball(Vec2::new(25.0, 60.0), Vec2::new(-6.0, 0.0));

    game.tick();

    let paddle = game.paddle(Side::Player).unwrap();
    let ball = game.ball().unwrap();
    assert_eq!(paddle.pos.y, 0.0, "Target above the surface clamps to top");
    assert_eq!(ball.vel.x, 6.0);
    assert!(ball.vel.y > 0.0, "Lower-half hit should spin downward");
}

#[test]
fn test_long_match_keeps_invariants() {
    let mut game = Match::new(2024);
    let max_y = game.config.surface_height - game.config.paddle_height;
    let mut last_total = 0;

    for frame in 0..20_000u32 {
        // Sweep the mouse up and down the surface
        game.set_player_target((frame % 500) as f32);
        let events = game.tick().clone();

        for side in [Side::Player, Side::Opponent] {
            let y = game.paddle(side).unwrap().pos.y;
            assert!(
                (0.0..=max_y).contains(&y),
                "{side:?} paddle out of bounds at frame {frame}: {y}"
            );
        }

        let total = game.score.total();
        let scored = events.player_scored || events.opponent_scored;
        assert_eq!(total, last_total + scored as u64, "One point per scoring event");
        last_total = total;
    }

    assert!(last_total > 0, "Someone should score in 20k frames");
}
