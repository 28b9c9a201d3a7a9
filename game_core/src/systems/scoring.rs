use crate::{Ball, Config, Events, GameRng, Score, ServeDirection};
use hecs::World;

/// Check if ball left the surface (scoring)
///
/// Ball past the left edge: opponent scores, serve right.
/// Ball past the right edge: player scores, serve left.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_opponent();
            events.opponent_scored = true;
            ball.serve(ServeDirection::Right, config, rng);
            log::debug!(
                "opponent scored ({}-{}), serving right",
                score.player,
                score.opponent
            );
        } else if ball.pos.x + ball.size > config.surface_width {
            score.increment_player();
            events.player_scored = true;
            ball.serve(ServeDirection::Left, config, rng);
            log::debug!(
                "player scored ({}-{}), serving left",
                score.player,
                score.opponent
            );
        }
    }
}
