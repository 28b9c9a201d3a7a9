use crate::{Ball, Paddle, Score, Side};
use hecs::World;

/// Read-only copy of the match state, for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub tick: u64,
}

impl Snapshot {
    /// Copy entity state out of the world. `None` if a paddle or the ball is missing.
    pub fn capture(world: &World, score: Score, tick: u64) -> Option<Self> {
        let mut player = None;
        let mut opponent = None;
        for (_entity, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => player = Some(*paddle),
                Side::Opponent => opponent = Some(*paddle),
            }
        }

        let ball = {
            let mut ball_query = world.query::<&Ball>();
            ball_query.iter().next().map(|(_e, ball)| *ball)
        };

        Some(Self {
            player: player?,
            opponent: opponent?,
            ball: ball?,
            score,
            tick,
        })
    }
}
