use crate::{Aabb, Config, GameRng, Params};
use glam::Vec2;
use rand::Rng;

/// Which paddle an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Player,   // left, mouse controlled
    Opponent, // right, scripted
}

/// Horizontal direction of a serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeDirection {
    Left,
    Right,
}

impl ServeDirection {
    pub fn sign(self) -> f32 {
        match self {
            ServeDirection::Left => -1.0,
            ServeDirection::Right => 1.0,
        }
    }
}

/// Color tags, resolved to CSS colors by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Player,
    Opponent,
    Ball,
    Net,
    Score,
}

impl ColorTag {
    pub fn css(self) -> &'static str {
        match self {
            ColorTag::Player => Params::PLAYER_COLOR,
            ColorTag::Opponent => Params::OPPONENT_COLOR,
            ColorTag::Ball => Params::BALL_COLOR,
            ColorTag::Net => Params::NET_COLOR,
            ColorTag::Score => Params::SCORE_COLOR,
        }
    }
}

/// Paddle component. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: ColorTag,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        let color = match side {
            Side::Player => ColorTag::Player,
            Side::Opponent => ColorTag::Opponent,
        };
        Self {
            side,
            pos,
            size,
            color,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Ball X that leaves the ball flush against this paddle's facing edge
    pub fn flush_x(&self, ball_size: f32) -> f32 {
        match self.side {
            Side::Player => self.pos.x + self.size.x,
            Side::Opponent => self.pos.x - ball_size,
        }
    }
}

/// Ball component. `pos` is the top-left corner of the square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub speed: f32, // base speed, per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Reset ball to the centre and serve it in `dir`
    ///
    /// Horizontal speed is always the base speed; vertical speed is random
    /// within `±serve_spread * speed`.
    pub fn serve(&mut self, dir: ServeDirection, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();
        let spread: f32 = rng.0.gen_range(-1.0..1.0);
        self.vel = Vec2::new(
            dir.sign() * self.speed,
            spread * self.speed * config.serve_spread,
        );
    }
}

/// Scripted movement for the opponent paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentAi {
    pub speed: f32,     // pixels per frame
    pub dead_zone: f32, // hold while |paddle centre - ball centre| <= dead_zone
}

impl OpponentAi {
    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self { speed, dead_zone }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.opponent_speed, config.opponent_dead_zone)
    }
}
