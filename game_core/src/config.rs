use crate::{ConfigError, Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub serve_spread: f32,
    pub opponent_speed: f32,
    pub opponent_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            serve_spread: Params::SERVE_SPREAD,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a surface of the given size
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Check that paddles and ball fit on the surface
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.surface_width) || !is_positive(self.surface_height) {
            return Err(ConfigError::InvalidSurface {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_size", self.ball_size)?;
        positive("ball_speed", self.ball_speed)?;
        positive("opponent_speed", self.opponent_speed)?;
        non_negative("paddle_margin", self.paddle_margin)?;
        non_negative("serve_spread", self.serve_spread)?;
        non_negative("opponent_dead_zone", self.opponent_dead_zone)?;

        if self.paddle_height > self.surface_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                surface: self.surface_height,
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) > self.surface_width {
            return Err(ConfigError::PaddlesOverlap {
                margin: self.paddle_margin,
                paddle: self.paddle_width,
                surface: self.surface_width,
            });
        }
        if self.ball_size > self.surface_width || self.ball_size > self.surface_height {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        Ok(())
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.surface_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Y position (top edge) of a vertically centred paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.surface_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top edge to [0, surface_height - paddle_height]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn max_paddle_y(&self) -> f32 {
        (self.surface_height - self.paddle_height).max(0.0)
    }

    /// Top-left corner of a ball centred on the surface
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.surface_width / 2.0 - self.ball_size / 2.0,
            self.surface_height / 2.0 - self.ball_size / 2.0,
        )
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if is_positive(value) {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
