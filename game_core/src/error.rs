use thiserror::Error;

/// Reasons a [`Config`](crate::Config) cannot host a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("surface must have a positive size, got {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },

    #[error("paddle height {paddle} does not fit in surface height {surface}")]
    PaddleTooTall { paddle: f32, surface: f32 },

    #[error("ball size {ball} does not fit in a {width}x{height} surface")]
    BallTooLarge { ball: f32, width: f32, height: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be zero or more, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error(
        "paddles with margin {margin} and width {paddle} do not fit in surface width {surface}"
    )]
    PaddlesOverlap { margin: f32, paddle: f32, surface: f32 },
}
