/// Game tuning parameters, in surface pixels and per-frame units
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (replaced by the canvas size in the browser)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_MARGIN: f32 = 10.0;

    // Opponent
    pub const OPPONENT_SPEED: f32 = 4.0;
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 6.0;
    pub const SERVE_SPREAD: f32 = 0.7; // max |vel.y| on serve, as a fraction of speed

    // Colors
    pub const PLAYER_COLOR: &'static str = "#4caf50";
    pub const OPPONENT_COLOR: &'static str = "#f44336";
    pub const BALL_COLOR: &'static str = "#ffd600";
    pub const NET_COLOR: &'static str = "#888";
    pub const SCORE_COLOR: &'static str = "#fff";

    // Net and score layout
    pub const NET_SEGMENT: f32 = 30.0;
    pub const NET_WIDTH: f32 = 4.0;
    pub const SCORE_FONT: &'static str = "32px Arial";
    pub const SCORE_BASELINE: f32 = 40.0;
}
