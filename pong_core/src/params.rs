use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 801.0;
    pub const ARENA_HEIGHT: f32 = 480.0;
    // Playable band between the top and bottom borders (3px border strips)
    pub const BAND_TOP: f32 = 3.0;
    pub const BAND_BOTTOM: f32 = 477.0;

    // Paddle
    pub const PADDLE_LENGTH: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 1.89; // units per tick
    pub const PADDLE_COLUMN_LEFT: f32 = 15.0;
    pub const PADDLE_COLUMN_RIGHT: f32 = 770.0;
    // Fraction of the paddle treated as dead center (pure reflection)
    pub const CENTER_TOLERANCE: f32 = 0.15;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 2.60;
    pub const BALL_SPEED_MAX: f32 = 4.75;
    // Per-tick ramp: speed += (max - speed) / RAMP_DIVISOR
    pub const SPEED_RAMP_DIVISOR: f32 = 3000.0;
    pub const BALL_SERVE: Vec2 = Vec2::new(400.0, 240.0);
    pub const BALL_SERVE_HEADING: f32 = std::f32::consts::PI; // toward the left paddle

    // AI
    pub const AI_LOOKAHEAD_TICKS: f32 = 10.0;

    // Score
    pub const WIN_SCORE: u8 = 10; // First to 10 wins
}
