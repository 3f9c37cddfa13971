use glam::Vec2;

use crate::config::Config;
use crate::params::Params;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Ball component - the pong ball
///
/// The heading is an angle in radians from the positive x axis:
/// 0 = moving right, PI = moving left. Speed is units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
}

impl Ball {
    /// Ball in its start-of-point state
    pub fn serve(config: &Config) -> Self {
        Self {
            pos: Params::BALL_SERVE,
            heading: Params::BALL_SERVE_HEADING,
            speed: config.ball_speed_initial,
        }
    }

    /// Reset to the start-of-point state, discarding the ramped speed
    pub fn reset_point(&mut self, config: &Config) {
        *self = Ball::serve(config);
    }
}

/// Paddle component - represents one player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub center: f32, // Y center, clamped to the arena
}

impl Paddle {
    pub fn new(side: Side, center: f32) -> Self {
        Self { side, center }
    }

    pub fn top_edge(&self, config: &Config) -> f32 {
        self.center - config.paddle_length / 2.0
    }

    pub fn bottom_edge(&self, config: &Config) -> f32 {
        self.center + config.paddle_length / 2.0
    }
}

/// Per-paddle controller variant, chosen at match setup.
///
/// Both variants run through the same per-tick update; the AI slot ignores
/// any stray input flags bound to its paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    PredictiveAi,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_state() {
        let config = Config::new();
        let ball = Ball::serve(&config);
        assert_eq!(ball.pos, Vec2::new(400.0, 240.0));
        assert_eq!(ball.heading, std::f32::consts::PI);
        assert_eq!(ball.speed, 2.60);
    }

    #[test]
    fn test_reset_point_discards_prior_state() {
        let config = Config::new();
        let mut ball = Ball::serve(&config);
        ball.pos = Vec2::new(12.0, 99.0);
        ball.heading = 0.4;
        ball.speed = 4.2;

        ball.reset_point(&config);

        assert_eq!(ball.pos, Params::BALL_SERVE);
        assert_eq!(ball.heading, std::f32::consts::PI);
        assert_eq!(ball.speed, config.ball_speed_initial);
    }

    #[test]
    fn test_paddle_edges() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, 240.0);
        assert_eq!(paddle.top_edge(&config), 200.0);
        assert_eq!(paddle.bottom_edge(&config), 280.0);
    }
}
