use crate::components::Side;
use crate::params::Params;

/// Game configuration
///
/// A renderer must share this geometry so drawing never drifts from
/// collision.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub band_top: f32,
    pub band_bottom: f32,
    pub paddle_length: f32,
    pub paddle_speed: f32,
    pub paddle_column_left: f32,
    pub paddle_column_right: f32,
    pub center_tolerance: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            band_top: Params::BAND_TOP,
            band_bottom: Params::BAND_BOTTOM,
            paddle_length: Params::PADDLE_LENGTH,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_column_left: Params::PADDLE_COLUMN_LEFT,
            paddle_column_right: Params::PADDLE_COLUMN_RIGHT,
            center_tolerance: Params::CENTER_TOLERANCE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column the given paddle occupies
    pub fn paddle_column(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_column_left,
            Side::Right => self.paddle_column_right,
        }
    }

    /// Clamp a paddle center to the arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_length = self.paddle_length / 2.0;
        y.clamp(half_length, self.arena_height - half_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_column() {
        let config = Config::new();
        assert_eq!(config.paddle_column(Side::Left), 15.0, "Left paddle column");
        assert_eq!(
            config.paddle_column(Side::Right),
            770.0,
            "Right paddle column"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let half_length = config.paddle_length / 2.0;
        assert_eq!(config.clamp_paddle_y(0.0), half_length);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - half_length
        );
        let valid_y = 240.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_config_default_tuning() {
        let config = Config::new();
        assert_eq!(config.arena_width, 801.0);
        assert_eq!(config.paddle_speed, 1.89);
        assert_eq!(config.ball_speed_initial, 2.60);
        assert_eq!(config.ball_speed_max, 4.75);
        assert_eq!(config.center_tolerance, 0.15);
        assert_eq!(config.win_score, 10);
    }
}
