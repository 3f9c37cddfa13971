use crate::{Ball, Config, Controller, InputSnapshot, Paddle, Params};
use hecs::World;

/// Run every paddle's controller for this tick.
///
/// Human paddles move by the held flags, one sub-move per flag, so up and
/// down held together apply additively. The AI paddle steers toward a
/// linear extrapolation of the ball and reads no flags. Every sub-move is
/// silently clamped to the arena; an out-of-bounds move is a no-op at the
/// bound, never an error.
pub fn drive_paddles(world: &mut World, input: &InputSnapshot, config: &Config) {
    // Take the ball state up front; the AI needs it while paddles are borrowed.
    let ball = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        match controller {
            Controller::Human => {
                let flags = input.flags(paddle.side);
                if flags.up {
                    paddle.center = config.clamp_paddle_y(paddle.center - config.paddle_speed);
                }
                if flags.down {
                    paddle.center = config.clamp_paddle_y(paddle.center + config.paddle_speed);
                }
            }
            Controller::PredictiveAi => {
                let Some(ball) = ball else { continue };
                // Where the ball would be after a fixed number of ticks on its
                // current heading, ignoring any bounces in between.
                let predicted_y =
                    ball.pos.y + Params::AI_LOOKAHEAD_TICKS * ball.speed * ball.heading.sin();
                if predicted_y < paddle.top_edge(config) {
                    paddle.center = config.clamp_paddle_y(paddle.center - config.paddle_speed);
                } else if predicted_y > paddle.bottom_edge(config) {
                    paddle.center = config.clamp_paddle_y(paddle.center + config.paddle_speed);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_ball, spawn_paddle, Side};
    use glam::Vec2;

    fn paddle_center(world: &World, side: Side) -> f32 {
        let mut query = world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.center)
            .unwrap()
    }

    fn set_ball(world: &mut World, pos: Vec2, heading: f32, speed: f32) {
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.heading = heading;
            ball.speed = speed;
        }
    }

    #[test]
    fn test_human_paddle_moves_up_and_down() {
        let config = Config::new();
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Left, Controller::Human, &config);

        let mut input = InputSnapshot::new();
        input.left.up = true;
        drive_paddles(&mut world, &input, &config);
        assert_eq!(paddle_center(&world, Side::Left), 240.0 - 1.89);

        input.left.up = false;
        input.left.down = true;
        drive_paddles(&mut world, &input, &config);
        assert_eq!(paddle_center(&world, Side::Left), 240.0);
    }

    #[test]
    fn test_both_flags_apply_additively() {
        let config = Config::new();
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Right, Controller::Human, &config);

        let mut input = InputSnapshot::new();
        input.right.up = true;
        input.right.down = true;
        drive_paddles(&mut world, &input, &config);

        // Up then down, both applied; away from the bounds they cancel.
        assert_eq!(paddle_center(&world, Side::Right), 240.0);
    }

    #[test]
    fn test_human_paddle_clamps_at_bounds() {
        let config = Config::new();
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Left, Controller::Human, &config);

        let mut input = InputSnapshot::new();
        input.left.up = true;
        for _ in 0..300 {
            drive_paddles(&mut world, &input, &config);
        }
        assert_eq!(
            paddle_center(&world, Side::Left),
            config.paddle_length / 2.0,
            "Paddle should stop at the top bound"
        );

        input.left.up = false;
        input.left.down = true;
        for _ in 0..600 {
            drive_paddles(&mut world, &input, &config);
        }
        assert_eq!(
            paddle_center(&world, Side::Left),
            config.arena_height - config.paddle_length / 2.0,
            "Paddle should stop at the bottom bound"
        );
    }

    #[test]
    fn test_ai_steers_toward_predicted_intercept() {
        let config = Config::new();
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Right, Controller::PredictiveAi, &config);
        spawn_ball(&mut world, &config);

        // Ball heading steeply downward: predicted y is below the paddle span.
        set_ball(
            &mut world,
            Vec2::new(600.0, 300.0),
            std::f32::consts::FRAC_PI_3,
            3.0,
        );
        drive_paddles(&mut world, &InputSnapshot::new(), &config);
        assert_eq!(paddle_center(&world, Side::Right), 240.0 + 1.89);

        // Ball heading steeply upward: predicted y is above the paddle span.
        set_ball(
            &mut world,
            Vec2::new(600.0, 100.0),
            -std::f32::consts::FRAC_PI_3,
            3.0,
        );
        drive_paddles(&mut world, &InputSnapshot::new(), &config);
        assert_eq!(paddle_center(&world, Side::Right), 240.0);
    }

    #[test]
    fn test_ai_holds_when_prediction_is_covered() {
        let config = Config::new();
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Right, Controller::PredictiveAi, &config);
        spawn_ball(&mut world, &config);

        // Serve heading is horizontal: predicted y equals the paddle center.
        drive_paddles(&mut world, &InputSnapshot::new(), &config);
        assert_eq!(paddle_center(&world, Side::Right), 240.0);
    }

    #[test]
    fn test_ai_ignores_stray_flags_for_its_slot() {
        let config = Config::new();
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Right, Controller::PredictiveAi, &config);
        spawn_ball(&mut world, &config);

        let mut input = InputSnapshot::new();
        input.right.up = true;
        drive_paddles(&mut world, &input, &config);
        assert_eq!(
            paddle_center(&world, Side::Right),
            240.0,
            "AI slot should not read human flags"
        );
    }

    #[test]
    fn test_ai_clamps_at_bounds() {
        let config = Config::new();
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Right, Controller::PredictiveAi, &config);
        spawn_ball(&mut world, &config);

        // Ball permanently headed far below the arena.
        set_ball(
            &mut world,
            Vec2::new(600.0, 470.0),
            std::f32::consts::FRAC_PI_2,
            4.0,
        );
        for _ in 0..600 {
            drive_paddles(&mut world, &InputSnapshot::new(), &config);
        }
        assert_eq!(
            paddle_center(&world, Side::Right),
            config.arena_height - config.paddle_length / 2.0
        );
    }
}
