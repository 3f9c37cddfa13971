use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;
use std::f32::consts::{FRAC_PI_3, FRAC_PI_6, PI};

/// Deflect the ball off paddles and borders for this tick.
///
/// Runs before integration: a bounce changes the heading first, and the
/// displacement of the same tick already follows the new heading. Each test
/// uses a one-step lookahead window keyed to the current speed, not a swept
/// test, so a fast ball whose path crosses a window entirely within one
/// step can skip it. That approximation is accepted.
pub fn deflect_ball(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle centers without holding borrows across the ball update.
    let paddles: Vec<(Side, f32)> = {
        let mut query = world.query::<&Paddle>();
        query.iter().map(|(_e, p)| (p.side, p.center)).collect()
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Left first, then right, each seeing any heading change so far.
        for side in [Side::Left, Side::Right] {
            let Some(&(_, center)) = paddles.iter().find(|(s, _)| *s == side) else {
                continue;
            };
            let column = config.paddle_column(side);
            // Radius-adjusted leading edge after one step on the current heading.
            let lead = ball.pos.x + ball.speed * ball.heading.cos() - config.ball_radius;
            if lead > column || lead < column - ball.speed {
                continue;
            }
            let half_length = config.paddle_length / 2.0;
            if ball.pos.y < center - half_length || ball.pos.y > center + half_length {
                continue;
            }
            let deflection = (ball.pos.y - center) / config.paddle_length;
            ball.heading = reflect_heading(side, ball.heading, deflection, config);
            events.ball_hit_paddle = true;
        }

        // Borders: negating the heading mirrors the vertical component only.
        let step_y = ball.speed * ball.heading.sin();
        if ball.pos.y + step_y - config.ball_radius <= config.band_top
            || ball.pos.y + step_y + config.ball_radius >= config.band_bottom
        {
            ball.heading = -ball.heading;
            events.ball_hit_wall = true;
        }
    }
}

/// Outgoing heading for a paddle strike.
///
/// A dead-center strike mirrors the heading about the vertical. Off-center
/// strikes map |deflection| linearly onto the side's angle segment: pi/6 at
/// the tolerance edge up to pi/3 at the tip for the left paddle, 5pi/6 down
/// to 2pi/3 for the right, negated when the strike is below center. For
/// equal |deflection| the two sides' headings sum to pi.
fn reflect_heading(side: Side, heading: f32, deflection: f32, config: &Config) -> f32 {
    if deflection.abs() < config.center_tolerance {
        return -heading + PI;
    }
    let (tip, tolerance_edge) = match side {
        Side::Left => (FRAC_PI_3, FRAC_PI_6),
        Side::Right => (2.0 * FRAC_PI_3, 5.0 * FRAC_PI_6),
    };
    let slope = (tip - tolerance_edge) / (0.5 - config.center_tolerance);
    let angled = slope * deflection.abs() + (tip - slope / 2.0);
    if deflection < 0.0 {
        -angled
    } else {
        angled
    }
}
