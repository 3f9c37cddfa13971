use crate::{Ball, Config, Params};
use hecs::World;

/// Ramp the ball speed toward the cap.
///
/// Exponential approach: each call closes 1/3000th of the remaining gap,
/// so the speed is non-decreasing and never reaches the cap in finitely
/// many ticks. Only a point reset brings it back down.
pub fn ramp_speed(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.speed += (config.ball_speed_max - ball.speed) / Params::SPEED_RAMP_DIVISOR;
    }
}
