use crate::Ball;
use glam::Vec2;
use hecs::World;

/// Advance the ball one step along its heading.
///
/// Runs after deflection, so a bounced ball already moves on its new
/// heading this tick.
pub fn integrate_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += Vec2::from_angle(ball.heading) * ball.speed;
    }
}
