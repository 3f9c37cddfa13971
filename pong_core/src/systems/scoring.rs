use crate::{Ball, Config, Events, Score, Side, TickResult};
use hecs::World;

/// Award a point if the ball left the arena, then reset or end the match.
///
/// Comparisons are strict: a ball at exactly 0 or exactly the arena width
/// has not exited yet. On a non-terminal point the ball resets to the
/// start-of-point state; on the winning point it is left where it exited.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> TickResult {
    let mut result = TickResult::default();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Right
        } else if ball.pos.x > config.arena_width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        result.scored = true;
        log::debug!(
            "point for {:?}: left {} right {}",
            scorer,
            score.left,
            score.right
        );

        if let Some(winner) = score.has_winner(config.win_score) {
            result.terminal = true;
            log::info!(
                "match over, {:?} wins {} to {}",
                winner,
                score.get(winner),
                score.get(winner.opponent())
            );
        } else {
            ball.reset_point(config);
        }
    }

    result
}
