pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// One match of Pong: the ball, both paddles, and both scores.
///
/// All mutation is serialized through the per-tick calls; an external
/// fixed-interval scheduler drives `apply_input`, `tick`, and `ramp_speed`
/// once per interval, in that order. Once a score reaches the win
/// threshold the match is terminal and `tick` stops simulating.
pub struct MatchState {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    terminal: bool,
}

impl MatchState {
    pub fn new(config: Config, left: Controller, right: Controller) -> Self {
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Left, left, &config);
        spawn_paddle(&mut world, Side::Right, right, &config);
        spawn_ball(&mut world, &config);
        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            terminal: false,
        }
    }

    /// Run every paddle controller against this tick's input snapshot
    pub fn apply_input(&mut self, input: &InputSnapshot) {
        drive_paddles(&mut self.world, input, &self.config);
    }

    /// Advance the ball one tick: deflect, integrate, then score.
    ///
    /// Deflection runs first so a bounce redirects the displacement of the
    /// same tick. After the match turns terminal this is a no-op that keeps
    /// reporting the terminal result.
    pub fn tick(&mut self) -> TickResult {
        if self.terminal {
            return TickResult {
                scored: false,
                terminal: true,
            };
        }
        self.events.clear();
        deflect_ball(&mut self.world, &self.config, &mut self.events);
        integrate_ball(&mut self.world);
        let result = check_scoring(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        self.terminal = result.terminal;
        result
    }

    /// Apply the per-tick difficulty ramp
    pub fn ramp_speed(&mut self) {
        if self.terminal {
            return;
        }
        systems::ramp_speed(&mut self.world, &self.config);
    }

    /// Start the next point, keeping the scores
    pub fn reset_point(&mut self) {
        let config = &self.config;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset_point(config);
        }
    }

    // Read-only state for the presentation layer.

    pub fn ball(&self) -> Ball {
        let mut query = self.world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("match has a ball")
    }

    pub fn paddle_center(&self, side: Side) -> f32 {
        let mut query = self.world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.center)
            .expect("match has both paddles")
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Helper to create a paddle entity
pub fn spawn_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, config.arena_height / 2.0), controller))
}

/// Helper to create the ball entity
pub fn spawn_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::serve(config),))
}
