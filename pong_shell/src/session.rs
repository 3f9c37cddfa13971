//! Session driver
//!
//! One dispatch point between the application state machine, the key
//! tracker, and the running match. The embedder owns the timer and the
//! screen: it forwards key events, calls `tick` once per interval, and
//! draws from the read-only state.

use crate::fsm::{AppAction, AppFsm, AppState, MatchMode};
use crate::input::{InputTracker, Key, KeyEvent};
use pong_core::{Config, Controller, MatchState};

/// A match in progress together with its per-match input state
struct LiveMatch {
    state: MatchState,
    tracker: InputTracker,
    paused: bool,
}

pub struct Session {
    fsm: AppFsm,
    config: Config,
    live: Option<LiveMatch>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            fsm: AppFsm::new(),
            config,
            live: None,
        }
    }

    /// Route one key event to whatever the current state listens to
    pub fn handle_key(&mut self, event: KeyEvent) {
        match self.fsm.state() {
            AppState::Navigation { .. } | AppState::EndScreen { .. } => {
                let KeyEvent::Pressed(key) = event else { return };
                match key {
                    Key::Up | Key::Down => {
                        self.fsm.transition(AppAction::MoveCursor);
                    }
                    Key::Enter => {
                        let result = self.fsm.transition(AppAction::Select);
                        if let AppState::Match(mode) = result.to {
                            self.start_match(mode);
                        }
                    }
                    _ => {}
                }
            }
            AppState::Match(_) => {
                let live = self.live.as_mut().expect("a live match backs Match state");
                if event == KeyEvent::Pressed(Key::P) {
                    live.paused = !live.paused;
                    log::debug!("paused: {}", live.paused);
                } else {
                    live.tracker.handle(event);
                }
            }
            AppState::Done => {}
        }
    }

    /// Run one scheduler interval: controllers, ball, difficulty ramp.
    ///
    /// Outside a match, or while paused, this is a no-op; pausing simply
    /// withholds simulation, no state decays.
    pub fn tick(&mut self) {
        if !matches!(self.fsm.state(), AppState::Match(_)) {
            return;
        }
        let live = self.live.as_mut().expect("a live match backs Match state");
        if live.paused {
            return;
        }

        live.state.apply_input(&live.tracker.snapshot());
        let result = live.state.tick();
        live.state.ramp_speed();

        if result.terminal {
            self.fsm.transition(AppAction::MatchOver);
            self.live = None;
        }
    }

    fn start_match(&mut self, mode: MatchMode) {
        let (left, right) = match mode {
            MatchMode::PlayerVsPlayer => (Controller::Human, Controller::Human),
            MatchMode::PlayerVsComputer => (Controller::Human, Controller::PredictiveAi),
        };
        self.live = Some(LiveMatch {
            state: MatchState::new(self.config.clone(), left, right),
            tracker: InputTracker::new(mode),
            paused: false,
        });
    }

    pub fn state(&self) -> AppState {
        self.fsm.state()
    }

    /// The running match, for the renderer; None outside `Match`.
    pub fn match_state(&self) -> Option<&MatchState> {
        self.live.as_ref().map(|live| &live.state)
    }

    pub fn is_paused(&self) -> bool {
        self.live.as_ref().is_some_and(|live| live.paused)
    }

    /// True once the player chose Quit; the embedder exits its loop.
    pub fn is_done(&self) -> bool {
        self.fsm.state() == AppState::Done
    }
}
