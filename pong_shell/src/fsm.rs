//! Application State Machine
//!
//! One enumerated application state with a single transition dispatch.
//! Screens themselves (menus, arena, game-over text) are drawn by the
//! embedder from this state.

/// Which kind of match a slot of players runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

impl MatchMode {
    /// The other entry of the two-item navigation menu
    pub fn other(self) -> MatchMode {
        match self {
            MatchMode::PlayerVsPlayer => MatchMode::PlayerVsComputer,
            MatchMode::PlayerVsComputer => MatchMode::PlayerVsPlayer,
        }
    }
}

/// End-screen menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndChoice {
    PlayAgain,
    Quit,
}

impl EndChoice {
    pub fn other(self) -> EndChoice {
        match self {
            EndChoice::PlayAgain => EndChoice::Quit,
            EndChoice::Quit => EndChoice::PlayAgain,
        }
    }
}

/// Application states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Mode-selection menu with its cursor
    Navigation { selected: MatchMode },
    /// A match is running
    Match(MatchMode),
    /// Game-over menu with its cursor
    EndScreen { selected: EndChoice },
    /// The player quit; the embedder tears the session down
    Done,
}

/// Actions that trigger state transitions
///
/// Both menus have exactly two entries, so cursor-up and cursor-down are
/// the same action: toggle the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    MoveCursor,
    Select,
    MatchOver,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from: AppState,
    pub to: AppState,
    pub action: AppAction,
}

/// Application Finite State Machine
pub struct AppFsm {
    state: AppState,
}

impl AppFsm {
    pub fn new() -> Self {
        Self {
            state: AppState::Navigation {
                selected: MatchMode::PlayerVsPlayer,
            },
        }
    }

    /// Get current state
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: AppAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition. An invalid action fails without changing state.
    pub fn transition(&mut self, action: AppAction) -> TransitionResult {
        let from = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::debug!("app state {from:?} -> {next_state:?}");
            TransitionResult {
                success: true,
                from,
                to: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from,
                to: from,
                action,
            }
        }
    }

    fn get_next_state(&self, action: AppAction) -> Option<AppState> {
        use AppAction::*;
        use AppState::*;

        match (self.state, action) {
            (Navigation { selected }, MoveCursor) => Some(Navigation {
                selected: selected.other(),
            }),
            (Navigation { selected }, Select) => Some(Match(selected)),
            (Match(_), MatchOver) => Some(EndScreen {
                selected: EndChoice::PlayAgain,
            }),
            (EndScreen { selected }, MoveCursor) => Some(EndScreen {
                selected: selected.other(),
            }),
            (EndScreen { selected }, Select) => match selected {
                EndChoice::PlayAgain => Some(Navigation {
                    selected: MatchMode::PlayerVsPlayer,
                }),
                EndChoice::Quit => Some(Done),
            },
            _ => None,
        }
    }
}

impl Default for AppFsm {
    fn default() -> Self {
        Self::new()
    }
}
