//! Key tracking
//!
//! Folds the embedder's key events into the persistent input snapshot the
//! simulation reads each tick. Bindings depend on the match mode: in PvP
//! the arrow keys drive the right paddle and W/S the left; in PvE the
//! arrow keys drive the human (left) paddle and W/S are unread because the
//! AI owns the other slot.

use crate::fsm::MatchMode;
use pong_core::{InputSnapshot, Side};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Enter,
    P,
}

/// A key transition reported by the embedder's event source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Held-key state for one match
pub struct InputTracker {
    mode: MatchMode,
    snapshot: InputSnapshot,
}

impl InputTracker {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            snapshot: InputSnapshot::new(),
        }
    }

    /// Record a key transition. Unbound keys are ignored.
    pub fn handle(&mut self, event: KeyEvent) {
        let (key, held) = match event {
            KeyEvent::Pressed(key) => (key, true),
            KeyEvent::Released(key) => (key, false),
        };
        let Some((side, is_up)) = self.binding(key) else {
            return;
        };
        let flags = self.snapshot.flags_mut(side);
        if is_up {
            flags.up = held;
        } else {
            flags.down = held;
        }
    }

    /// The flags as of now; flags persist until the matching release.
    pub fn snapshot(&self) -> InputSnapshot {
        self.snapshot
    }

    fn binding(&self, key: Key) -> Option<(Side, bool)> {
        match (self.mode, key) {
            (MatchMode::PlayerVsPlayer, Key::Up) => Some((Side::Right, true)),
            (MatchMode::PlayerVsPlayer, Key::Down) => Some((Side::Right, false)),
            (MatchMode::PlayerVsPlayer, Key::W) => Some((Side::Left, true)),
            (MatchMode::PlayerVsPlayer, Key::S) => Some((Side::Left, false)),
            (MatchMode::PlayerVsComputer, Key::Up) => Some((Side::Left, true)),
            (MatchMode::PlayerVsComputer, Key::Down) => Some((Side::Left, false)),
            // W/S are inert under AI control; Enter and P are not paddle keys.
            _ => None,
        }
    }
}
