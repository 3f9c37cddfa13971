use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Held-key state for one paddle. Up and down are independent: both may be
/// set at once and both sub-moves apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleFlags {
    pub up: bool,
    pub down: bool,
}

/// Input snapshot handed to the simulation each tick.
///
/// Flags persist between ticks until toggled by key events; reading one
/// snapshot value per tick gives a consistent view of all four flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: PaddleFlags,
    pub right: PaddleFlags,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self, side: Side) -> PaddleFlags {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn flags_mut(&mut self, side: Side) -> &mut PaddleFlags {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of one `tick()` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    pub scored: bool,
    pub terminal: bool,
}
