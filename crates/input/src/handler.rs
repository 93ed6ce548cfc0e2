//! Held-key repeat handler.
//!
//! A press emits its intent immediately. While `Left`, `Right` or `Down` stays
//! held, the first repeat fires after `start_delay_ms` and later ones every
//! `period_ms` (`soft_drop_period_ms` for `Down`). `Up` never repeats.
//!
//! Terminals that do not report key releases can enable an auto-release
//! timeout: a held key is dropped once no press event for it has arrived for
//! that long.

use arrayvec::ArrayVec;

use crate::types::{
    GameAction, Key, KEY_REPEAT_PERIOD_MS, KEY_REPEAT_START_DELAY_MS, SOFT_DROP_REPEAT_PERIOD_MS,
};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

impl HorizontalDirection {
    fn action(self) -> Option<GameAction> {
        match self {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        }
    }
}

/// Tracks held keys and produces repeat intents.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    /// Milliseconds until the next horizontal repeat
    horizontal_due_ms: u32,
    down_held: bool,
    down_due_ms: u32,
    start_delay_ms: u32,
    period_ms: u32,
    soft_drop_period_ms: u32,
    key_release_timeout_ms: Option<u32>,
    /// Time since the last press of a repeating key
    idle_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(KEY_REPEAT_START_DELAY_MS, KEY_REPEAT_PERIOD_MS)
    }

    pub fn with_config(start_delay_ms: u32, period_ms: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            horizontal_due_ms: 0,
            down_held: false,
            down_due_ms: 0,
            start_delay_ms,
            period_ms: period_ms.max(1),
            soft_drop_period_ms: SOFT_DROP_REPEAT_PERIOD_MS,
            key_release_timeout_ms: None,
            idle_ms: 0,
        }
    }

    pub fn with_soft_drop_period_ms(mut self, period_ms: u32) -> Self {
        self.soft_drop_period_ms = period_ms.max(1);
        self
    }

    /// Release held keys after `timeout_ms` without a press event
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    pub fn handle_key_press(&mut self, key: Key) -> Option<GameAction> {
        match key {
            Key::Left | Key::Right => {
                self.idle_ms = 0;
                let direction = if key == Key::Left {
                    HorizontalDirection::Left
                } else {
                    HorizontalDirection::Right
                };
                if self.horizontal == direction {
                    None
                } else {
                    self.horizontal = direction;
                    self.horizontal_due_ms = self.start_delay_ms;
                    Some(key.action())
                }
            }
            Key::Down => {
                self.idle_ms = 0;
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down_due_ms = self.start_delay_ms;
                    Some(GameAction::SoftDrop)
                }
            }
            Key::Up => Some(GameAction::Rotate),
        }
    }

    pub fn handle_key_release(&mut self, key: Key) {
        match key {
            Key::Left if self.horizontal == HorizontalDirection::Left => {
                self.horizontal = HorizontalDirection::None;
            }
            Key::Right if self.horizontal == HorizontalDirection::Right => {
                self.horizontal = HorizontalDirection::None;
            }
            Key::Down => self.down_held = false,
            _ => {}
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.horizontal == HorizontalDirection::Left,
            Key::Right => self.horizontal == HorizontalDirection::Right,
            Key::Down => self.down_held,
            Key::Up => false,
        }
    }

    /// Advance the repeat timers by `elapsed_ms` and collect due repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();

        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if let Some(timeout) = self.key_release_timeout_ms {
            if self.idle_ms > timeout {
                self.horizontal = HorizontalDirection::None;
                self.down_held = false;
            }
        }

        if let Some(action) = self.horizontal.action() {
            let mut remaining = elapsed_ms;
            while remaining >= self.horizontal_due_ms {
                if actions.is_full() {
                    // Repeats past the batch capacity are skipped.
                    remaining = 0;
                    self.horizontal_due_ms = self.period_ms;
                    break;
                }
                remaining -= self.horizontal_due_ms;
                self.horizontal_due_ms = self.period_ms;
                actions.push(action);
            }
            self.horizontal_due_ms -= remaining;
        }

        if self.down_held {
            let mut remaining = elapsed_ms;
            while remaining >= self.down_due_ms {
                if actions.is_full() {
                    remaining = 0;
                    self.down_due_ms = self.soft_drop_period_ms;
                    break;
                }
                remaining -= self.down_due_ms;
                self.down_due_ms = self.soft_drop_period_ms;
                actions.push(GameAction::SoftDrop);
            }
            self.down_due_ms -= remaining;
        }

        actions
    }

    /// Milliseconds until the next repeat, `None` when nothing is held.
    pub fn next_due_in(&self) -> Option<u32> {
        let horizontal = (self.horizontal != HorizontalDirection::None).then_some(self.horizontal_due_ms);
        let down = self.down_held.then_some(self.down_due_ms);
        match (horizontal, down) {
            (Some(h), Some(d)) => Some(h.min(d)),
            (h, d) => h.or(d),
        }
    }

    pub fn reset(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.down_held = false;
        self.horizontal_due_ms = 0;
        self.down_due_ms = 0;
        self.idle_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
