//! Scoring module - score and level state machine
//!
//! Scoring rules:
//! - Starting a game raises the level from 0 to 1.
//! - Each soft-drop step earns `level` points.
//! - Line clears earn a fixed bonus by simultaneous line count
//!   (1 → 100, 2 → 250, 3 → 500, 4 → 1000).
//! - Whenever `score / level` exceeds 2000 the level goes up by one and the
//!   score gets a 100 point bonus. Level 0 never levels up.
//!
//! Every award returns a [`ScoreUpdate`] so the caller can publish exactly one
//! change notification per award, even when a level-up happened inside it.

use serde::{Deserialize, Serialize};

use crate::types::{LEVEL_UP_BONUS, LEVEL_UP_THRESHOLD, LINE_SCORES};

/// Persistable score/level pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u32,
    pub level: u32,
}

/// Result of one award call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub state: ScoreState,
    /// Whether the award pushed the level up past the threshold
    pub leveled_up: bool,
}

/// Bonus for clearing `lines` rows at once
pub fn line_clear_bonus(lines: usize) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines],
        _ => 0,
    }
}

/// Score and level tracker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    state: ScoreState,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a persisted state
    pub fn restore(state: ScoreState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ScoreState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    /// Back to level 0 with no points
    pub fn reset(&mut self) {
        self.state = ScoreState::default();
    }

    /// Award the per-step soft drop bonus (`level` points)
    pub fn award_speed_up(&mut self) -> ScoreUpdate {
        let score = self.state.score.saturating_add(self.state.level);
        self.set_score(score)
    }

    /// Award the bonus for `count` simultaneously wiped lines
    pub fn award_lines_wipe(&mut self, count: usize) -> ScoreUpdate {
        let score = self.state.score.saturating_add(line_clear_bonus(count));
        self.set_score(score)
    }

    /// Raise the level for a new game
    pub fn award_start(&mut self) -> ScoreUpdate {
        self.state.level += 1;
        ScoreUpdate {
            state: self.state,
            leveled_up: false,
        }
    }

    fn set_score(&mut self, score: u32) -> ScoreUpdate {
        self.state.score = score;

        let mut leveled_up = false;
        while self.state.level > 0 && self.state.score / self.state.level > LEVEL_UP_THRESHOLD {
            self.state.level += 1;
            self.state.score = self.state.score.saturating_add(LEVEL_UP_BONUS);
            leveled_up = true;
        }

        ScoreUpdate {
            state: self.state,
            leveled_up,
        }
    }
}
