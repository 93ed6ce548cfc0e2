//! Game module - session state machine around the board and score
//!
//! `Game` owns the board, the score and the piece generator. It has no clock:
//! the host calls [`Game::step_down`] whenever [`Game::fall_delay`] elapses and
//! forwards player intents as method calls. Every observable change is queued
//! as a [`Notification`] and handed out by [`Game::drain_notifications`].

use std::time::Duration;

use blockfall_core::{Board, GameSnapshot, Piece, PieceFactory, Score, ScoreUpdate};
use blockfall_types::{Direction, GameAction, SessionState, MIN_FALL_DELAY_MS};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::notify::Notification;

/// Result of one fall step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No session is running; nothing happened
    Idle,
    /// The active piece moved one row down
    Moved,
    /// The active piece was fixed and the next one spawned
    Locked { lines: usize },
    /// The active piece could not leave the top row; the session ended
    GameOver,
}

impl StepOutcome {
    pub fn locked(&self) -> bool {
        matches!(self, StepOutcome::Locked { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    config: EngineConfig,
    board: Board,
    factory: PieceFactory,
    /// Pre-generated piece shown in the preview
    next: Option<Piece>,
    score: Score,
    state: SessionState,
    outbox: Vec<Notification>,
}

impl Game {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::with_size(config.width, config.height),
            factory: PieceFactory::new(config.seed, &config.palette),
            next: None,
            score: Score::new(),
            state: SessionState::NotStarted,
            outbox: Vec::new(),
            config,
        }
    }

    /// Default 10x20 game with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    /// Start a new session
    ///
    /// Clears the board and score, raises the level to 1 and spawns the first
    /// piece. Fails while a session is running or paused.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.state.in_progress() {
            return Err(EngineError::AlreadyRunning);
        }

        self.board.clear();
        self.score.reset();
        let update = self.score.award_start();
        self.push_score(update);

        let first = self.factory.next_piece();
        self.spawn(first);
        self.refill_preview();
        self.state = SessionState::Running;
        self.flush_redraw();
        Ok(())
    }

    /// Abandon the current session and return to `NotStarted`
    ///
    /// The score is kept so the last result stays visible.
    pub fn stop(&mut self) {
        if self.state == SessionState::NotStarted {
            return;
        }
        self.state = SessionState::NotStarted;
        self.board.clear();
        self.next = None;
        self.flush_redraw();
    }

    /// Move the active piece one row down, locking it when it cannot move
    pub fn step_down(&mut self) -> StepOutcome {
        if self.state != SessionState::Running {
            return StepOutcome::Idle;
        }

        if self.board.attempt_move(Direction::Down.movement()) {
            self.flush_redraw();
            return StepOutcome::Moved;
        }

        let Some(active) = self.board.active() else {
            return StepOutcome::Idle;
        };
        if active.anchor.y <= 0 {
            self.end_session();
            return StepOutcome::GameOver;
        }

        self.board.fix();
        let lines = self.board.filled_line_indices();
        if !lines.is_empty() {
            self.outbox.push(Notification::LinesWiped(lines.clone()));
            self.board.clear_lines(&lines);
            let update = self.score.award_lines_wipe(lines.len());
            self.push_score(update);
        }

        let next = match self.next.take() {
            Some(piece) => piece,
            None => self.factory.next_piece(),
        };
        self.spawn(next);
        self.refill_preview();
        self.flush_redraw();
        StepOutcome::Locked { lines: lines.len() }
    }

    /// Award the soft drop bonus, then step down
    pub fn soft_drop(&mut self) -> StepOutcome {
        if self.state != SessionState::Running {
            return StepOutcome::Idle;
        }
        let update = self.score.award_speed_up();
        self.push_score(update);
        self.step_down()
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(Direction::Right)
    }

    /// Rotate the active piece clockwise with wall kicks
    pub fn rotate(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let rotated = self.board.rotate();
        self.flush_redraw();
        rotated
    }

    fn shift(&mut self, direction: Direction) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let moved = self.board.attempt_move(direction.movement());
        self.flush_redraw();
        moved
    }

    /// Apply a player intent; returns whether anything changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop() != StepOutcome::Idle,
            GameAction::Pause => self.toggle_pause(),
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.state = SessionState::Paused;
        self.outbox.push(Notification::Draw);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Running;
        self.outbox.push(Notification::Draw);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Running => self.pause(),
            SessionState::Paused => self.resume(),
            _ => false,
        }
    }

    /// Time until the next fall step, `None` while no session is running
    ///
    /// `max(1, 800 - level * 50)` milliseconds with the default config.
    pub fn fall_delay(&self) -> Option<Duration> {
        if self.state != SessionState::Running {
            return None;
        }
        let reduction = u64::from(self.score.level()).saturating_mul(self.config.fall_delay_step_ms);
        let ms = self
            .config
            .base_fall_delay_ms
            .saturating_sub(reduction)
            .max(MIN_FALL_DELAY_MS);
        Some(Duration::from_millis(ms))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    pub fn score_state(&self) -> blockfall_core::ScoreState {
        self.score.state()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn top_occupied_row(&self) -> usize {
        self.board.top_occupied_row()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(
            &self.board,
            self.next.as_ref(),
            self.score.state(),
            self.state,
        )
    }

    /// Take all queued notifications in emission order
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    pub fn has_notifications(&self) -> bool {
        !self.outbox.is_empty()
    }

    fn spawn(&mut self, mut piece: Piece) {
        piece.anchor = self.board.spawn_position(&piece);
        self.board.set_active(piece);
    }

    fn refill_preview(&mut self) {
        let next = self.factory.next_piece();
        self.outbox.push(Notification::PreviewChanged {
            cells: next.mask.filled().collect(),
            color: next.color,
        });
        self.next = Some(next);
    }

    fn push_score(&mut self, update: ScoreUpdate) {
        self.outbox.push(Notification::ScoreChanged {
            score: update.state.score,
            level: update.state.level,
            leveled_up: update.leveled_up,
        });
    }

    fn flush_redraw(&mut self) {
        if self.board.take_redraw() {
            self.outbox.push(Notification::Draw);
        }
    }

    fn end_session(&mut self) {
        self.state = SessionState::GameOver;
        self.board.clear();
        self.next = None;
        self.outbox.push(Notification::GameOver);
        self.flush_redraw();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
