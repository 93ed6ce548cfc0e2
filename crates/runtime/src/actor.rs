//! Game actor - owns the engine and drives it from commands and timers.
//!
//! One task processes, one at a time, whichever comes first of: the next
//! command, the fall deadline, or the next key-repeat deadline. Notifications
//! drained from the engine after each event are forwarded unchanged.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use blockfall_core::GameSnapshot;
use blockfall_engine::{EngineError, Game, Notification, StepOutcome};
use blockfall_input::InputHandler;
use blockfall_types::{GameAction, Key};

use crate::config::RuntimeConfig;
use crate::error::RuntimeError;

/// Command delivered to the game actor.
#[derive(Debug)]
pub enum Command {
    Start(oneshot::Sender<Result<(), EngineError>>),
    Stop,
    Pause,
    Resume,
    TogglePause,
    Press(Key),
    Release(Key),
    Snapshot(oneshot::Sender<GameSnapshot>),
    Shutdown,
}

/// Async handle to a running actor.
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    cmd_tx: mpsc::Sender<Command>,
}

impl RuntimeHandle {
    async fn send(&self, cmd: Command) -> Result<(), RuntimeError> {
        self.cmd_tx.send(cmd).await.map_err(|_| RuntimeError::Closed)
    }

    /// Start a new session
    pub async fn start(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Start(tx)).await?;
        let result = rx.await.map_err(|_| RuntimeError::Closed)?;
        Ok(result?)
    }

    pub async fn stop(&self) -> Result<(), RuntimeError> {
        self.send(Command::Stop).await
    }

    pub async fn pause(&self) -> Result<(), RuntimeError> {
        self.send(Command::Pause).await
    }

    pub async fn resume(&self) -> Result<(), RuntimeError> {
        self.send(Command::Resume).await
    }

    pub async fn toggle_pause(&self) -> Result<(), RuntimeError> {
        self.send(Command::TogglePause).await
    }

    pub async fn press(&self, key: Key) -> Result<(), RuntimeError> {
        self.send(Command::Press(key)).await
    }

    pub async fn release(&self, key: Key) -> Result<(), RuntimeError> {
        self.send(Command::Release(key)).await
    }

    pub async fn snapshot(&self) -> Result<GameSnapshot, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx)).await?;
        rx.await.map_err(|_| RuntimeError::Closed)
    }

    /// Ask the actor to exit; pending commands before this one still run
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.send(Command::Shutdown).await
    }
}

/// Spawn the actor on the current tokio runtime.
pub fn spawn(
    config: RuntimeConfig,
) -> (
    RuntimeHandle,
    mpsc::UnboundedReceiver<Notification>,
    JoinHandle<()>,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(config.queue_capacity.max(1));
    let (notify_tx, notify_rx) = mpsc::unbounded_channel::<Notification>();

    let actor = Actor::new(&config, notify_tx);
    let task = tokio::spawn(actor.run(cmd_rx));

    (RuntimeHandle { cmd_tx }, notify_rx, task)
}

struct Actor {
    game: Game,
    input: InputHandler,
    notify_tx: mpsc::UnboundedSender<Notification>,
    fall_deadline: Option<Instant>,
    /// Point in time the input handler's timers have been advanced to
    input_clock: Instant,
    log_events: bool,
}

impl Actor {
    fn new(config: &RuntimeConfig, notify_tx: mpsc::UnboundedSender<Notification>) -> Self {
        let mut input = InputHandler::with_config(config.repeat_start_delay_ms, config.repeat_period_ms)
            .with_soft_drop_period_ms(config.soft_drop_period_ms);
        if let Some(timeout) = config.key_release_timeout_ms {
            input = input.with_key_release_timeout_ms(timeout);
        }

        Self {
            game: Game::new(config.engine.clone()),
            input,
            notify_tx,
            fall_deadline: None,
            input_clock: Instant::now(),
            log_events: config.log_events,
        }
    }

    async fn run(mut self, mut cmd_rx: mpsc::Receiver<Command>) {
        self.log("actor started");

        loop {
            let fall = self.fall_deadline;
            let repeat = self.repeat_deadline();

            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => match cmd {
                    Some(Command::Shutdown) | None => break,
                    Some(cmd) => self.handle_command(cmd),
                },
                _ = sleep_until_opt(fall) => self.on_fall(),
                _ = sleep_until_opt(repeat) => self.on_repeat(),
            }

            // Timers never run without a live session.
            if self.game.fall_delay().is_none() {
                self.fall_deadline = None;
            }
            self.flush();
        }

        self.log("actor stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start(reply) => {
                let result = self.game.start();
                if result.is_ok() {
                    self.input.reset();
                    self.input_clock = Instant::now();
                    self.arm_fall();
                    self.log(format_args!("session started (level {})", self.game.level()));
                }
                let _ = reply.send(result);
            }
            Command::Stop => {
                self.game.stop();
                self.input.reset();
                self.fall_deadline = None;
                self.log("session stopped");
            }
            Command::Pause => {
                if self.game.pause() {
                    self.input.reset();
                }
            }
            Command::Resume => {
                if self.game.resume() {
                    self.arm_fall_now();
                }
            }
            Command::TogglePause => self.apply(GameAction::Pause),
            Command::Press(key) => {
                self.sync_input();
                if let Some(action) = self.input.handle_key_press(key) {
                    self.apply(action);
                }
            }
            Command::Release(key) => {
                self.sync_input();
                self.input.handle_key_release(key);
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(self.game.snapshot());
            }
            Command::Shutdown => {}
        }
    }

    fn on_fall(&mut self) {
        let outcome = self.game.step_down();
        self.after_step(outcome);
        self.arm_fall();
    }

    fn on_repeat(&mut self) {
        self.sync_input();
    }

    /// Advance the input timers to now and apply every repeat that came due
    fn sync_input(&mut self) {
        let elapsed = Instant::now().saturating_duration_since(self.input_clock);
        let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        self.input_clock += Duration::from_millis(u64::from(elapsed_ms));

        for action in self.input.update(elapsed_ms) {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::SoftDrop => {
                // Catch-up repeats queued behind a lock belong to the old piece.
                if !self.input.is_held(Key::Down) {
                    return;
                }
                let outcome = self.game.soft_drop();
                self.after_step(outcome);
                // Any step restarts the gravity interval.
                if outcome != StepOutcome::Idle {
                    self.arm_fall();
                }
            }
            GameAction::Pause => {
                if self.game.toggle_pause() {
                    self.input.reset();
                    self.arm_fall_now();
                }
            }
            other => {
                self.game.apply_action(other);
            }
        }
    }

    fn after_step(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Locked { lines } => {
                // A new piece must not inherit a held soft drop.
                self.input.handle_key_release(Key::Down);
                if lines > 0 {
                    self.log(format_args!("wiped {} line(s), score {}", lines, self.game.score()));
                }
            }
            StepOutcome::GameOver => {
                self.input.reset();
                self.fall_deadline = None;
                self.log(format_args!("game over, final score {}", self.game.score()));
            }
            StepOutcome::Moved | StepOutcome::Idle => {}
        }
    }

    fn arm_fall(&mut self) {
        self.fall_deadline = self.game.fall_delay().map(|delay| Instant::now() + delay);
    }

    /// Step at once, then continue at the normal cadence
    fn arm_fall_now(&mut self) {
        self.fall_deadline = self.game.fall_delay().map(|_| Instant::now());
    }

    fn repeat_deadline(&self) -> Option<Instant> {
        self.input
            .next_due_in()
            .map(|ms| self.input_clock + Duration::from_millis(u64::from(ms)))
    }

    fn flush(&mut self) {
        for notification in self.game.drain_notifications() {
            if notification != Notification::Draw {
                self.log(format_args!("-> {}", notification.name()));
            }
            if self.notify_tx.send(notification).is_err() {
                // Nobody listens anymore; keep the game running regardless.
                break;
            }
        }
    }

    fn log(&self, message: impl std::fmt::Display) {
        if self.log_events {
            eprintln!("[Runtime] {}", message);
        }
    }
}

async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
