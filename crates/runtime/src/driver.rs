//! Blocking driver.
//!
//! Bridges a synchronous host loop (like the terminal UI) with the async
//! actor by owning its own tokio runtime.

use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use blockfall_core::GameSnapshot;
use blockfall_engine::Notification;
use blockfall_types::Key;

use crate::actor::{spawn, RuntimeHandle};
use crate::config::RuntimeConfig;
use crate::error::RuntimeError;

/// Running game actor plus the runtime it lives on.
pub struct Driver {
    rt: Runtime,
    handle: RuntimeHandle,
    notify_rx: mpsc::UnboundedReceiver<Notification>,
    task: Option<JoinHandle<()>>,
}

impl Driver {
    pub fn start(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        let rt = Runtime::new()?;
        let (handle, notify_rx, task) = {
            let _guard = rt.enter();
            spawn(config)
        };

        Ok(Self {
            rt,
            handle,
            notify_rx,
            task: Some(task),
        })
    }

    /// Start with [`RuntimeConfig::from_env`].
    pub fn start_from_env() -> Result<Self, RuntimeError> {
        Self::start(RuntimeConfig::from_env())
    }

    /// Async handle for callers that also run their own tasks on this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn new_game(&self) -> Result<(), RuntimeError> {
        self.rt.block_on(self.handle.start())
    }

    pub fn stop(&self) -> Result<(), RuntimeError> {
        self.rt.block_on(self.handle.stop())
    }

    pub fn pause(&self) -> Result<(), RuntimeError> {
        self.rt.block_on(self.handle.pause())
    }

    pub fn resume(&self) -> Result<(), RuntimeError> {
        self.rt.block_on(self.handle.resume())
    }

    pub fn toggle_pause(&self) -> Result<(), RuntimeError> {
        self.rt.block_on(self.handle.toggle_pause())
    }

    pub fn press(&self, key: Key) -> Result<(), RuntimeError> {
        self.rt.block_on(self.handle.press(key))
    }

    pub fn release(&self, key: Key) -> Result<(), RuntimeError> {
        self.rt.block_on(self.handle.release(key))
    }

    pub fn snapshot(&self) -> Result<GameSnapshot, RuntimeError> {
        self.rt.block_on(self.handle.snapshot())
    }

    pub fn try_recv(&mut self) -> Option<Notification> {
        self.notify_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next notification
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Notification> {
        let rx = &mut self.notify_rx;
        self.rt
            .block_on(async { tokio::time::timeout(timeout, rx.recv()).await.ok().flatten() })
    }

    /// Stop the actor and wait for it to exit
    pub fn shutdown(mut self) -> Result<(), RuntimeError> {
        self.rt.block_on(self.handle.shutdown())?;
        if let Some(task) = self.task.take() {
            self.rt.block_on(task).map_err(|_| RuntimeError::Closed)?;
        }
        Ok(())
    }
}
