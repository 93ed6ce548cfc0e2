//! Runtime configuration

use blockfall_engine::EngineConfig;
use blockfall_types::{KEY_REPEAT_PERIOD_MS, KEY_REPEAT_START_DELAY_MS, SOFT_DROP_REPEAT_PERIOD_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    /// Capacity of the bounded command channel
    pub queue_capacity: usize,
    /// Print lifecycle events to stderr
    pub log_events: bool,
    pub repeat_start_delay_ms: u32,
    pub repeat_period_ms: u32,
    pub soft_drop_period_ms: u32,
    /// Auto-release held keys after this long without a press (terminals
    /// without release events)
    pub key_release_timeout_ms: Option<u32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            queue_capacity: 64,
            log_events: false,
            repeat_start_delay_ms: KEY_REPEAT_START_DELAY_MS,
            repeat_period_ms: KEY_REPEAT_PERIOD_MS,
            soft_drop_period_ms: SOFT_DROP_REPEAT_PERIOD_MS,
            key_release_timeout_ms: None,
        }
    }
}

impl RuntimeConfig {
    /// Engine settings from [`EngineConfig::from_env`] plus `BLOCKFALL_QUEUE`
    /// and `BLOCKFALL_LOG`.
    pub fn from_env() -> Self {
        use std::env;

        let queue_capacity = env::var("BLOCKFALL_QUEUE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(64);

        let log_events = env::var("BLOCKFALL_LOG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            engine: EngineConfig::from_env(),
            queue_capacity,
            log_events,
            ..Self::default()
        }
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_config_from_env() {
        // This test just ensures it doesn't panic
        let config = RuntimeConfig::from_env();
        assert!(config.repeat_period_ms > 0);
    }

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.queue_capacity, 64);
        assert!(!config.log_events);
        assert_eq!(config.repeat_start_delay_ms, 100);
        assert_eq!(config.key_release_timeout_ms, None);
        assert_eq!(
            RuntimeConfig::default()
                .with_key_release_timeout_ms(150)
                .key_release_timeout_ms,
            Some(150)
        );
    }
}
