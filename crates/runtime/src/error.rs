use blockfall_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("game runtime has shut down")]
    Closed,
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to create tokio runtime: {0}")]
    Io(#[from] std::io::Error),
}
