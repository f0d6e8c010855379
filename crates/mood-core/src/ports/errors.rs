use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("no async runtime available to schedule timer")]
    NoRuntime,
}
