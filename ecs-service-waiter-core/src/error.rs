//! Error types for the ECS service waiter

use thiserror::Error;

/// Errors raised before any polling begins.
///
/// Transient conditions met while polling are never surfaced through this type;
/// the phases report them through logs and keep waiting until the deadline.
#[derive(Debug, Error)]
pub enum WaiterError {
    /// The invocation is unusable (empty service list, zero durations, ...).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WaiterError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

pub type WaiterResult<T> = Result<T, WaiterError>;
