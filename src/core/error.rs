//! Error types for the logger

pub type Result<T> = std::result::Result<T, LogError>;

/// The taxonomy is deliberately flat: a write either reaches the sink or it
/// does not. Caller-location resolution failures are recovered locally and
/// never surface here.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Sink write failure, propagated to the caller of the emit method.
    /// Never retried, never buffered for later resend.
    #[error("write to sink failed: {0}")]
    Write(#[from] std::io::Error),
}
