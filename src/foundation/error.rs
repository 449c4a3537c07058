/// Convenience result alias used across the crate.
pub type SpinResult<T> = Result<T, SpinError>;

/// Errors reported synchronously by the planner and the animation controller.
///
/// Every variant is raised before any state transition happens, so a failed `start`
/// never leaves a half-started spin behind.
#[derive(thiserror::Error, Debug)]
pub enum SpinError {
    /// The entry list has no entries.
    #[error("empty dataset: the entry list has no entries")]
    EmptyDataset,

    /// No entry carries the requested ticket number.
    #[error("target not found: no entry with ticket '{0}'")]
    TargetNotFound(String),

    /// `start` was called while a spin is still running.
    #[error("already spinning: a spin is in progress")]
    AlreadySpinning,

    /// Settings or curve parameters are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Entry list or settings could not be decoded.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its original source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpinError {
    /// Build a [`SpinError::TargetNotFound`] for `ticket`.
    pub fn target_not_found(ticket: impl Into<String>) -> Self {
        Self::TargetNotFound(ticket.into())
    }

    /// Build a [`SpinError::InvalidConfiguration`].
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`SpinError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
