/// Convenience result type used across Brickwork.
pub type BrickworkResult<T> = Result<T, BrickworkError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Degenerate measurements and vanished elements are recovered inside the
/// engine (logged, never surfaced); the variants here are the cases a caller
/// can actually act on.
#[derive(thiserror::Error, Debug)]
pub enum BrickworkError {
    /// Invalid user-provided options or scene data.
    #[error("config error: {0}")]
    Config(String),

    /// A required measurement could not be taken.
    #[error("measure error: {0}")]
    Measure(String),

    /// A layout mode name that is not registered. Fatal by design: continuing
    /// would silently produce a wrong layout, not merely an imprecise one.
    #[error("unknown layout mode: {0}")]
    UnknownMode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrickworkError {
    /// Build a [`BrickworkError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BrickworkError::Measure`] value.
    pub fn measure(msg: impl Into<String>) -> Self {
        Self::Measure(msg.into())
    }

    /// Build a [`BrickworkError::UnknownMode`] value.
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMode(mode.into())
    }

    /// Build a [`BrickworkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
