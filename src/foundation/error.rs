/// Convenience result type used across Tracelane.
pub type TracelaneResult<T> = Result<T, TracelaneError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The layout, viewport, and sampling operations are total and never return
/// errors; only timeline document validation and serialization do.
#[derive(thiserror::Error, Debug)]
pub enum TracelaneError {
    /// Invalid user-provided or timeline document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TracelaneError {
    /// Build a [`TracelaneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TracelaneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
