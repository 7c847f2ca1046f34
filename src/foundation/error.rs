/// Crate-wide result alias.
pub type BeamResult<T> = Result<T, BeamError>;

#[derive(thiserror::Error, Debug)]
/// Errors raised by the fallible surfaces around the geometry engine.
///
/// The engine itself never fails; it answers `None` for inputs it cannot trace.
/// These errors cover configuration, device tables, and path-data parsing.
pub enum BeamError {
    /// Invalid configuration or input value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown key in a lookup table.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Serialization or parse failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BeamError {
    /// Build a [`BeamError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BeamError::Lookup`].
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Build a [`BeamError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BeamError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
