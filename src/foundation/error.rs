/// Convenience result type used across pagedots.
pub type PageDotsResult<T> = Result<T, PageDotsError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The geometry core itself never fails: configuration values are clamped before layout.
/// Errors only arise when loading configuration from outside or when a raster backend is
/// asked for a surface it cannot allocate.
#[derive(thiserror::Error, Debug)]
pub enum PageDotsError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a rendering backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageDotsError {
    /// Build a [`PageDotsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PageDotsError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PageDotsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
