/// Convenience result type used across Ringlet.
pub type RingletResult<T> = Result<T, RingletError>;

/// Top-level error taxonomy used by the rendering boundary.
///
/// State mutation on the widget never fails; invalid inputs are coerced. Errors only surface when
/// a drawing backend rejects a command (e.g. an oversized raster target).
#[derive(thiserror::Error, Debug)]
pub enum RingletError {
    /// Invalid caller-provided data that cannot be coerced (e.g. a malformed pixel buffer).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while issuing drawing commands to a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RingletError {
    /// Build a [`RingletError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RingletError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
