use thiserror::Error;

/// Failures reported by a [`Host`](crate::Host) or [`Surface`](crate::Surface).
///
/// None of these ever reach the page embedding the renderer: the renderer
/// logs them and degrades (skips a frame, or stops animating).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwirlError {
    #[error("surface error: {0}")]
    Surface(String),
    #[error("could not schedule frame: {0}")]
    Schedule(String),
    #[error("could not observe resize: {0}")]
    Observe(String),
}

/// Rejected configuration entry. The caller keeps the default for the field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown configuration key `{0}`")]
    UnknownKey(String),
    #[error("`{key}` expects a number, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
    #[error("`{key}` expects true or false, got `{value}`")]
    InvalidBool { key: &'static str, value: String },
    #[error("`{key}` out of range: {value}")]
    OutOfRange { key: &'static str, value: f64 },
}
