use thiserror::Error;

pub type StyleResult<T> = Result<T, StyleError>;

/// Structural failures.
///
/// Styling input never produces one of these: it degrades to a
/// [`crate::api::StyleAdvisory`] instead. Errors are reserved for malformed
/// data containers, unparseable configuration and surface failures.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("plot surface failure: {0}")]
    Surface(String),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
