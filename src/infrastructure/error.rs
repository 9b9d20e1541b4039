use thiserror::Error;

/// Errors surfaced at the shell boundary.
///
/// The text operations themselves are total over the string domain and
/// cannot fail; errors only arise from how the shell drives the crate.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("assistant request already in flight")]
    AssistantBusy,
}

/// Convenience type alias for Results with CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
