//! Error types for casewise.

use thiserror::Error;

use crate::data::Rejection;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Invalid match argument")]
    InvalidMatchArgument,

    #[error("Bad match argument. Must be scalar or function")]
    BadMatchArgument,

    #[error("matching against null value")]
    NullSwitch,

    #[error("Invalid result for switch argument")]
    InvalidSwitchResult,

    /// Shares its message with [`Error::InvalidSwitchResult`]; only the variant tells them apart.
    #[error("Invalid result for switch argument")]
    InvalidCaseResult { index: usize },

    #[error("Action did not resolve to a valid Scalar or Async value.")]
    InvalidActionResult,

    #[error("No match and no default")]
    NoMatch,

    #[error("{0} not available")]
    Unavailable(&'static str),

    #[error("{0}")]
    Rejected(Rejection),

    #[error("Failed to resolve: {0}")]
    Failed(#[source] Box<Error>),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The switch handed to the entry point is not usable.
    InvalidInvocation,
    InvalidSwitchResolution,
    InvalidCaseResolution,
    InvalidActionResolution,
    NoMatchNoDefault,
    /// A terminal operation was called on the wrong mode.
    ModeMisuse,
    /// A pending value settled with a rejection.
    Rejected,
}

impl Error {
    /// Wrap a resolution failure the way the immediate terminal reports it.
    pub(crate) fn failed(inner: Error) -> Self {
        Error::Failed(Box::new(inner))
    }

    /// The innermost error, looking through any `Failed to resolve` wrapping.
    pub fn root(&self) -> &Error {
        match self {
            Error::Failed(inner) => inner.root(),
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Failed(inner) => inner.kind(),
            Error::InvalidMatchArgument | Error::BadMatchArgument => ErrorKind::InvalidInvocation,
            Error::NullSwitch | Error::InvalidSwitchResult => ErrorKind::InvalidSwitchResolution,
            Error::InvalidCaseResult { .. } => ErrorKind::InvalidCaseResolution,
            Error::InvalidActionResult => ErrorKind::InvalidActionResolution,
            Error::NoMatch => ErrorKind::NoMatchNoDefault,
            Error::Unavailable(_) => ErrorKind::ModeMisuse,
            Error::Rejected(_) => ErrorKind::Rejected,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, Error::Failed(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_carries_inner() {
        let err = Error::failed(Error::NoMatch);
        assert_eq!(err.to_string(), "Failed to resolve: No match and no default");
        assert!(err.is_wrapped());
    }

    #[test]
    fn test_root_and_kind_look_through_wrapping() {
        let err = Error::failed(Error::failed(Error::InvalidSwitchResult));
        assert!(matches!(err.root(), Error::InvalidSwitchResult));
        assert_eq!(err.kind(), ErrorKind::InvalidSwitchResolution);
    }

    #[test]
    fn test_case_and_switch_share_message() {
        assert_eq!(
            Error::InvalidCaseResult { index: 2 }.to_string(),
            Error::InvalidSwitchResult.to_string()
        );
        assert_eq!(Error::InvalidCaseResult { index: 2 }.kind(), ErrorKind::InvalidCaseResolution);
    }

    #[test]
    fn test_mode_misuse_message() {
        assert_eq!(Error::Unavailable("exe").to_string(), "exe not available");
        assert_eq!(Error::Unavailable("match").kind(), ErrorKind::ModeMisuse);
    }
}
