use super::Error;

/// Error when the migration editing API is called out of sequence.
///
/// A table edit must be started with `table()` before columns, indexes or foreign keys can be
/// added, and must be finished with `create()`, `drop()`, `alter()` or `rename()` before the
/// next one starts. Violations indicate a defect in the calling migration script and are never
/// retried.
#[derive(Debug)]
pub(super) struct IncorrectUsage {
    message: Box<str>,
}

impl std::error::Error for IncorrectUsage {}

impl core::fmt::Display for IncorrectUsage {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "incorrect usage: {}", self.message)
    }
}

impl Error {
    /// Creates an incorrect usage error.
    pub fn incorrect_usage(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::IncorrectUsage(IncorrectUsage {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an incorrect usage error.
    pub fn is_incorrect_usage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IncorrectUsage(_))
    }
}
