use super::Error;

/// Error when a value handed to a schema element constructor is not allowed.
///
/// This occurs when:
/// - A column type, index type or index method string does not name a known variant
/// - A foreign key action string does not name a known action
/// - A foreign key references a different number of columns than it declares
/// - A column is added twice to the same table
///
/// These errors are raised while a migration script builds its edits, before any SQL is
/// rendered.
#[derive(Debug)]
pub(super) struct InvalidArgumentValue {
    message: Box<str>,
}

impl std::error::Error for InvalidArgumentValue {}

impl core::fmt::Display for InvalidArgumentValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument value: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid argument value error.
    pub fn invalid_argument_value(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgumentValue(InvalidArgumentValue {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid argument value error.
    pub fn is_invalid_argument_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidArgumentValue(_))
    }
}
