use super::Error;

/// Error when a name is referenced but never defined.
///
/// Raised while rendering a table, when a primary key, index or foreign key lists a column the
/// table does not define.
#[derive(Debug)]
pub(super) struct NotFound {
    message: Box<str>,
}

impl std::error::Error for NotFound {}

impl core::fmt::Display for NotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not found: {}", self.message)
    }
}

impl Error {
    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFound {
            message: message.into().into(),
        }))
    }

    /// Creates a not found error for a column name.
    pub fn column_not_found(name: &str) -> Error {
        Error::not_found(format!("column \"{name}\""))
    }

    /// Returns `true` if this error is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotFound(_))
    }
}
