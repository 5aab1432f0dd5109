use super::Error;

/// Error from the database while executing a statement.
#[derive(Debug)]
pub(super) struct QueryExecution {
    sql: Box<str>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for QueryExecution {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for QueryExecution {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to execute `{}`: ", self.sql)?;

        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a statement the database failed to execute.
    ///
    /// Connection adapters use this to wrap driver-specific errors, keeping the offending SQL
    /// alongside the cause.
    pub fn query_execution(
        sql: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::QueryExecution(QueryExecution {
            sql: sql.into().into(),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a query execution error.
    pub fn is_query_execution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::QueryExecution(_))
    }
}
