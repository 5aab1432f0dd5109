mod dialect;
pub use dialect::{
    AutoIncrement, Dialect, DropIndexStyle, IndexMethodPlacement, PrimaryKeyStyle, SqlType,
    TypeMapping,
};

mod response;
pub use response::Response;

use crate::async_trait;

use std::fmt::Debug;

/// A database connection migrations are applied through.
///
/// Each call completes before the next one is issued; implementations need not support
/// overlapping statements.
#[async_trait]
pub trait Connection: Debug + Send {
    /// Rendering rules of the database behind this connection.
    fn dialect(&self) -> &Dialect;

    /// Execute a single SQL statement.
    ///
    /// Failures are reported as [`Error::query_execution`](crate::Error::query_execution).
    async fn execute(&mut self, sql: &str) -> crate::Result<Response>;

    async fn start_transaction(&mut self) -> crate::Result<()>;

    async fn commit(&mut self) -> crate::Result<()>;

    async fn rollback(&mut self) -> crate::Result<()>;
}

#[async_trait]
impl<C: Connection + ?Sized> Connection for &mut C {
    fn dialect(&self) -> &Dialect {
        (**self).dialect()
    }

    async fn execute(&mut self, sql: &str) -> crate::Result<Response> {
        (**self).execute(sql).await
    }

    async fn start_transaction(&mut self) -> crate::Result<()> {
        (**self).start_transaction().await
    }

    async fn commit(&mut self) -> crate::Result<()> {
        (**self).commit().await
    }

    async fn rollback(&mut self) -> crate::Result<()> {
        (**self).rollback().await
    }
}

#[async_trait]
impl<C: Connection + ?Sized> Connection for Box<C> {
    fn dialect(&self) -> &Dialect {
        (**self).dialect()
    }

    async fn execute(&mut self, sql: &str) -> crate::Result<Response> {
        (**self).execute(sql).await
    }

    async fn start_transaction(&mut self) -> crate::Result<()> {
        (**self).start_transaction().await
    }

    async fn commit(&mut self) -> crate::Result<()> {
        (**self).commit().await
    }

    async fn rollback(&mut self) -> crate::Result<()> {
        (**self).rollback().await
    }
}
