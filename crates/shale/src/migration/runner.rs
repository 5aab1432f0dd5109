use super::{Batch, Migration, Plan};

use shale_core::{driver::Response, Connection, Dialect, Result};
use shale_sql::QueryBuilder;

use std::fmt;

/// Which half of a migration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// Applies a migration to a connection.
///
/// Statements run one at a time, in batch order. When a statement fails, the runner rolls the
/// transaction back (if the migration uses one), drops every table and sequence the batch
/// created before the failing statement, and returns the original error. A failed commit is
/// rolled back and returned without dropping anything.
#[derive(Debug)]
pub struct Runner<M, C> {
    migration: M,
    connection: C,

    /// Statements executed by the last successful run
    executed: Vec<String>,
}

impl<M: Migration, C: Connection> Runner<M, C> {
    pub fn new(migration: M, connection: C) -> Runner<M, C> {
        Runner {
            migration,
            connection,
            executed: vec![],
        }
    }

    pub fn migration(&self) -> &M {
        &self.migration
    }

    pub fn into_connection(self) -> C {
        self.connection
    }

    /// Statements executed by the last successful call to [`migrate`](Runner::migrate) or
    /// [`rollback`](Runner::rollback).
    pub fn executed_queries(&self) -> &[String] {
        &self.executed
    }

    /// Renders one direction of the migration without executing anything.
    pub fn plan(&self, direction: Direction) -> Result<Batch> {
        let mut plan = Plan::new(self.connection.dialect());

        match direction {
            Direction::Up => self.migration.up(&mut plan)?,
            Direction::Down => self.migration.down(&mut plan)?,
        }

        plan.finish()
    }

    pub async fn migrate(&mut self) -> Result<Vec<Response>> {
        self.run(Direction::Up).await
    }

    pub async fn rollback(&mut self) -> Result<Vec<Response>> {
        self.run(Direction::Down).await
    }

    async fn run(&mut self, direction: Direction) -> Result<Vec<Response>> {
        self.executed.clear();

        let batch = self.plan(direction)?;
        let dialect = *self.connection.dialect();
        let transactional = self.migration.use_transaction();
        let migration = self.migration.name().to_string();

        tracing::info!(
            migration = %migration,
            %direction,
            statements = batch.len(),
            transactional,
            "running migration"
        );

        if transactional {
            self.connection.start_transaction().await?;
        }

        let mut responses = Vec::with_capacity(batch.len());

        for (position, sql) in batch.statements().iter().enumerate() {
            tracing::debug!(sql = %sql, position, "executing statement");

            match self.connection.execute(sql).await {
                Ok(response) => responses.push(response),
                Err(err) => {
                    tracing::warn!(
                        migration = %migration,
                        %direction,
                        position,
                        error = %err,
                        "migration failed"
                    );
                    self.compensate(&dialect, &batch, position, transactional)
                        .await;
                    return Err(err);
                }
            }
        }

        if transactional {
            if let Err(err) = self.connection.commit().await {
                tracing::warn!(migration = %migration, %direction, error = %err, "commit failed");
                self.rollback_quietly().await;
                return Err(err);
            }
        }

        self.executed = batch.statements().to_vec();

        tracing::info!(
            migration = %migration,
            %direction,
            statements = responses.len(),
            "migration finished"
        );

        Ok(responses)
    }

    async fn rollback_quietly(&mut self) {
        if let Err(err) = self.connection.rollback().await {
            tracing::error!(error = %err, "rollback failed");
        }
    }

    /// Undoes what a batch did before the statement at `failed_at` failed.
    ///
    /// Failures here are logged and otherwise ignored; the caller reports the error that
    /// triggered compensation.
    async fn compensate(
        &mut self,
        dialect: &Dialect,
        batch: &Batch,
        failed_at: usize,
        transactional: bool,
    ) {
        if transactional {
            self.rollback_quietly().await;
        }

        let builder = QueryBuilder::new(dialect);

        for (table, statements) in batch.undo_before(&builder, failed_at) {
            for sql in statements {
                tracing::warn!(table = table.name(), sql = %sql, "dropping created object");

                if let Err(err) = self.connection.execute(&sql).await {
                    tracing::error!(sql = %sql, error = %err, "compensating statement failed");
                }
            }
        }
    }
}
