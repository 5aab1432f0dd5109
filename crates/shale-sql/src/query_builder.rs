use crate::{
    stmt::{ColumnDef, ForeignKeyDef},
    Serializer, Statement,
};

use shale_core::{driver::AutoIncrement, schema::Table, Dialect, Result};

/// Turns table descriptions into DDL for one dialect.
///
/// The `*_statements` methods return the statement tree; the others return it rendered, one
/// string per statement. Nothing is rendered unless every statement of the request could be
/// built, so a failed call never yields part of its output.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    serializer: Serializer<'a>,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(dialect: &'a Dialect) -> QueryBuilder<'a> {
        QueryBuilder {
            serializer: Serializer::new(dialect),
        }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.serializer.dialect()
    }

    pub fn serialize(&self, statements: &[Statement]) -> Vec<String> {
        tracing::trace!(
            dialect = self.dialect().name,
            statements = statements.len(),
            "rendered DDL"
        );

        statements
            .iter()
            .map(|stmt| self.serializer.serialize(stmt))
            .collect()
    }

    pub fn create_table(&self, table: &Table) -> Result<Vec<String>> {
        Ok(self.serialize(&self.create_table_statements(table)?))
    }

    pub fn drop_table(&self, table: &Table) -> Vec<String> {
        self.serialize(&self.drop_table_statements(table))
    }

    pub fn rename_table(&self, table: &Table, new_name: &str) -> Vec<String> {
        self.serialize(&[Statement::alter_table_rename_to(table, new_name)])
    }

    /// Drops the sequence backing `table`'s auto incrementing column. Empty unless the
    /// dialect emulates auto increment with a sequence.
    pub fn drop_sequence(&self, table: &Table) -> Vec<String> {
        if self.uses_sequence(table) {
            self.serialize(&[Statement::drop_sequence_if_exists(table)])
        } else {
            vec![]
        }
    }

    /// See [`alter_table_statements`](QueryBuilder::alter_table_statements).
    pub fn alter_table(&self, table: &Table) -> Result<Vec<String>> {
        Ok(self.serialize(&self.alter_table_statements(table)?))
    }

    /// Sequence (when emulated), then the table with its constraints, then one statement per
    /// index.
    pub fn create_table_statements(&self, table: &Table) -> Result<Vec<Statement>> {
        let mut statements = vec![];

        if self.uses_sequence(table) {
            statements.push(Statement::create_sequence(table));
        }

        statements.push(Statement::create_table(table, self.dialect())?);

        for index in table.indexes() {
            statements.push(Statement::create_index(index, table)?);
        }

        Ok(statements)
    }

    pub fn drop_table_statements(&self, table: &Table) -> Vec<Statement> {
        let mut statements = vec![Statement::drop_table(table)];

        if self.uses_sequence(table) {
            statements.push(Statement::drop_sequence_if_exists(table));
        }

        statements
    }

    /// Statements applying the pending edits of `table`.
    ///
    /// Phases always run in this order, each one skipped when it has nothing to do: drop
    /// indexes, drop foreign keys, drop columns, add columns (one statement), add indexes,
    /// add foreign keys. The order in which edits were declared only matters within a phase.
    ///
    /// Indexes and foreign keys may only reference columns declared on `table` by this edit;
    /// any other column fails with a not found error. An added auto incrementing column gets
    /// its sequence created first when the dialect emulates auto increment.
    pub fn alter_table_statements(&self, table: &Table) -> Result<Vec<Statement>> {
        let mut statements = vec![];

        for name in table.indexes_to_drop() {
            statements.push(Statement::drop_index(table, name));
        }

        for name in table.foreign_keys_to_drop() {
            statements.push(Statement::alter_table_drop_foreign_key(table, name));
        }

        for name in table.columns_to_drop() {
            statements.push(Statement::alter_table_drop_column(table, name));
        }

        let columns = table
            .added_columns()
            .map(|column| ColumnDef::from_schema(column, table, self.dialect()))
            .collect::<Result<Vec<_>>>()?;

        let adds_autoincrement = table
            .added_columns()
            .any(|column| table.is_autoincrement(column));

        if adds_autoincrement && self.uses_sequence(table) {
            statements.push(Statement::create_sequence(table));
        }

        if !columns.is_empty() {
            statements.push(Statement::alter_table_add_columns(table, columns));
        }

        for index in table.indexes() {
            statements.push(Statement::create_index(index, table)?);
        }

        for foreign_key in table.foreign_keys() {
            let foreign_key = ForeignKeyDef::from_schema(foreign_key, table)?;
            statements.push(Statement::alter_table_add_foreign_key(table, foreign_key));
        }

        Ok(statements)
    }

    fn uses_sequence(&self, table: &Table) -> bool {
        self.dialect().auto_increment == AutoIncrement::Sequence
            && table.autoincrement_column().is_some()
    }
}
