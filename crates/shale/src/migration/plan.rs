use super::{Batch, Created};

use shale_core::{
    schema::{Column, ColumnList, PrimaryKey, Table},
    Dialect, Error, Result,
};
use shale_sql::{QueryBuilder, Statement};

use std::mem;

/// Collects the edits a migration script declares and renders them into a [`Batch`].
///
/// At most one table is edited at a time. [`table`](Plan::table) starts an edit; the column,
/// index and foreign key methods extend it; [`create`](Plan::create), [`drop`](Plan::drop),
/// [`alter`](Plan::alter) and [`rename`](Plan::rename) render it and end it.
///
/// ```
/// # use shale::{Column, Dialect, Plan};
/// # fn main() -> shale::Result<()> {
/// let mut plan = Plan::new(&Dialect::SQLITE);
/// plan.table("posts", true)?
///     .add_column(Column::new("title", "string")?)?
///     .create()?;
///
/// let batch = plan.finish()?;
/// assert_eq!(
///     batch.statements(),
///     [r#"CREATE TABLE "posts" ("id" integer PRIMARY KEY AUTOINCREMENT,"title" varchar(255) NOT NULL);"#]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Plan<'a> {
    builder: QueryBuilder<'a>,
    edit: Edit,
    batch: Batch,
}

#[derive(Debug)]
enum Edit {
    Idle,
    Editing(Table),
}

impl<'a> Plan<'a> {
    pub fn new(dialect: &'a Dialect) -> Plan<'a> {
        Plan {
            builder: QueryBuilder::new(dialect),
            edit: Edit::Idle,
            batch: Batch::new(),
        }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.builder.dialect()
    }

    /// Statements rendered so far.
    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    /// Starts editing `name`.
    ///
    /// Fails with an incorrect usage error while another table is being edited.
    pub fn table(
        &mut self,
        name: impl Into<String>,
        primary_key: impl Into<PrimaryKey>,
    ) -> Result<&mut Self> {
        let name = name.into();

        if let Edit::Editing(table) = &self.edit {
            return Err(Error::incorrect_usage(format!(
                "cannot start editing table \"{name}\" while table \"{}\" is being edited",
                table.name()
            )));
        }

        self.edit = Edit::Editing(Table::new(name, primary_key));
        Ok(self)
    }

    pub fn add_column(&mut self, column: Column) -> Result<&mut Self> {
        self.editing("add_column")?.add_column(column)?;
        Ok(self)
    }

    pub fn add_index(
        &mut self,
        columns: impl Into<ColumnList>,
        ty: &str,
        method: &str,
    ) -> Result<&mut Self> {
        self.editing("add_index")?.add_index(columns, ty, method)?;
        Ok(self)
    }

    /// Adds a foreign key referencing `referenced_table.id`, restricting deletes and updates.
    pub fn add_foreign_key(
        &mut self,
        columns: impl Into<ColumnList>,
        referenced_table: impl Into<String>,
    ) -> Result<&mut Self> {
        self.editing("add_foreign_key")?
            .add_foreign_key(columns, referenced_table)?;
        Ok(self)
    }

    pub fn add_foreign_key_with(
        &mut self,
        columns: impl Into<ColumnList>,
        referenced_table: impl Into<String>,
        referenced_columns: impl Into<ColumnList>,
        on_delete: &str,
        on_update: &str,
    ) -> Result<&mut Self> {
        self.editing("add_foreign_key_with")?.add_foreign_key_with(
            columns,
            referenced_table,
            referenced_columns,
            on_delete,
            on_update,
        )?;
        Ok(self)
    }

    pub fn drop_column(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.editing("drop_column")?.drop_column(name);
        Ok(self)
    }

    pub fn drop_index(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.editing("drop_index")?.drop_index(name);
        Ok(self)
    }

    pub fn drop_foreign_key(&mut self, columns: impl Into<ColumnList>) -> Result<&mut Self> {
        self.editing("drop_foreign_key")?.drop_foreign_key(columns);
        Ok(self)
    }

    /// Renders the edited table as a new table.
    pub fn create(&mut self) -> Result<&mut Self> {
        let table = self.finish_edit("create")?;
        let statements = self.builder.create_table_statements(&table)?;
        self.push_created(table, &statements);
        Ok(self)
    }

    pub fn drop(&mut self) -> Result<&mut Self> {
        let table = self.finish_edit("drop")?;
        self.batch.extend(self.builder.drop_table(&table));
        Ok(self)
    }

    /// Renders the pending edits against the existing table.
    pub fn alter(&mut self) -> Result<&mut Self> {
        let table = self.finish_edit("alter")?;
        let statements = self.builder.alter_table_statements(&table)?;
        self.push_created(table, &statements);
        Ok(self)
    }

    pub fn rename(&mut self, new_name: &str) -> Result<&mut Self> {
        let table = self.finish_edit("rename")?;
        self.batch
            .extend(self.builder.rename_table(&table, new_name));
        Ok(self)
    }

    /// Appends a raw statement. Fails while a table is being edited.
    pub fn execute(&mut self, sql: impl Into<String>) -> Result<&mut Self> {
        if let Edit::Editing(table) = &self.edit {
            return Err(Error::incorrect_usage(format!(
                "cannot execute a statement while table \"{}\" is being edited",
                table.name()
            )));
        }

        self.batch.push(sql);
        Ok(self)
    }

    /// Returns the rendered batch.
    ///
    /// Fails with an incorrect usage error if an edit was never finished.
    pub fn finish(self) -> Result<Batch> {
        match self.edit {
            Edit::Idle => Ok(self.batch),
            Edit::Editing(table) => Err(Error::incorrect_usage(format!(
                "table \"{}\" was edited but never created, dropped, altered or renamed",
                table.name()
            ))),
        }
    }

    /// Appends `statements`, recording the tables and sequences they create.
    fn push_created(&mut self, table: Table, statements: &[Statement]) {
        let offset = self.batch.len();
        let position = |predicate: fn(&Statement) -> bool| {
            statements
                .iter()
                .position(predicate)
                .map(|index| offset + index)
        };

        let table_at = position(Statement::is_create_table);
        let sequence_at = position(Statement::is_create_sequence);

        self.batch.extend(self.builder.serialize(statements));

        if table_at.is_some() || sequence_at.is_some() {
            self.batch.record_created(Created {
                table,
                table_at,
                sequence_at,
            });
        }
    }

    fn editing(&mut self, operation: &str) -> Result<&mut Table> {
        match &mut self.edit {
            Edit::Editing(table) => Ok(table),
            Edit::Idle => Err(not_editing(operation)),
        }
    }

    fn finish_edit(&mut self, operation: &str) -> Result<Table> {
        match mem::replace(&mut self.edit, Edit::Idle) {
            Edit::Editing(table) => Ok(table),
            Edit::Idle => Err(not_editing(operation)),
        }
    }
}

fn not_editing(operation: &str) -> Error {
    Error::incorrect_usage(format!("{operation}() called before table()"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_create_positions() {
        let mut plan = Plan::new(&Dialect::POSTGRESQL);
        plan.execute("SELECT 1").unwrap();
        plan.table("first", true).unwrap().create().unwrap();
        plan.table("second", false)
            .unwrap()
            .add_column(Column::new("title", "string").unwrap())
            .unwrap()
            .create()
            .unwrap();

        let batch = plan.finish().unwrap();

        // SELECT 1, CREATE SEQUENCE, CREATE TABLE first, CREATE TABLE second
        assert_eq!(batch.len(), 4);

        let created: Vec<_> = batch
            .created()
            .iter()
            .map(|created| (created.table.name(), created.sequence_at, created.table_at))
            .collect();
        assert_eq!(created, [("first", Some(1), Some(2)), ("second", None, Some(3))]);
    }

    #[test]
    fn records_sequences_added_by_alter() {
        let mut plan = Plan::new(&Dialect::POSTGRESQL);
        plan.table("counters", "id")
            .unwrap()
            .add_column(Column::new("id", "integer").unwrap().autoincrement())
            .unwrap()
            .alter()
            .unwrap();

        let batch = plan.finish().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.created()[0].sequence_at, Some(0));
        assert_eq!(batch.created()[0].table_at, None);
    }

    #[test]
    fn failed_render_leaves_plan_idle() {
        let mut plan = Plan::new(&Dialect::SQLITE);
        plan.table("broken", "missing").unwrap();

        let err = plan.create().unwrap_err();
        assert!(err.is_not_found());

        assert!(plan.table("next", true).is_ok());
    }
}
