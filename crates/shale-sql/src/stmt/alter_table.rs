use super::{ColumnDef, ForeignKeyDef, Name, Statement};

use shale_core::schema::Table;

/// A statement to alter a SQL table.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    /// Current name of the table.
    pub name: Name,

    /// The alteration to apply.
    pub action: AlterTableAction,
}

/// The action to perform in an ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    /// Rename the table to a new name.
    RenameTo(Name),

    DropColumn(Name),

    /// Drop a foreign key constraint by its full name.
    DropForeignKey(Name),

    /// Add several columns in a single statement.
    AddColumns(Vec<ColumnDef>),

    AddForeignKey(ForeignKeyDef),
}

impl Statement {
    /// Renames a table.
    pub fn alter_table_rename_to(table: &Table, new_name: &str) -> Self {
        Self::alter_table(table, AlterTableAction::RenameTo(Name::from(new_name)))
    }

    pub fn alter_table_drop_column(table: &Table, column: &str) -> Self {
        Self::alter_table(table, AlterTableAction::DropColumn(Name::from(column)))
    }

    /// Drops the foreign key declared on the columns joined into `name`.
    pub fn alter_table_drop_foreign_key(table: &Table, name: &str) -> Self {
        let constraint = Name::from(format!("{}_{name}", table.name()));
        Self::alter_table(table, AlterTableAction::DropForeignKey(constraint))
    }

    pub fn alter_table_add_columns(table: &Table, columns: Vec<ColumnDef>) -> Self {
        Self::alter_table(table, AlterTableAction::AddColumns(columns))
    }

    pub fn alter_table_add_foreign_key(table: &Table, foreign_key: ForeignKeyDef) -> Self {
        Self::alter_table(table, AlterTableAction::AddForeignKey(foreign_key))
    }

    fn alter_table(table: &Table, action: AlterTableAction) -> Self {
        AlterTable {
            name: Name::from(table.name()),
            action,
        }
        .into()
    }
}

impl From<AlterTable> for Statement {
    fn from(value: AlterTable) -> Self {
        Self::AlterTable(value)
    }
}
