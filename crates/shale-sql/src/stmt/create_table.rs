use super::*;

use shale_core::driver::{AutoIncrement, PrimaryKeyStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key clause
    pub primary_key: Option<PrimaryKeyDef>,

    /// Foreign key constraints, in declaration order
    pub foreign_keys: Vec<ForeignKeyDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyDef {
    /// Set when the dialect names the constraint
    pub constraint: Option<Name>,

    pub columns: Vec<Name>,
}

impl Statement {
    pub fn create_table(table: &Table, dialect: &Dialect) -> Result<Self> {
        let columns = table
            .columns()
            .map(|column| ColumnDef::from_schema(column, table, dialect))
            .collect::<Result<Vec<_>>>()?;

        let mut primary_columns =
            resolve(table, table.primary_columns().iter().map(String::as_str))?;

        // The column carries its own `PRIMARY KEY` modifier
        if dialect.auto_increment == AutoIncrement::PrimaryKeyModifier {
            if let Some(column) = table.autoincrement_column() {
                primary_columns.retain(|name| name.0 != column.name);
            }
        }

        let primary_key = if primary_columns.is_empty() {
            None
        } else {
            Some(PrimaryKeyDef {
                constraint: match dialect.primary_key {
                    PrimaryKeyStyle::Constraint => {
                        Some(Name::from(format!("{}_pkey", table.name())))
                    }
                    PrimaryKeyStyle::Inline => None,
                },
                columns: primary_columns,
            })
        };

        let foreign_keys = table
            .foreign_keys()
            .iter()
            .map(|foreign_key| ForeignKeyDef::from_schema(foreign_key, table))
            .collect::<Result<Vec<_>>>()?;

        Ok(CreateTable {
            name: Name::from(table.name()),
            columns,
            primary_key,
            foreign_keys,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
