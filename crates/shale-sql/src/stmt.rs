mod alter_table;
pub use alter_table::{AlterTable, AlterTableAction};

mod column_def;
pub use column_def::{ColumnDef, Literal};

mod create_index;
pub use create_index::CreateIndex;

mod create_sequence;
pub use create_sequence::CreateSequence;

mod create_table;
pub use create_table::{CreateTable, PrimaryKeyDef};

mod drop_index;
pub use drop_index::DropIndex;

mod drop_sequence;
pub use drop_sequence::DropSequence;

mod drop_table;
pub use drop_table::DropTable;

mod foreign_key_def;
pub use foreign_key_def::ForeignKeyDef;

mod name;
pub use name::Name;

use shale_core::{schema::Table, Dialect, Error, Result};

/// A DDL statement, ready to be rendered by a [`Serializer`](crate::Serializer).
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AlterTable(AlterTable),
    CreateIndex(CreateIndex),
    CreateSequence(CreateSequence),
    CreateTable(CreateTable),
    DropIndex(DropIndex),
    DropSequence(DropSequence),
    DropTable(DropTable),
}

impl Statement {
    pub fn is_create_table(&self) -> bool {
        matches!(self, Statement::CreateTable(_))
    }

    pub fn is_create_sequence(&self) -> bool {
        matches!(self, Statement::CreateSequence(_))
    }

    /// Whether the rendered statement ends with `;`. Drop statements are rendered bare.
    pub fn is_terminated(&self) -> bool {
        !matches!(self, Statement::DropTable(_) | Statement::DropSequence(_))
    }
}

/// Name of the sequence backing `table`'s auto incrementing column.
pub(crate) fn sequence_name(table: &Table) -> Name {
    Name::from(format!("{}_seq", table.name()))
}

/// Resolves every name in `columns` against the table's column mapping.
pub(crate) fn resolve<'a>(
    table: &Table,
    columns: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Name>> {
    columns
        .into_iter()
        .map(|name| table.column(name).map(|column| Name::from(&column.name)))
        .collect()
}

pub(crate) fn unsupported_type(dialect: &Dialect, ty: impl core::fmt::Display) -> Error {
    Error::unsupported_feature(format!(
        "type \"{ty}\" is not supported by {}",
        dialect.name
    ))
}
