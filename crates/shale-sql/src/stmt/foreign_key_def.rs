use super::{resolve, Name};

use shale_core::{
    schema::{Action, ForeignKey, Table},
    Result,
};

/// A named `FOREIGN KEY` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDef {
    /// `<table>_<local columns>`
    pub name: Name,

    pub columns: Vec<Name>,

    pub referenced_table: Name,

    pub referenced_columns: Vec<Name>,

    pub on_delete: Action,

    pub on_update: Action,
}

impl ForeignKeyDef {
    /// Fails with a not found error if a local column is not defined on `table`.
    pub fn from_schema(foreign_key: &ForeignKey, table: &Table) -> Result<ForeignKeyDef> {
        Ok(ForeignKeyDef {
            name: Name::from(format!("{}_{}", table.name(), foreign_key.name())),
            columns: resolve(table, foreign_key.columns.iter())?,
            referenced_table: Name::from(&foreign_key.referenced_table),
            referenced_columns: foreign_key.referenced_columns.iter().map(Name::from).collect(),
            on_delete: foreign_key.on_delete,
            on_update: foreign_key.on_update,
        })
    }
}
