use super::{resolve, Name, Statement};

use shale_core::{
    schema::{Index, IndexMethod, IndexType, Table},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndex {
    /// Name of the index
    pub name: Name,

    /// Which table to index
    pub on: Name,

    /// The columns to index, in order
    pub columns: Vec<Name>,

    pub ty: IndexType,

    pub method: IndexMethod,
}

impl Statement {
    /// Creates `index` on `table`. Every indexed column must be defined on the table.
    pub fn create_index(index: &Index, table: &Table) -> Result<Self> {
        Ok(CreateIndex {
            name: Name::from(&index.name),
            on: Name::from(table.name()),
            columns: resolve(table, index.columns.iter())?,
            ty: index.ty,
            method: index.method,
        }
        .into())
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
