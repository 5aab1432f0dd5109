use super::{Name, Statement};

use shale_core::schema::Table;

/// A statement to drop a SQL index.
///
/// The table is kept for dialects that drop indexes through `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndex {
    /// Name of the index.
    pub name: Name,

    /// Table the index belongs to.
    pub on: Name,
}

impl Statement {
    pub fn drop_index(table: &Table, name: &str) -> Self {
        DropIndex {
            name: Name::from(name),
            on: Name::from(table.name()),
        }
        .into()
    }
}

impl From<DropIndex> for Statement {
    fn from(value: DropIndex) -> Self {
        Self::DropIndex(value)
    }
}
