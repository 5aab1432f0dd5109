use super::{Name, Statement};

use shale_core::schema::Table;

/// A statement to drop a SQL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,
}

impl Statement {
    pub fn drop_table(table: &Table) -> Self {
        DropTable {
            name: Name::from(table.name()),
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
