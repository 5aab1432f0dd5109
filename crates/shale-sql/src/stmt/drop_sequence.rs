use super::{sequence_name, Name, Statement};

use shale_core::schema::Table;

/// A statement to drop a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSequence {
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops the sequence backing `table`'s auto incrementing column, if it exists.
    pub fn drop_sequence_if_exists(table: &Table) -> Self {
        DropSequence {
            name: sequence_name(table),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropSequence> for Statement {
    fn from(value: DropSequence) -> Self {
        Self::DropSequence(value)
    }
}
