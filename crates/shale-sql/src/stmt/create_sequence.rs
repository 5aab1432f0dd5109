use super::{sequence_name, Name, Statement};

use shale_core::schema::Table;

/// Creates the sequence that backs an auto incrementing column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSequence {
    pub name: Name,
}

impl Statement {
    pub fn create_sequence(table: &Table) -> Self {
        CreateSequence {
            name: sequence_name(table),
        }
        .into()
    }
}

impl From<CreateSequence> for Statement {
    fn from(value: CreateSequence) -> Self {
        Self::CreateSequence(value)
    }
}
