use super::{normalize, ColumnList};
use crate::{Error, Result};

use std::str::FromStr;

/// A foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Local columns, in order
    pub columns: ColumnList,

    /// Name of the referenced table
    pub referenced_table: String,

    /// Referenced columns, same arity as `columns`
    pub referenced_columns: ColumnList,

    pub on_delete: Action,

    pub on_update: Action,
}

/// Referential action for `ON DELETE` / `ON UPDATE`.
///
/// `Action::Default` leaves the clause out and lets the database decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Default,
    Restrict,
    NoAction,
    Cascade,
    SetNull,
}

impl ForeignKey {
    /// Creates a foreign key.
    ///
    /// Fails with an invalid argument value error when an action is unknown, when there are no
    /// local columns, or when the number of referenced columns differs from the number of local
    /// columns.
    pub fn new(
        columns: impl Into<ColumnList>,
        referenced_table: impl Into<String>,
        referenced_columns: impl Into<ColumnList>,
        on_delete: &str,
        on_update: &str,
    ) -> Result<ForeignKey> {
        let columns = columns.into();
        let referenced_columns = referenced_columns.into();

        if columns.is_empty() {
            return Err(Error::invalid_argument_value(
                "a foreign key needs at least one column",
            ));
        }

        if columns.len() != referenced_columns.len() {
            return Err(Error::invalid_argument_value(format!(
                "foreign key ({}) references {} column(s), expected {}",
                columns.0.join(", "),
                referenced_columns.len(),
                columns.len()
            )));
        }

        let on_delete = Action::parse(on_delete, "delete")?;
        let on_update = Action::parse(on_update, "update")?;

        Ok(ForeignKey {
            columns,
            referenced_table: referenced_table.into(),
            referenced_columns,
            on_delete,
            on_update,
        })
    }

    /// Local column names joined with `_`.
    pub fn name(&self) -> String {
        self.columns.joined()
    }
}

impl Action {
    fn parse(value: &str, event: &str) -> Result<Action> {
        value.parse().map_err(|_| {
            Error::invalid_argument_value(format!(
                "Action \"{value}\" is not allowed on {event}"
            ))
        })
    }

    /// SQL keyword(s), `None` for [`Action::Default`].
    pub fn as_sql(self) -> Option<&'static str> {
        match self {
            Action::Default => None,
            Action::Restrict => Some("RESTRICT"),
            Action::NoAction => Some("NO ACTION"),
            Action::Cascade => Some("CASCADE"),
            Action::SetNull => Some("SET NULL"),
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match &normalize(s)[..] {
            "" | "DEFAULT" => Ok(Action::Default),
            "RESTRICT" => Ok(Action::Restrict),
            "NO ACTION" => Ok(Action::NoAction),
            "CASCADE" => Ok(Action::Cascade),
            "SET NULL" => Ok(Action::SetNull),
            _ => Err(Error::invalid_argument_value(format!(
                "Action \"{s}\" is not allowed"
            ))),
        }
    }
}
