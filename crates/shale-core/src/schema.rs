//! Declarative description of a table and of pending edits to it.
//!
//! Nothing in this module performs I/O. A [`Table`] is built up by a migration script and then
//! handed to a dialect query builder, which turns it into DDL.

mod column;
pub use column::Column;

mod column_list;
pub use column_list::ColumnList;

mod default_value;
pub use default_value::DefaultValue;

mod foreign_key;
pub use foreign_key::{Action, ForeignKey};

mod index;
pub use index::{Index, IndexMethod, IndexType};

mod primary_key;
pub use primary_key::PrimaryKey;

mod table;
pub use table::Table;

mod ty;
pub use ty::ColumnType;

/// Uppercases `value` and collapses `_` to a space, so `set_null`, `SET NULL` and `Set Null`
/// all compare equal.
fn normalize(value: &str) -> String {
    value.trim().to_ascii_uppercase().replace('_', " ")
}
