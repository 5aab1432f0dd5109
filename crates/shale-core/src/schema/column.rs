use super::{ColumnType, DefaultValue};
use crate::Result;

/// A table column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Name of the column, unique within its table
    pub name: String,

    /// Logical type, mapped to a SQL type by the dialect
    pub ty: ColumnType,

    /// When true, the column accepts `NULL`
    pub nullable: bool,

    /// `None` renders no `DEFAULT` clause at all
    pub default: Option<DefaultValue>,

    /// When `None`, the dialect's default length for the type is used
    pub length: Option<u32>,

    /// Digits after the decimal point, for decimal-like types
    pub decimals: Option<u32>,

    pub signed: bool,

    /// Only takes effect on an integer primary key column
    pub autoincrement: bool,
}

impl Column {
    /// Creates a column, parsing `ty` into a [`ColumnType`].
    ///
    /// Fails with an invalid argument value error if `ty` is not a known type name.
    pub fn new(name: impl Into<String>, ty: &str) -> Result<Column> {
        Ok(Column::with_type(name, ty.parse()?))
    }

    pub fn with_type(name: impl Into<String>, ty: ColumnType) -> Column {
        Column {
            name: name.into(),
            ty,
            nullable: false,
            default: None,
            length: None,
            decimals: None,
            signed: true,
            autoincrement: false,
        }
    }

    /// The column injected by `PrimaryKey::Auto`.
    pub(crate) fn auto_primary() -> Column {
        Column::with_type("id", ColumnType::Integer).autoincrement()
    }

    pub fn nullable(mut self, nullable: bool) -> Column {
        self.nullable = nullable;
        self
    }

    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Column {
        self.default = Some(value.into());
        self
    }

    /// Sets an explicit `DEFAULT NULL`. Only rendered on nullable columns.
    pub fn default_null(mut self) -> Column {
        self.default = Some(DefaultValue::Null);
        self
    }

    pub fn length(mut self, length: u32) -> Column {
        self.length = Some(length);
        self
    }

    pub fn decimals(mut self, decimals: u32) -> Column {
        self.decimals = Some(decimals);
        self
    }

    pub fn unsigned(mut self) -> Column {
        self.signed = false;
        self
    }

    pub fn autoincrement(mut self) -> Column {
        self.autoincrement = true;
        self
    }
}
