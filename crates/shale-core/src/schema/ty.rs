use crate::Error;

use std::{fmt, str::FromStr};

/// Logical type of a column.
///
/// Dialects map each variant to a concrete SQL type; see
/// [`Dialect::types`](crate::driver::Dialect::types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Integer,
    BigInteger,
    Boolean,
    Text,
    Datetime,
    Date,
    Uuid,
    Json,
    Char,
    Decimal,
    Float,
}

impl ColumnType {
    pub const ALL: [ColumnType; 12] = [
        ColumnType::String,
        ColumnType::Integer,
        ColumnType::BigInteger,
        ColumnType::Boolean,
        ColumnType::Text,
        ColumnType::Datetime,
        ColumnType::Date,
        ColumnType::Uuid,
        ColumnType::Json,
        ColumnType::Char,
        ColumnType::Decimal,
        ColumnType::Float,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::BigInteger => "biginteger",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "text",
            ColumnType::Datetime => "datetime",
            ColumnType::Date => "date",
            ColumnType::Uuid => "uuid",
            ColumnType::Json => "json",
            ColumnType::Char => "char",
            ColumnType::Decimal => "decimal",
            ColumnType::Float => "float",
        }
    }

    /// Integer-like types render defaults unquoted and may auto increment.
    pub fn is_integer(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::BigInteger)
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();

        ColumnType::ALL
            .into_iter()
            .find(|ty| ty.as_str().to_ascii_uppercase() == upper)
            .ok_or_else(|| Error::invalid_argument_value(format!("Type \"{s}\" is not allowed")))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
