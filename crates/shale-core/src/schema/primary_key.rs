use super::Column;

/// Primary key requested when a table edit starts.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PrimaryKey {
    /// A single auto incrementing integer column named `id`.
    #[default]
    Auto,

    /// Columns, defined now or later in the edit, that form the primary key.
    Named(Vec<String>),

    /// Custom primary key column definitions, added to the table first.
    Columns(Vec<Column>),

    /// The table has no primary key.
    None,
}

impl From<bool> for PrimaryKey {
    fn from(value: bool) -> Self {
        if value {
            PrimaryKey::Auto
        } else {
            PrimaryKey::None
        }
    }
}

impl From<&str> for PrimaryKey {
    fn from(value: &str) -> Self {
        PrimaryKey::Named(vec![value.to_string()])
    }
}

impl From<String> for PrimaryKey {
    fn from(value: String) -> Self {
        PrimaryKey::Named(vec![value])
    }
}

impl From<Vec<&str>> for PrimaryKey {
    fn from(value: Vec<&str>) -> Self {
        PrimaryKey::Named(value.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for PrimaryKey {
    fn from(value: Vec<String>) -> Self {
        PrimaryKey::Named(value)
    }
}

impl<const N: usize> From<[&str; N]> for PrimaryKey {
    fn from(value: [&str; N]) -> Self {
        PrimaryKey::Named(value.iter().map(|name| name.to_string()).collect())
    }
}

impl From<Column> for PrimaryKey {
    fn from(value: Column) -> Self {
        PrimaryKey::Columns(vec![value])
    }
}

impl From<Vec<Column>> for PrimaryKey {
    fn from(value: Vec<Column>) -> Self {
        PrimaryKey::Columns(value)
    }
}

impl<const N: usize> From<[Column; N]> for PrimaryKey {
    fn from(value: [Column; N]) -> Self {
        PrimaryKey::Columns(value.into())
    }
}
