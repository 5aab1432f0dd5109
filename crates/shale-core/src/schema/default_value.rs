/// A column default.
///
/// `DefaultValue::Null` is an explicit `DEFAULT NULL`, which is different from a column that
/// has no default at all (`Column::default == None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
}

impl DefaultValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DefaultValue::Null)
    }

    /// The value cast to an integer. Strings that do not parse become `0`.
    pub fn to_integer(&self) -> i64 {
        match self {
            DefaultValue::Null => 0,
            DefaultValue::Bool(value) => i64::from(*value),
            DefaultValue::Integer(value) => *value,
            DefaultValue::String(value) => value.trim().parse().unwrap_or(0),
        }
    }

    /// The value cast to a boolean. `""` and `"0"` are false.
    pub fn to_bool(&self) -> bool {
        match self {
            DefaultValue::Null => false,
            DefaultValue::Bool(value) => *value,
            DefaultValue::Integer(value) => *value != 0,
            DefaultValue::String(value) => !(value.is_empty() || value == "0"),
        }
    }

    /// The value as the text placed between quotes.
    pub fn to_text(&self) -> String {
        match self {
            DefaultValue::Null => String::new(),
            DefaultValue::Bool(true) => "1".to_string(),
            DefaultValue::Bool(false) => String::new(),
            DefaultValue::Integer(value) => value.to_string(),
            DefaultValue::String(value) => value.clone(),
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Integer(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        DefaultValue::Integer(value.into())
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::String(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::String(value)
    }
}
