/// An ordered list of column names.
///
/// Accepts a single name or any sequence of names, so call sites can write
/// `add_index("sorting", ..)` as well as `add_index(["title", "alias"], ..)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnList(pub Vec<String>);

impl ColumnList {
    /// Names joined with `_`, used to derive index and foreign key names.
    pub fn joined(&self) -> String {
        self.0.join("_")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for ColumnList {
    fn from(value: &str) -> Self {
        ColumnList(vec![value.to_string()])
    }
}

impl From<String> for ColumnList {
    fn from(value: String) -> Self {
        ColumnList(vec![value])
    }
}

impl From<&String> for ColumnList {
    fn from(value: &String) -> Self {
        ColumnList(vec![value.clone()])
    }
}

impl From<Vec<String>> for ColumnList {
    fn from(value: Vec<String>) -> Self {
        ColumnList(value)
    }
}

impl From<Vec<&str>> for ColumnList {
    fn from(value: Vec<&str>) -> Self {
        ColumnList(value.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ColumnList {
    fn from(value: &[&str]) -> Self {
        ColumnList(value.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ColumnList {
    fn from(value: [&str; N]) -> Self {
        ColumnList(value.iter().map(|name| name.to_string()).collect())
    }
}
