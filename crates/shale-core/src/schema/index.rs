use super::{normalize, ColumnList};
use crate::{Error, Result};

use std::str::FromStr;

/// A table index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Indexed columns, in index order
    pub columns: ColumnList,

    /// Name of the index
    pub name: String,

    pub ty: IndexType,

    pub method: IndexMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexType {
    #[default]
    Normal,
    Unique,
    Fulltext,
}

/// Index method hint. Dialects that cannot express it ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexMethod {
    #[default]
    Default,
    Btree,
    Hash,
}

impl Index {
    /// Creates an index named after its columns joined with `_`.
    ///
    /// `ty` and `method` are parsed case-insensitively; the empty string selects
    /// [`IndexType::Normal`] and [`IndexMethod::Default`]. An index needs at least one column.
    pub fn new(columns: impl Into<ColumnList>, ty: &str, method: &str) -> Result<Index> {
        let columns = columns.into();

        if columns.is_empty() {
            return Err(Error::invalid_argument_value("an index needs at least one column"));
        }

        Ok(Index {
            name: columns.joined(),
            columns,
            ty: ty.parse()?,
            method: method.parse()?,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Index {
        self.name = name.into();
        self
    }
}

impl FromStr for IndexType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match &normalize(s)[..] {
            "" | "NORMAL" => Ok(IndexType::Normal),
            "UNIQUE" => Ok(IndexType::Unique),
            "FULLTEXT" => Ok(IndexType::Fulltext),
            _ => Err(Error::invalid_argument_value(format!(
                "Index type \"{s}\" is not allowed"
            ))),
        }
    }
}

impl FromStr for IndexMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match &normalize(s)[..] {
            "" | "DEFAULT" => Ok(IndexMethod::Default),
            "BTREE" => Ok(IndexMethod::Btree),
            "HASH" => Ok(IndexMethod::Hash),
            _ => Err(Error::invalid_argument_value(format!(
                "Index method \"{s}\" is not allowed"
            ))),
        }
    }
}
