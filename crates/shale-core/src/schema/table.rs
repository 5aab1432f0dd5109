use super::{Column, ColumnList, ForeignKey, Index, PrimaryKey};
use crate::{Error, Result};

use indexmap::IndexMap;

/// A table, as described by a migration script.
///
/// The same value describes a table to create as well as pending edits to an existing one:
/// columns, indexes and foreign keys are additions, while the `*_to_drop` lists are only used
/// when altering. Every list keeps insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    name: String,

    /// The table's columns, in DDL order
    columns: IndexMap<String, Column>,

    /// Names of the primary key columns. Empty when the table has no primary key.
    primary_columns: Vec<String>,

    indexes: Vec<Index>,

    foreign_keys: Vec<ForeignKey>,

    columns_to_drop: Vec<String>,

    indexes_to_drop: Vec<String>,

    foreign_keys_to_drop: Vec<String>,

    /// True when `id` was injected by `PrimaryKey::Auto`
    auto_primary: bool,
}

impl Table {
    pub fn new(name: impl Into<String>, primary_key: impl Into<PrimaryKey>) -> Table {
        let mut table = Table {
            name: name.into(),
            columns: IndexMap::new(),
            primary_columns: vec![],
            indexes: vec![],
            foreign_keys: vec![],
            columns_to_drop: vec![],
            indexes_to_drop: vec![],
            foreign_keys_to_drop: vec![],
            auto_primary: false,
        };

        match primary_key.into() {
            PrimaryKey::Auto => {
                let column = Column::auto_primary();
                table.primary_columns.push(column.name.clone());
                table.columns.insert(column.name.clone(), column);
                table.auto_primary = true;
            }
            PrimaryKey::Named(names) => {
                for name in names {
                    table.push_primary(name);
                }
            }
            PrimaryKey::Columns(columns) => {
                for column in columns {
                    table.push_primary(column.name.clone());
                    table.columns.insert(column.name.clone(), column);
                }
            }
            PrimaryKey::None => {}
        }

        table
    }

    fn push_primary(&mut self, name: String) {
        if !self.primary_columns.contains(&name) {
            self.primary_columns.push(name);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.values()
    }

    /// Columns to add when altering the table. The `id` column injected by
    /// `PrimaryKey::Auto` already exists and is skipped.
    pub fn added_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        let skip = if self.auto_primary {
            self.columns.get_index(0).map(|(name, _)| name.as_str())
        } else {
            None
        };

        self.columns
            .values()
            .filter(move |column| Some(column.name.as_str()) != skip)
    }

    /// Looks up a column by name, failing with a not found error.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| Error::column_not_found(name))
    }

    pub fn primary_columns(&self) -> &[String] {
        &self.primary_columns
    }

    /// The primary key column that auto increments, if any.
    ///
    /// Only an integer column listed in the primary key qualifies; the flag is ignored on any
    /// other column.
    pub fn autoincrement_column(&self) -> Option<&Column> {
        self.primary_columns
            .iter()
            .filter_map(|name| self.columns.get(name))
            .find(|column| column.autoincrement && column.ty.is_integer())
    }

    /// Returns `true` if `column` belongs to this table and auto increments.
    pub fn is_autoincrement(&self, column: &Column) -> bool {
        self.autoincrement_column()
            .is_some_and(|autoincrement| autoincrement.name == column.name)
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    pub fn columns_to_drop(&self) -> &[String] {
        &self.columns_to_drop
    }

    pub fn indexes_to_drop(&self) -> &[String] {
        &self.indexes_to_drop
    }

    /// Names (joined local columns) of the foreign keys to drop.
    pub fn foreign_keys_to_drop(&self) -> &[String] {
        &self.foreign_keys_to_drop
    }

    /// Adds a column. Fails if the table already defines a column with the same name.
    pub fn add_column(&mut self, column: Column) -> Result<&mut Self> {
        if self.columns.contains_key(&column.name) {
            return Err(Error::invalid_argument_value(format!(
                "Column \"{}\" is already defined on table \"{}\"",
                column.name, self.name
            )));
        }

        self.columns.insert(column.name.clone(), column);
        Ok(self)
    }

    /// Adds an index named `<table>_<columns>`.
    pub fn add_index(
        &mut self,
        columns: impl Into<ColumnList>,
        ty: &str,
        method: &str,
    ) -> Result<&mut Self> {
        let index = Index::new(columns, ty, method)?;
        let name = format!("{}_{}", self.name, index.name);
        Ok(self.push_index(index.with_name(name)))
    }

    /// Adds an index, keeping its name as is.
    pub fn push_index(&mut self, index: Index) -> &mut Self {
        self.indexes.push(index);
        self
    }

    /// Adds a foreign key referencing `referenced_table.id`, restricting deletes and updates.
    pub fn add_foreign_key(
        &mut self,
        columns: impl Into<ColumnList>,
        referenced_table: impl Into<String>,
    ) -> Result<&mut Self> {
        self.add_foreign_key_with(columns, referenced_table, "id", "restrict", "restrict")
    }

    pub fn add_foreign_key_with(
        &mut self,
        columns: impl Into<ColumnList>,
        referenced_table: impl Into<String>,
        referenced_columns: impl Into<ColumnList>,
        on_delete: &str,
        on_update: &str,
    ) -> Result<&mut Self> {
        let foreign_key = ForeignKey::new(
            columns,
            referenced_table,
            referenced_columns,
            on_delete,
            on_update,
        )?;
        Ok(self.push_foreign_key(foreign_key))
    }

    pub fn push_foreign_key(&mut self, foreign_key: ForeignKey) -> &mut Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    pub fn drop_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.columns_to_drop.push(name.into());
        self
    }

    pub fn drop_index(&mut self, name: impl Into<String>) -> &mut Self {
        self.indexes_to_drop.push(name.into());
        self
    }

    /// Drops the foreign key declared on `columns`.
    pub fn drop_foreign_key(&mut self, columns: impl Into<ColumnList>) -> &mut Self {
        self.foreign_keys_to_drop.push(columns.into().joined());
        self
    }
}
