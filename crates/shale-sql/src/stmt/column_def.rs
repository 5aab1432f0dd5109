use super::{sequence_name, unsupported_type, Name};

use shale_core::{
    driver::{AutoIncrement, SqlType},
    schema::{Column, ColumnType, Table},
    Dialect, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: Name,

    /// Rendered SQL type, e.g. `varchar(255)`
    pub ty: String,

    pub unsigned: bool,

    pub default: Option<Literal>,

    pub not_null: bool,

    /// Trailing column attribute, e.g. `AUTO_INCREMENT`
    pub attribute: Option<&'static str>,
}

/// A value in a `DEFAULT` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Null,
    Bool(bool),
    Integer(i64),

    /// Rendered single-quoted, as is
    String(String),

    /// `nextval('<sequence>'::regclass)`
    NextVal(Name),
}

impl ColumnDef {
    /// Builds the definition of `column`, a column of `table`, for `dialect`.
    ///
    /// Fails with an unsupported feature error when the dialect has no SQL type for the
    /// column's type.
    pub fn from_schema(column: &Column, table: &Table, dialect: &Dialect) -> Result<ColumnDef> {
        let ty = match dialect.sql_type(column.ty) {
            Some(SqlType::Plain(name)) => name.to_string(),
            Some(SqlType::Sized(name, length)) => {
                format!("{name}({})", column.length.unwrap_or(length))
            }
            Some(SqlType::Precision(name, length, decimals)) => format!(
                "{name}({},{})",
                column.length.unwrap_or(length),
                column.decimals.unwrap_or(decimals)
            ),
            None => return Err(unsupported_type(dialect, column.ty)),
        };

        let mut def = ColumnDef {
            name: Name::from(&column.name),
            ty,
            unsigned: dialect.unsigned && !column.signed,
            default: Literal::default_for(column),
            not_null: !column.nullable,
            attribute: None,
        };

        if table.is_autoincrement(column) {
            match dialect.auto_increment {
                AutoIncrement::Attribute(attribute) => {
                    def.default = None;
                    def.attribute = Some(attribute);
                }
                AutoIncrement::Sequence => {
                    def.default = Some(Literal::NextVal(sequence_name(table)));
                }
                AutoIncrement::PrimaryKeyModifier => {
                    def.unsigned = false;
                    def.default = None;
                    def.not_null = false;
                    def.attribute = Some("PRIMARY KEY AUTOINCREMENT");
                }
            }
        }

        Ok(def)
    }
}

impl Literal {
    /// The `DEFAULT` value of `column`, coerced to the column's type.
    ///
    /// An explicit null only renders on a nullable column.
    fn default_for(column: &Column) -> Option<Literal> {
        let value = column.default.as_ref()?;

        if value.is_null() {
            return column.nullable.then_some(Literal::Null);
        }

        Some(match column.ty {
            ty if ty.is_integer() => Literal::Integer(value.to_integer()),
            ColumnType::Boolean => Literal::Bool(value.to_bool()),
            _ => Literal::String(value.to_text()),
        })
    }
}
