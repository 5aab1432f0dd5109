#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod name;
mod statement;

use crate::stmt::Statement;

use shale_core::Dialect;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    /// Rendering rules of the target database
    dialect: &'a Dialect,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: &'a Dialect) -> Serializer<'a> {
        Serializer { dialect }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        if stmt.is_terminated() {
            ret.push(';');
        }

        ret
    }
}

impl Serializer<'static> {
    pub fn mysql() -> Serializer<'static> {
        Serializer::new(&Dialect::MYSQL)
    }

    pub fn postgresql() -> Serializer<'static> {
        Serializer::new(&Dialect::POSTGRESQL)
    }

    pub fn sqlite() -> Serializer<'static> {
        Serializer::new(&Dialect::SQLITE)
    }
}
