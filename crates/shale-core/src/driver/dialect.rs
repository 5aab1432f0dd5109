use crate::schema::ColumnType;

/// Describes how a database renders DDL.
///
/// The query builder runs one algorithm for every database; everything that differs between
/// them is a field here. New dialects are new values, not new code paths.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    /// Short name, used in error messages and logs.
    pub name: &'static str,

    /// Character identifiers are wrapped in.
    pub quote: char,

    /// SQL type used for each column type. A column type missing from the map cannot be
    /// rendered by this dialect.
    pub types: &'static [TypeMapping],

    /// How the primary key clause of `CREATE TABLE` is written.
    pub primary_key: PrimaryKeyStyle,

    /// How an auto incrementing primary key column is produced.
    pub auto_increment: AutoIncrement,

    /// Literals for `false` and `true`, in that order.
    pub bool_literals: [&'static str; 2],

    /// When true, unsigned columns are rendered with an ` unsigned` attribute. Otherwise the
    /// column's signedness is ignored.
    pub unsigned: bool,

    /// Where `USING <method>` goes in `CREATE INDEX`.
    pub index_method: IndexMethodPlacement,

    pub drop_index: DropIndexStyle,

    /// Keyword(s) following `ALTER TABLE <t>` to drop a foreign key.
    pub drop_foreign_key: &'static str,

    /// Statement that opens a transaction.
    pub start_transaction: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub ty: ColumnType,
    pub sql: SqlType,
}

/// A SQL type template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// Rendered as is, e.g. `text`.
    Plain(&'static str),

    /// Rendered as `name(length)`. The number is used when the column has no length.
    Sized(&'static str, u32),

    /// Rendered as `name(length,decimals)`, with the defaults used for unset values.
    Precision(&'static str, u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeyStyle {
    /// `CONSTRAINT "<table>_pkey" PRIMARY KEY (...)`
    Constraint,

    /// `PRIMARY KEY (...)`
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoIncrement {
    /// A native column attribute, e.g. `AUTO_INCREMENT`.
    Attribute(&'static str),

    /// A `<table>_seq` sequence, created before the table and used as the column default.
    Sequence,

    /// The column is declared `PRIMARY KEY AUTOINCREMENT` and left out of the table's
    /// primary key clause.
    PrimaryKeyModifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMethodPlacement {
    /// `CREATE INDEX n ON t USING BTREE (...)`
    BeforeColumns,

    /// `CREATE INDEX n ON t (...) USING BTREE`
    AfterColumns,

    /// The method hint is not rendered.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIndexStyle {
    /// `ALTER TABLE t DROP INDEX n`
    AlterTable,

    /// `DROP INDEX n`
    Standalone,
}

const fn map(ty: ColumnType, sql: SqlType) -> TypeMapping {
    TypeMapping { ty, sql }
}

impl Dialect {
    /// MySQL rendering rules.
    pub const MYSQL: Dialect = Dialect {
        name: "mysql",
        quote: '`',
        types: &[
            map(ColumnType::String, SqlType::Sized("varchar", 255)),
            map(ColumnType::Integer, SqlType::Sized("int", 11)),
            map(ColumnType::BigInteger, SqlType::Sized("bigint", 20)),
            map(ColumnType::Boolean, SqlType::Plain("tinyint(1)")),
            map(ColumnType::Text, SqlType::Plain("text")),
            map(ColumnType::Datetime, SqlType::Plain("datetime")),
            map(ColumnType::Date, SqlType::Plain("date")),
            map(ColumnType::Uuid, SqlType::Plain("char(36)")),
            map(ColumnType::Json, SqlType::Plain("json")),
            map(ColumnType::Char, SqlType::Sized("char", 255)),
            map(ColumnType::Decimal, SqlType::Precision("decimal", 10, 0)),
            map(ColumnType::Float, SqlType::Plain("float")),
        ],
        primary_key: PrimaryKeyStyle::Inline,
        auto_increment: AutoIncrement::Attribute("AUTO_INCREMENT"),
        bool_literals: ["0", "1"],
        unsigned: true,
        index_method: IndexMethodPlacement::AfterColumns,
        drop_index: DropIndexStyle::AlterTable,
        drop_foreign_key: "DROP FOREIGN KEY",
        start_transaction: "START TRANSACTION",
    };

    /// PostgreSQL rendering rules.
    pub const POSTGRESQL: Dialect = Dialect {
        name: "postgresql",
        quote: '"',
        types: &[
            map(ColumnType::String, SqlType::Sized("varchar", 255)),
            map(ColumnType::Integer, SqlType::Plain("int4")),
            map(ColumnType::BigInteger, SqlType::Plain("int8")),
            map(ColumnType::Boolean, SqlType::Plain("bool")),
            map(ColumnType::Text, SqlType::Plain("text")),
            map(ColumnType::Datetime, SqlType::Plain("timestamp(6)")),
            map(ColumnType::Date, SqlType::Plain("date")),
            map(ColumnType::Uuid, SqlType::Plain("uuid")),
            map(ColumnType::Json, SqlType::Plain("json")),
            map(ColumnType::Char, SqlType::Sized("char", 255)),
            map(ColumnType::Decimal, SqlType::Precision("decimal", 10, 0)),
            map(ColumnType::Float, SqlType::Plain("float4")),
        ],
        primary_key: PrimaryKeyStyle::Constraint,
        auto_increment: AutoIncrement::Sequence,
        bool_literals: ["false", "true"],
        unsigned: false,
        index_method: IndexMethodPlacement::BeforeColumns,
        drop_index: DropIndexStyle::AlterTable,
        drop_foreign_key: "DROP CONSTRAINT",
        start_transaction: "BEGIN",
    };

    /// SQLite rendering rules.
    pub const SQLITE: Dialect = Dialect {
        name: "sqlite",
        quote: '"',
        types: &[
            map(ColumnType::String, SqlType::Sized("varchar", 255)),
            map(ColumnType::Integer, SqlType::Plain("integer")),
            map(ColumnType::BigInteger, SqlType::Plain("bigint")),
            map(ColumnType::Boolean, SqlType::Plain("boolean")),
            map(ColumnType::Text, SqlType::Plain("text")),
            map(ColumnType::Datetime, SqlType::Plain("datetime")),
            map(ColumnType::Date, SqlType::Plain("date")),
            map(ColumnType::Uuid, SqlType::Plain("char(36)")),
            map(ColumnType::Json, SqlType::Plain("text")),
            map(ColumnType::Char, SqlType::Sized("char", 255)),
            map(ColumnType::Decimal, SqlType::Precision("decimal", 10, 0)),
            map(ColumnType::Float, SqlType::Plain("float")),
        ],
        primary_key: PrimaryKeyStyle::Inline,
        auto_increment: AutoIncrement::PrimaryKeyModifier,
        bool_literals: ["0", "1"],
        unsigned: false,
        index_method: IndexMethodPlacement::Ignored,
        drop_index: DropIndexStyle::Standalone,
        drop_foreign_key: "DROP CONSTRAINT",
        start_transaction: "BEGIN",
    };

    pub fn sql_type(&self, ty: ColumnType) -> Option<SqlType> {
        self.types
            .iter()
            .find(|mapping| mapping.ty == ty)
            .map(|mapping| mapping.sql)
    }

    pub fn bool_literal(&self, value: bool) -> &'static str {
        self.bool_literals[usize::from(value)]
    }

    pub fn start_transaction_sql(&self) -> &'static str {
        self.start_transaction
    }

    pub fn commit_sql(&self) -> &'static str {
        "COMMIT"
    }

    pub fn rollback_sql(&self) -> &'static str {
        "ROLLBACK"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dialects_map_every_type() {
        for dialect in [Dialect::MYSQL, Dialect::POSTGRESQL, Dialect::SQLITE] {
            for ty in ColumnType::ALL {
                assert!(
                    dialect.sql_type(ty).is_some(),
                    "{} has no mapping for {ty}",
                    dialect.name
                );
            }
        }
    }

    #[test]
    fn bool_literals() {
        assert_eq!(Dialect::POSTGRESQL.bool_literal(false), "false");
        assert_eq!(Dialect::POSTGRESQL.bool_literal(true), "true");
        assert_eq!(Dialect::MYSQL.bool_literal(true), "1");
    }

    #[test]
    fn transaction_statements() {
        assert_eq!(Dialect::MYSQL.start_transaction_sql(), "START TRANSACTION");
        assert_eq!(Dialect::POSTGRESQL.start_transaction_sql(), "BEGIN");
        assert_eq!(Dialect::SQLITE.commit_sql(), "COMMIT");
    }
}
