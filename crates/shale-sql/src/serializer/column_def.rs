use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.name, " ", &self.ty[..]);

        if self.unsigned {
            fmt!(f, " unsigned");
        }

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT ", default);
        }

        if self.not_null {
            fmt!(f, " NOT NULL");
        }

        if let Some(attribute) = self.attribute {
            fmt!(f, " ", attribute);
        }
    }
}

impl ToSql for &stmt::Literal {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Literal::Null => fmt!(f, "NULL"),
            stmt::Literal::Bool(value) => {
                let literal = f.serializer.dialect.bool_literal(*value);
                fmt!(f, literal)
            }
            stmt::Literal::Integer(value) => fmt!(f, *value),
            stmt::Literal::String(value) => fmt!(f, "'", &value[..], "'"),
            stmt::Literal::NextVal(sequence) => {
                fmt!(f, "nextval('", &sequence.0[..], "'::regclass)")
            }
        }
    }
}
