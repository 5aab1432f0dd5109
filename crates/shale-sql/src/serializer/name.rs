use super::{Formatter, Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::Name {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.0));
    }
}
