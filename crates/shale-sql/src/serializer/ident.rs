use super::{Formatter, ToSql};

/// An identifier, wrapped in the dialect's quote character
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let quote = f.serializer.dialect.quote;
        f.dst.push(quote);
        f.dst.push_str(self.0.as_ref());
        f.dst.push(quote);
    }
}
