use super::{Flavor, Formatter, Params, ToSql};

/// A quoted identifier.
///
/// Identifiers are always quoted so that upper-case Oracle names and
/// reserved words survive as declared.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let quote = match f.serializer.flavor {
            Flavor::Mysql => '`',
            Flavor::Oracle | Flavor::Postgresql | Flavor::Sqlite => '"',
        };

        f.dst.push(quote);
        for c in self.0.as_ref().chars() {
            if c == quote {
                f.dst.push(quote);
            }
            f.dst.push(c);
        }
        f.dst.push(quote);
    }
}

/// `t{n}`, the alias of the `n`-th source of a statement
pub(super) struct Alias(pub(super) usize);

impl ToSql for Alias {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "t" self.0);
    }
}
