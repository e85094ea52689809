use super::{Flavor, Formatter, ToSql};

use sieve_core::stmt::TypedValue;

pub trait Params {
    fn push(&mut self, param: &TypedValue) -> Placeholder;
}

/// One-based position of a bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<TypedValue> {
    fn push(&mut self, value: &TypedValue) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => fmt!(f, "?"),
            Flavor::Oracle => fmt!(f, ":" self.0),
            Flavor::Postgresql => fmt!(f, "$" self.0),
            Flavor::Sqlite => fmt!(f, "?" self.0),
        }
    }
}
