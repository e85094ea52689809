use super::Serializer;

use sieve_core::{driver::Dialect, schema::db};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Oracle,
    Postgresql,
    Sqlite,
    Mysql,
}

impl<'a> Serializer<'a> {
    pub fn oracle(schema: &'a db::Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Oracle,
        }
    }

    pub fn sqlite(schema: &'a db::Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql(schema: &'a db::Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql(schema: &'a db::Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Mysql,
        }
    }

    pub fn for_dialect(schema: &'a db::Schema, dialect: Dialect) -> Serializer<'a> {
        match dialect {
            Dialect::Oracle => Serializer::oracle(schema),
            Dialect::Postgresql => Serializer::postgresql(schema),
            Dialect::Sqlite => Serializer::sqlite(schema),
            Dialect::Mysql => Serializer::mysql(schema),
        }
    }
}
