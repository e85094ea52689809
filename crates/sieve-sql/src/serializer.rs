#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;

use crate::stmt::Statement;

use sieve_core::schema::db;

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a db::Schema,

    /// The database flavor handles the differences between SQL dialects:
    /// identifier quoting, placeholders and string escapes.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    /// Serializes `stmt`, pushing every bound value to `params` in placeholder
    /// order.
    ///
    /// The statement is not terminated with `;`, which Oracle rejects in
    /// prepared statements.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    fn table_name(&self, id: db::TableId) -> Ident<&'a str> {
        Ident(&self.schema.table(id).name)
    }

    fn column_name(&self, id: db::ColumnId) -> Ident<&'a str> {
        Ident(&self.schema.column(id).name)
    }
}
