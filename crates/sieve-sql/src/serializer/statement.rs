use super::{ident::Alias, Comma, Formatter, Params, ToSql};

use crate::stmt::{ExprColumn, Join, Select, Statement, TableRef};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "SELECT " Comma(&self.columns) " FROM " self.from);

        for join in &self.joins {
            fmt!(f, " " join);
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for &Join {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let on = &self.on;
        fmt!(f, "LEFT JOIN " self.table " ON " on);
    }
}

impl ToSql for TableRef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        // No `AS`: Oracle rejects it before table aliases
        let name = f.serializer.table_name(self.table);
        fmt!(f, name " " Alias(self.alias));
    }
}

impl ToSql for &ExprColumn {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = f.serializer.column_name(self.column);
        fmt!(f, Alias(self.table) "." name);
    }
}
