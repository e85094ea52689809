mod query_sql;
pub use query_sql::QuerySql;

mod raw_sql;
pub use raw_sql::RawSql;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a translated query
    QuerySql(QuerySql),

    /// Execute a SQL statement verbatim, e.g. fixture DDL
    RawSql(RawSql),
}
