use super::Operation;

use crate::schema::db;
use crate::stmt::TypedValue;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The SQL query to execute
    pub sql: String,

    /// Parameters, in placeholder order
    pub params: Vec<TypedValue>,

    /// Physical types of the selected columns, in order
    pub ret: Vec<db::Type>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
