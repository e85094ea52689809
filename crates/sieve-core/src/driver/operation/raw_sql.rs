use super::Operation;

#[derive(Debug, Clone)]
pub struct RawSql {
    pub sql: String,
}

impl RawSql {
    pub fn new(sql: impl Into<String>) -> RawSql {
        RawSql { sql: sql.into() }
    }
}

impl From<RawSql> for Operation {
    fn from(value: RawSql) -> Self {
        Self::RawSql(value)
    }
}
