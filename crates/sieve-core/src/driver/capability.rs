#[derive(Debug)]
pub struct Capability {
    /// SQL dialect spoken by the database
    pub dialect: Dialect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Oracle,
    Postgresql,
    Sqlite,
    Mysql,
}

impl Capability {
    /// Oracle capabilities
    pub const ORACLE: Self = Self {
        dialect: Dialect::Oracle,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        dialect: Dialect::Postgresql,
    };

    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        dialect: Dialect::Sqlite,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        dialect: Dialect::Mysql,
    };
}
