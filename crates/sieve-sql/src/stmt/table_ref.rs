use sieve_core::schema::db::TableId;

/// A table in the `FROM` clause or a join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRef {
    pub table: TableId,

    /// Position among the statement's sources, rendered as the `t{n}` alias
    pub alias: usize,
}
