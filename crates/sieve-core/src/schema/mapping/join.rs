use crate::schema::db::{ColumnId, TableId};
use crate::stmt::Path;

/// A join needed to reach a column from the root entity's table.
///
/// Joins appear in chains: the `lhs` columns of a join's conditions belong to
/// the table reached by the previous join in the chain, or to the root table
/// for the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// Navigation path that introduced the join. Two field mappings sharing a
    /// path prefix share the join.
    pub path: Path,

    /// Joined table
    pub table: TableId,

    /// Join conditions, AND-ed together
    pub on: Vec<JoinOn>,
}

/// `lhs = rhs`, where `lhs` is on the joining table and `rhs` on the joined
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoinOn {
    pub lhs: ColumnId,
    pub rhs: ColumnId,
}
