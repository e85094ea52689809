use super::Expr;
use sieve_core::schema::db::ColumnId;

/// A column, qualified by the position of its table among the statement's
/// sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprColumn {
    /// `0` for the `FROM` table, `n` for the `n`-th join
    pub table: usize,

    pub column: ColumnId,
}

impl Expr {
    pub fn column(table: usize, column: ColumnId) -> Expr {
        ExprColumn { table, column }.into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Expr::Column(value)
    }
}
