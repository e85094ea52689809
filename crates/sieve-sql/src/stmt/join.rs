use super::{Expr, TableRef};

/// `LEFT JOIN table ON on`
///
/// Left joins keep rows whose owned object or reference is absent; filters
/// on the joined columns decide whether such rows match.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: TableRef,
    pub on: Expr,
}
