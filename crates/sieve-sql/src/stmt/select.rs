use super::{Expr, ExprColumn, Join, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Selected columns, in order
    pub columns: Vec<ExprColumn>,

    pub from: TableRef,

    pub joins: Vec<Join>,

    pub filter: Option<Expr>,
}

impl Select {
    pub fn new(from: TableRef) -> Select {
        Select {
            columns: vec![],
            from,
            joins: vec![],
            filter: None,
        }
    }
}
