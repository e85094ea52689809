//! SQL statement tree.
//!
//! Columns and tables are referenced by id; the serializer looks up their
//! names in the physical schema. Every table in a `SELECT` is referred to by
//! its position among the statement's sources: `0` for the `FROM` table,
//! `n` for the `n`-th join.

mod expr;
pub use expr::Expr;

mod expr_binary_op;
pub use expr_binary_op::{BinaryOp, ExprBinaryOp};

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_like;
pub use expr_like::ExprLike;

mod join;
pub use join::Join;

mod select;
pub use select::Select;

mod table_ref;
pub use table_ref::TableRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
