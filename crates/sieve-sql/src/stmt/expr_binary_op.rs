use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
}

impl Expr {
    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Expr {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Expr::BinaryOp(value)
    }
}
