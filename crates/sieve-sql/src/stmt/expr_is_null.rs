use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    /// When `true`, this is an `IS NOT NULL` check.
    pub negate: bool,

    pub expr: Box<Expr>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Expr>) -> Expr {
        ExprIsNull {
            negate: false,
            expr: Box::new(expr.into()),
        }
        .into()
    }

    pub fn is_not_null(expr: impl Into<Expr>) -> Expr {
        ExprIsNull {
            negate: true,
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Expr::IsNull(value)
    }
}
