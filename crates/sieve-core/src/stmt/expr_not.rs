use super::Expr;

/// Negates a predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: impl Into<Self>) -> Self {
        ExprNot {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
