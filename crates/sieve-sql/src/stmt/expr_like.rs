use super::Expr;

/// `expr LIKE pattern [ESCAPE 'c']`
///
/// The pattern is bound as a parameter. Wildcards in user input must already
/// be escaped with `escape`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
    pub escape: Option<char>,
}

impl Expr {
    pub fn like(expr: impl Into<Expr>, pattern: impl Into<Expr>, escape: Option<char>) -> Expr {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            escape,
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Expr::Like(value)
    }
}
