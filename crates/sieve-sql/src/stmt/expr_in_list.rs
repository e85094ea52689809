use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,

    /// Never empty. An empty membership test is `Expr::False`.
    pub list: Vec<Expr>,
}

impl Expr {
    pub fn in_list(expr: impl Into<Expr>, list: Vec<Expr>) -> Expr {
        if list.is_empty() {
            return Expr::False;
        }

        ExprInList {
            expr: Box::new(expr.into()),
            list,
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Expr::InList(value)
    }
}
