use super::{ExprBinaryOp, ExprColumn, ExprInList, ExprIsNull, ExprLike};
use sieve_core::stmt::TypedValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND of the operands, in order
    And(Vec<Expr>),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// A column of one of the statement's tables
    Column(ExprColumn),

    /// Constant false, for predicates that can never match
    False,

    /// `expr IN (list)`
    InList(ExprInList),

    /// `expr IS [NOT] NULL`
    IsNull(ExprIsNull),

    /// `expr LIKE pattern`
    Like(ExprLike),

    /// Negation
    Not(Box<Expr>),

    /// OR of the operands, in order
    Or(Vec<Expr>),

    /// Row value, `(a, b)`
    Record(Vec<Expr>),

    /// A bound parameter
    Value(TypedValue),
}

impl Expr {
    pub fn and_from_vec(mut operands: Vec<Expr>) -> Expr {
        if operands.len() == 1 {
            operands.remove(0)
        } else {
            Expr::And(operands)
        }
    }

    pub fn or_from_vec(mut operands: Vec<Expr>) -> Expr {
        if operands.len() == 1 {
            operands.remove(0)
        } else {
            Expr::Or(operands)
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: impl Into<Expr>) -> Expr {
        Expr::Not(Box::new(expr.into()))
    }

    pub fn value(value: TypedValue) -> Expr {
        Expr::Value(value)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Expr::Value(_))
    }

    /// Params bound by this expression, in serialization order.
    pub fn params(&self) -> Vec<&TypedValue> {
        let mut params = vec![];
        self.collect_params(&mut params);
        params
    }

    fn collect_params<'a>(&'a self, dst: &mut Vec<&'a TypedValue>) {
        match self {
            Expr::And(operands) | Expr::Or(operands) | Expr::Record(operands) => {
                operands.iter().for_each(|expr| expr.collect_params(dst))
            }
            Expr::BinaryOp(expr) => {
                expr.lhs.collect_params(dst);
                expr.rhs.collect_params(dst);
            }
            Expr::InList(expr) => {
                expr.expr.collect_params(dst);
                expr.list.iter().for_each(|item| item.collect_params(dst));
            }
            Expr::IsNull(expr) => expr.expr.collect_params(dst),
            Expr::Like(expr) => {
                expr.expr.collect_params(dst);
                expr.pattern.collect_params(dst);
            }
            Expr::Not(expr) => expr.collect_params(dst),
            Expr::Value(value) => dst.push(value),
            Expr::Column(_) | Expr::False => {}
        }
    }
}

impl From<TypedValue> for Expr {
    fn from(value: TypedValue) -> Self {
        Expr::Value(value)
    }
}
