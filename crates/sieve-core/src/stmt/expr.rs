use super::*;

/// A filter predicate over entity fields.
///
/// Expressions are immutable once built and can be shared between
/// translations. Constructors taking a literal check it against the field's
/// declared type and fail with a type mismatch instead of producing a
/// predicate the database would have to coerce.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of predicates, in order
    And(ExprAnd),

    /// Prefix match on a string field
    StartsWith(ExprStartsWith),

    /// Field equals a literal or an entity
    Eq(ExprEq),

    /// Field is one of a set of literals or entities
    InList(ExprInList),

    /// Whether a field or navigation is (or is not) null
    IsNull(ExprIsNull),

    /// Negate a predicate
    Not(ExprNot),

    /// OR a set of predicates, in order
    Or(ExprOr),

    /// The row is an instance of the given type (or one of its subtypes)
    TypeIs(ExprTypeIs),
}

impl Expr {
    pub fn is_and(&self) -> bool {
        matches!(self, Self::And(_))
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Self::Or(_))
    }

    /// Every field referenced by the expression, in tree order.
    pub fn fields(&self) -> Vec<&Field> {
        let mut fields = vec![];
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields<'a>(&'a self, dst: &mut Vec<&'a Field>) {
        match self {
            Expr::And(expr) => expr.operands.iter().for_each(|e| e.collect_fields(dst)),
            Expr::Or(expr) => expr.operands.iter().for_each(|e| e.collect_fields(dst)),
            Expr::Not(expr) => expr.expr.collect_fields(dst),
            Expr::StartsWith(expr) => dst.push(&expr.field),
            Expr::Eq(expr) => dst.push(&expr.field),
            Expr::InList(expr) => dst.push(&expr.field),
            Expr::IsNull(expr) => dst.push(&expr.field),
            Expr::TypeIs(_) => {}
        }
    }
}
