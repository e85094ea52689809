use super::*;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Disjunction of `lhs` and `rhs`. Nested disjunctions are flattened;
    /// operand order is preserved.
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        match (lhs, rhs) {
            (Self::Or(mut lhs_or), Self::Or(rhs_or)) => {
                lhs_or.operands.extend(rhs_or.operands);
                lhs_or.into()
            }
            (Self::Or(mut lhs_or), rhs) => {
                lhs_or.operands.push(rhs);
                lhs_or.into()
            }
            (lhs, Self::Or(mut rhs_or)) => {
                rhs_or.operands.insert(0, lhs);
                rhs_or.into()
            }
            (lhs, rhs) => ExprOr {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }

    pub fn or_from_vec(operands: Vec<Self>) -> Option<Self> {
        operands.into_iter().reduce(Expr::or)
    }
}

impl ops::Deref for ExprOr {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a ExprOr {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
