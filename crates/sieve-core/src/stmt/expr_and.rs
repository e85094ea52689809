use super::*;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Conjunction of `lhs` and `rhs`. Nested conjunctions are flattened;
    /// operand order is preserved.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        match (lhs, rhs) {
            (Self::And(mut lhs_and), Self::And(rhs_and)) => {
                lhs_and.operands.extend(rhs_and.operands);
                lhs_and.into()
            }
            (Self::And(mut lhs_and), rhs) => {
                lhs_and.operands.push(rhs);
                lhs_and.into()
            }
            (lhs, Self::And(mut rhs_and)) => {
                rhs_and.operands.insert(0, lhs);
                rhs_and.into()
            }
            (lhs, rhs) => ExprAnd {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }

    /// Conjunction of all operands. Returns `None` when `operands` is empty.
    pub fn and_from_vec(operands: Vec<Self>) -> Option<Self> {
        operands.into_iter().reduce(Expr::and)
    }
}

impl ops::Deref for ExprAnd {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a ExprAnd {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
