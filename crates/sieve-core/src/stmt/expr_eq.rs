use super::{Expr, Field, Operand};
use crate::Result;

/// Tests a field for equality with a literal or an entity.
///
/// Comparing with null is a null test, not `= NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprEq {
    pub field: Field,
    pub rhs: Operand,
}

impl Expr {
    /// Fails with a type mismatch if `rhs` is not compatible with the field's
    /// declared type.
    pub fn eq(field: Field, rhs: impl Into<Operand>) -> Result<Self> {
        let rhs = rhs.into();
        rhs.check(&field)?;
        Ok(ExprEq { field, rhs }.into())
    }
}

impl From<ExprEq> for Expr {
    fn from(value: ExprEq) -> Self {
        Self::Eq(value)
    }
}
