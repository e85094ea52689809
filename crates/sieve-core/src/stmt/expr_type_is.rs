use super::Expr;

/// The row is an instance of `subtype`, directly or through a further
/// derived type.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprTypeIs {
    pub subtype: String,
}

impl Expr {
    pub fn type_is(subtype: impl Into<String>) -> Self {
        ExprTypeIs {
            subtype: subtype.into(),
        }
        .into()
    }
}

impl From<ExprTypeIs> for Expr {
    fn from(value: ExprTypeIs) -> Self {
        Self::TypeIs(value)
    }
}
