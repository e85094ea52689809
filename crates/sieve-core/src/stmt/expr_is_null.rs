use super::{Expr, Field};

/// Tests whether a field or a navigation is null.
///
/// For an owned object this means "no owned row"; for a reference it means
/// the foreign key is null.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    /// When `true`, this is an "is not null" check.
    pub negate: bool,

    pub field: Field,
}

impl Expr {
    pub fn is_null(field: Field) -> Self {
        ExprIsNull {
            negate: false,
            field,
        }
        .into()
    }

    pub fn is_not_null(field: Field) -> Self {
        ExprIsNull {
            negate: true,
            field,
        }
        .into()
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Self::IsNull(value)
    }
}
