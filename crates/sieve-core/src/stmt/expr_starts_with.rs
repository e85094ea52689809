use super::{Expr, Field, Type};
use crate::{Error, Result};

/// Tests if a string field starts with a prefix.
///
/// # Examples
///
/// ```text
/// starts_with(BeastRider.Beast.Name, "Khal")
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStartsWith {
    /// The string field to test.
    pub field: Field,

    /// The prefix to match. Wildcard characters match literally.
    pub prefix: String,
}

impl Expr {
    pub fn starts_with(field: Field, prefix: impl Into<String>) -> Result<Self> {
        if field.ty != Type::String {
            return Err(Error::type_mismatch(format!(
                "prefix match requires a string field; `{field}` is {}",
                field.ty
            )));
        }

        Ok(ExprStartsWith {
            field,
            prefix: prefix.into(),
        }
        .into())
    }
}

impl From<ExprStartsWith> for Expr {
    fn from(value: ExprStartsWith) -> Self {
        Self::StartsWith(value)
    }
}
