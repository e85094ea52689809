use super::{Expr, Field, Operand};
use crate::Result;

/// Tests a field for membership in a host-side collection.
///
/// Items are literals or, for navigations, entities. An empty list matches
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub field: Field,
    pub list: Vec<Operand>,
}

impl Expr {
    /// Fails with a type mismatch if any item is not compatible with the
    /// field's declared type.
    pub fn in_list<I>(field: Field, list: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let list = list.into_iter().map(Into::into).collect::<Vec<Operand>>();

        for item in &list {
            item.check(&field)?;
        }

        Ok(ExprInList { field, list }.into())
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
