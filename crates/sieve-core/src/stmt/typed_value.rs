use super::Value;
use crate::schema::db;

/// A query parameter: a value together with the physical type it must be
/// bound as.
///
/// Drivers bind the value using `ty`, never a type guessed from the value's
/// own representation. This is what keeps a string discriminator literal from
/// being sent as a LOB.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub ty: db::Type,
    pub value: Value,
}

impl TypedValue {
    pub fn new(ty: db::Type, value: impl Into<Value>) -> TypedValue {
        TypedValue {
            ty,
            value: value.into(),
        }
    }
}
