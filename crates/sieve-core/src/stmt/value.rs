use super::Type;

use std::fmt;

/// A typed constant.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Signed 64-bit integer
    I64(i64),

    /// String value
    String(String),

    /// An enum tag. Carries no storage representation of its own: the column
    /// conversion decides whether it is bound as a string or an integer.
    Enum(ValueEnum),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    /// Name of the enum type
    pub ty: String,

    /// Name of the variant
    pub variant: String,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn enumeration(ty: impl Into<String>, variant: impl Into<String>) -> Self {
        ValueEnum {
            ty: ty.into(),
            variant: variant.into(),
        }
        .into()
    }

    /// Returns `true` if the value can be compared with a field of logical
    /// type `ty`. Null is compatible with every scalar type.
    pub fn is_a(&self, ty: &Type) -> bool {
        match (self, ty) {
            (Value::Null, ty) => ty.is_scalar(),
            (Value::I64(_), Type::I64) => true,
            (Value::String(_), Type::String) => true,
            (Value::Enum(value), Type::Enum(name)) => value.ty == *name,
            _ => false,
        }
    }

    /// Short description of the value's kind, used in error messages.
    pub fn kind_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::I64(_) => "integer".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Enum(value) => format!("enum `{}`", value.ty),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(value) => Some(*value),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_string(&self) -> &str {
        match self {
            Value::String(value) => value,
            _ => panic!("expected string value; actual={self:#?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::I64(value) => write!(f, "{value}"),
            Value::String(value) => write!(f, "{value:?}"),
            Value::Enum(value) => write!(f, "{}::{}", value.ty, value.variant),
        }
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Self::Enum(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I64(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
