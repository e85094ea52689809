use sieve_core::{stmt, Error, Result};

/// A Rust type that maps to a logical scalar type.
pub trait Primitive: Sized {
    fn ty() -> stmt::Type;

    fn into_value(self) -> stmt::Value;

    fn load(value: stmt::Value) -> Result<Self>;
}

/// A Rust enum stored through an enum conversion.
///
/// `NAME` must match an enum declared in the catalog, and variant names must
/// match its variants.
pub trait Enum: Sized {
    const NAME: &'static str;

    fn variant_name(&self) -> &'static str;

    fn from_variant_name(name: &str) -> Option<Self>;
}

impl Primitive for String {
    fn ty() -> stmt::Type {
        stmt::Type::String
    }

    fn into_value(self) -> stmt::Value {
        stmt::Value::String(self)
    }

    fn load(value: stmt::Value) -> Result<Self> {
        match value {
            stmt::Value::String(value) => Ok(value),
            value => Err(load_error("string", &value)),
        }
    }
}

impl Primitive for i64 {
    fn ty() -> stmt::Type {
        stmt::Type::I64
    }

    fn into_value(self) -> stmt::Value {
        stmt::Value::I64(self)
    }

    fn load(value: stmt::Value) -> Result<Self> {
        match value {
            stmt::Value::I64(value) => Ok(value),
            value => Err(load_error("integer", &value)),
        }
    }
}

impl<T: Enum> Primitive for T {
    fn ty() -> stmt::Type {
        stmt::Type::enumeration(T::NAME)
    }

    fn into_value(self) -> stmt::Value {
        stmt::Value::enumeration(T::NAME, self.variant_name())
    }

    fn load(value: stmt::Value) -> Result<Self> {
        match &value {
            stmt::Value::Enum(e) if e.ty == T::NAME => T::from_variant_name(&e.variant)
                .ok_or_else(|| {
                    Error::type_mismatch(format!(
                        "`{}` is not a variant of `{}`",
                        e.variant,
                        T::NAME
                    ))
                }),
            _ => Err(load_error(&format!("enum `{}`", T::NAME), &value)),
        }
    }
}

fn load_error(expected: &str, actual: &stmt::Value) -> Error {
    Error::type_mismatch(format!(
        "expected {expected} value, found {}",
        actual.kind_name()
    ))
}
