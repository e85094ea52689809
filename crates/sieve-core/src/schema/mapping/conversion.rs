use crate::stmt::{TypeEnum, Value, ValueEnum};
use crate::{Error, Result};

use serde::Deserialize;

/// A reversible mapping between a field's logical value and the value stored
/// in its column.
///
/// Literals compared with a converted column are converted before they are
/// bound. An enum literal is never left for the database to coerce.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// Stored as is
    #[default]
    Identity,

    /// Enum stored as its variant name
    EnumToString,

    /// Enum stored as its variant's discriminant
    EnumToInteger,
}

impl Conversion {
    pub fn is_identity(self) -> bool {
        matches!(self, Conversion::Identity)
    }

    pub fn is_enum(self) -> bool {
        matches!(self, Conversion::EnumToString | Conversion::EnumToInteger)
    }

    /// Converts a logical value into its stored form. `ty` is the enum being
    /// converted, if any.
    pub fn to_column(self, value: Value, ty: Option<&TypeEnum>) -> Result<Value> {
        match (self, value) {
            (_, Value::Null) => Ok(Value::Null),
            (Conversion::Identity, Value::Enum(value)) => Err(Error::type_mismatch(format!(
                "enum `{}` has no storage conversion",
                value.ty
            ))),
            (Conversion::Identity, value) => Ok(value),
            (Conversion::EnumToString, Value::Enum(value)) => {
                let variant = enum_variant(ty, &value)?;
                Ok(Value::String(variant.name.clone()))
            }
            (Conversion::EnumToInteger, Value::Enum(value)) => {
                let variant = enum_variant(ty, &value)?;
                Ok(Value::I64(variant.discriminant))
            }
            (conversion, value) => Err(Error::type_mismatch(format!(
                "{conversion:?} conversion expects an enum, found {}",
                value.kind_name()
            ))),
        }
    }

    /// Converts a stored value back into its logical form.
    pub fn from_column(self, value: Value, ty: Option<&TypeEnum>) -> Result<Value> {
        let ty = match (self, ty) {
            (_, _) if value.is_null() => return Ok(Value::Null),
            (Conversion::Identity, _) => return Ok(value),
            (_, Some(ty)) => ty,
            (conversion, None) => {
                return Err(Error::type_mismatch(format!(
                    "{conversion:?} conversion has no enum type"
                )))
            }
        };

        let variant = match (self, &value) {
            (Conversion::EnumToString, Value::String(name)) => ty.variant(name),
            (Conversion::EnumToInteger, Value::I64(discriminant)) => {
                ty.variant_by_discriminant(*discriminant)
            }
            _ => None,
        };

        match variant {
            Some(variant) => Ok(Value::enumeration(&ty.name, &variant.name)),
            None => Err(Error::type_mismatch(format!(
                "stored value {value} is not a variant of enum `{}`",
                ty.name
            ))),
        }
    }
}

fn enum_variant<'a>(
    ty: Option<&'a TypeEnum>,
    value: &ValueEnum,
) -> Result<&'a crate::stmt::EnumVariant> {
    let Some(ty) = ty.filter(|ty| ty.name == value.ty) else {
        return Err(Error::type_mismatch(format!(
            "enum `{}` does not match the field's enum",
            value.ty
        )));
    };

    ty.variant(&value.variant).ok_or_else(|| {
        Error::type_mismatch(format!(
            "`{}` is not a variant of enum `{}`",
            value.variant, value.ty
        ))
    })
}
