use std::fmt;

/// Logical (domain-level) type of a field or literal.
///
/// This is how the application sees a value. The physical storage type lives
/// on the column, see [`db::Type`](crate::schema::db::Type), and the two are
/// bridged by the field's [`Conversion`](crate::schema::Conversion).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A string
    String,

    /// A signed 64-bit integer
    I64,

    /// An enumeration, identified by name. Variants are registered in the
    /// catalog.
    Enum(String),

    /// An owned object or a referenced entity, identified by type name. Only
    /// valid for null checks and entity-reference comparisons.
    Model(String),
}

/// An enumeration registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEnum {
    pub name: String,
    pub variants: Vec<EnumVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    /// Variant name, also its string form under an enum-to-string conversion.
    pub name: String,

    /// Integer form under an enum-to-integer conversion.
    pub discriminant: i64,
}

impl Type {
    pub fn enumeration(name: impl Into<String>) -> Type {
        Type::Enum(name.into())
    }

    pub fn model(name: impl Into<String>) -> Type {
        Type::Model(name.into())
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Type::Enum(_))
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Type::Model(_))
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_model()
    }
}

impl TypeEnum {
    pub fn variant(&self, name: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::String => f.write_str("string"),
            Type::I64 => f.write_str("integer"),
            Type::Enum(name) => write!(f, "enum `{name}`"),
            Type::Model(name) => write!(f, "`{name}`"),
        }
    }
}
