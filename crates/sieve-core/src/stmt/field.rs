use super::{Path, Type};

use std::fmt;

/// A reference to a scalar property (or a navigation) of an entity.
///
/// The reference is purely logical: it names the owning entity, the property
/// path and the type the caller expects. The catalog decides which table and
/// column it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// Name of the entity declaring the first path segment.
    pub owner: String,

    /// Property path from `owner` to the field.
    pub path: Path,

    /// Declared logical type.
    pub ty: Type,
}

impl Field {
    pub fn new(owner: impl Into<String>, path: impl Into<Path>, ty: Type) -> Field {
        Field {
            owner: owner.into(),
            path: path.into(),
            ty,
        }
    }

    pub fn string(owner: impl Into<String>, path: impl Into<Path>) -> Field {
        Field::new(owner, path, Type::String)
    }

    pub fn i64(owner: impl Into<String>, path: impl Into<Path>) -> Field {
        Field::new(owner, path, Type::I64)
    }

    pub fn enumeration(
        owner: impl Into<String>,
        path: impl Into<Path>,
        ty: impl Into<String>,
    ) -> Field {
        Field::new(owner, path, Type::Enum(ty.into()))
    }

    /// A navigation to an owned object or a referenced entity.
    pub fn model(
        owner: impl Into<String>,
        path: impl Into<Path>,
        ty: impl Into<String>,
    ) -> Field {
        Field::new(owner, path, Type::Model(ty.into()))
    }

    pub fn is_nested(&self) -> bool {
        self.path.is_nested()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.path)
    }
}
