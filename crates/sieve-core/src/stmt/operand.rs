use super::{EntityRef, Field, Type, Value};
use crate::{Error, Result};

/// Right-hand side of an equality or membership test.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal constant
    Value(Value),

    /// A host-side entity, compared by primary key
    Entity(EntityRef),
}

impl Operand {
    pub fn is_null(&self) -> bool {
        matches!(self, Operand::Value(Value::Null))
    }

    /// Checks that the operand can be compared with `field`.
    pub(crate) fn check(&self, field: &Field) -> Result<()> {
        let compatible = match (self, &field.ty) {
            (Operand::Value(value), ty) => value.is_a(ty) || (value.is_null() && ty.is_model()),
            (Operand::Entity(entity), Type::Model(name)) => entity.entity == *name,
            (Operand::Entity(_), _) => false,
        };

        if compatible {
            Ok(())
        } else {
            Err(Error::type_mismatch(format!(
                "cannot compare `{field}` of type {} with {}",
                field.ty,
                self.kind_name()
            )))
        }
    }

    fn kind_name(&self) -> String {
        match self {
            Operand::Value(value) => value.kind_name(),
            Operand::Entity(entity) => format!("`{}` entity", entity.entity),
        }
    }
}

impl From<EntityRef> for Operand {
    fn from(value: EntityRef) -> Self {
        Operand::Entity(value)
    }
}

impl<T> From<T> for Operand
where
    Value: From<T>,
{
    fn from(value: T) -> Self {
        Operand::Value(Value::from(value))
    }
}
