use crate::schema::db::{self, ColumnId};
use crate::stmt::Value;

use indexmap::IndexMap;

/// Describes how the concrete type of a row in a single-table hierarchy is
/// recorded.
///
/// Values are stored already coerced to `ty`; they are bound with `ty`
/// whatever form they were declared in.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDiscriminator {
    /// Root entity of the hierarchy
    pub base: String,

    /// Discriminator column on the hierarchy's table
    pub column: ColumnId,

    /// Physical type of the discriminator column
    pub ty: db::Type,

    /// Discriminator literal per concrete entity name
    pub values: IndexMap<String, Value>,
}

impl TypeDiscriminator {
    pub fn value(&self, entity: &str) -> Option<&Value> {
        self.values.get(entity)
    }

    /// Concrete entity stored under `value`.
    pub fn entity_for(&self, value: &Value) -> Option<&str> {
        self.values
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(entity, _)| entity.as_str())
    }
}
