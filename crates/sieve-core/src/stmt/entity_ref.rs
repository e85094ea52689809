use super::Value;

use indexmap::IndexMap;

/// A host-side entity instance used as a comparison operand.
///
/// Only a snapshot of its property values is kept. The translator decomposes
/// it into primary key literals; the object itself never reaches the query.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRef {
    /// Entity type name.
    pub entity: String,

    /// Property values by property name.
    pub fields: IndexMap<String, Value>,
}

impl EntityRef {
    pub fn new(entity: impl Into<String>) -> EntityRef {
        EntityRef {
            entity: entity.into(),
            fields: IndexMap::new(),
        }
    }

    /// Sets a property value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> EntityRef {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
