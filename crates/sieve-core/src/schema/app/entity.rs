use super::Field;
use crate::schema::db::TableId;

use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct Entity {
    /// Name of the entity
    pub name: String,

    /// Table the entity's rows are stored in. Derived entities share their
    /// base's table.
    pub table: TableId,

    /// Fields declared on this entity. Inherited fields stay on the base.
    pub fields: IndexMap<String, Field>,

    /// Names of the primary key fields, in key order. Inherited by derived
    /// entities.
    pub primary_key: Vec<String>,

    /// Entity this one derives from, if any
    pub base: Option<String>,
}

impl Entity {
    /// Returns true if the entity does not derive from another one
    pub fn is_root(&self) -> bool {
        self.base.is_none()
    }

    /// Returns a field declared directly on this entity
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}
