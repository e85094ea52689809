use crate::Primitive;

use sieve_core::{stmt::Value, Error, Result};

use indexmap::IndexMap;

/// A loaded row: field values by dotted field name, in projection order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Loads the value of `name` as `T`.
    pub fn get_as<T: Primitive>(&self, name: &str) -> Result<T> {
        let Some(value) = self.fields.get(name) else {
            return Err(Error::unmapped_field(name, "not loaded by the query"));
        };

        T::load(value.clone()).map_err(|err| err.context(format!("loading `{name}`")))
    }

    /// Loads the value of `name` as `T`, mapping null to `None`.
    pub fn get_opt<T: Primitive>(&self, name: &str) -> Result<Option<T>> {
        match self.fields.get(name) {
            Some(Value::Null) => Ok(None),
            _ => self.get_as(name).map(Some),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn insert(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }
}
