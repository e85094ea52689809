//! Application-level schema: entities, their fields and how each field is
//! stored.

mod entity;
pub use entity::Entity;

mod field;
pub use field::{Field, FieldBelongsTo, FieldOwned, FieldPrimitive, FieldTy};
