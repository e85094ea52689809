use crate::schema::{
    db::{ColumnId, TableId},
    Conversion, JoinOn,
};
use crate::stmt;

use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct Field {
    /// The field name
    pub name: String,

    /// Primitive, owned object or reference
    pub ty: FieldTy,

    /// True if the field can be null
    pub nullable: bool,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    Owned(FieldOwned),
    BelongsTo(FieldBelongsTo),
}

/// A scalar stored in a single column.
#[derive(Debug, Clone)]
pub struct FieldPrimitive {
    /// Logical type of the field
    pub ty: stmt::Type,

    /// Column the value is stored in
    pub column: ColumnId,

    /// How logical values are converted to the column's representation
    pub conversion: Conversion,
}

/// A value object owned by its containing entity.
///
/// The owned object lives either in its own table, joined to the owner's
/// table on `join`, or in the owner's table itself (table splitting), in
/// which case `join` is empty and `table` is the owner's table.
#[derive(Debug, Clone)]
pub struct FieldOwned {
    /// Name of the owned type
    pub type_name: String,

    /// Table holding the owned object's columns
    pub table: TableId,

    /// Owner key columns to owned table columns
    pub join: Vec<JoinOn>,

    /// Fields of the owned object. Owned objects can nest.
    pub fields: IndexMap<String, Field>,
}

/// A navigation to another entity through foreign key columns on the
/// declaring entity's table.
#[derive(Debug, Clone)]
pub struct FieldBelongsTo {
    /// Referenced entity
    pub target: String,

    /// Foreign key columns, matching the target's primary key in order
    pub foreign_key: Vec<ColumnId>,
}

impl Field {
    /// The logical type the field evaluates to.
    pub fn expr_ty(&self) -> stmt::Type {
        match &self.ty {
            FieldTy::Primitive(primitive) => primitive.ty.clone(),
            FieldTy::Owned(owned) => stmt::Type::Model(owned.type_name.clone()),
            FieldTy::BelongsTo(belongs_to) => stmt::Type::Model(belongs_to.target.clone()),
        }
    }

    pub fn as_primitive(&self) -> Option<&FieldPrimitive> {
        match &self.ty {
            FieldTy::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.ty, FieldTy::Primitive(_))
    }
}

impl FieldOwned {
    /// True when the owned object is stored in its owner's table.
    pub fn is_table_split(&self) -> bool {
        self.join.is_empty()
    }

    /// Every column storing a primitive of the owned object, nested owned
    /// objects sharing the table included.
    pub fn columns(&self) -> Vec<ColumnId> {
        let mut columns = vec![];

        for field in self.fields.values() {
            match &field.ty {
                FieldTy::Primitive(primitive) => columns.push(primitive.column),
                FieldTy::Owned(owned) if owned.is_table_split() => {
                    columns.extend(owned.columns());
                }
                FieldTy::BelongsTo(belongs_to) => columns.extend(&belongs_to.foreign_key),
                FieldTy::Owned(_) => {}
            }
        }

        columns
    }
}
