use super::{Conversion, Join};
use crate::schema::db::{self, ColumnId};
use crate::stmt;

/// What a field reference resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMapping {
    /// A scalar column
    Column(ColumnMapping),

    /// An owned object
    Owned(OwnedMapping),

    /// A navigation to another entity
    Reference(ReferenceMapping),
}

/// Physical counterpart of a scalar field.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    /// Joins from the root table to the table holding `column`
    pub joins: Vec<Join>,

    pub column: ColumnId,

    /// Physical type of the column. Parameters compared with the column are
    /// bound with this type.
    pub ty: db::Type,

    /// Logical type of the field
    pub logical: stmt::Type,

    pub conversion: Conversion,

    pub nullable: bool,
}

/// Physical counterpart of an owned object.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedMapping {
    /// Joins from the root table to the owned object's table, when it has its
    /// own table.
    pub joins: Vec<Join>,

    /// Columns that are all null exactly when the owned object is absent.
    pub null_columns: Vec<ColumnId>,
}

/// Physical counterpart of a navigation to another entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceMapping {
    /// Joins from the root table to the table holding the foreign key
    pub joins: Vec<Join>,

    /// Referenced entity
    pub target: String,

    /// Foreign key columns with their physical types, in the order of the
    /// target's primary key
    pub foreign_key: Vec<(ColumnId, db::Type)>,
}

impl FieldMapping {
    pub fn joins(&self) -> &[Join] {
        match self {
            FieldMapping::Column(mapping) => &mapping.joins,
            FieldMapping::Owned(mapping) => &mapping.joins,
            FieldMapping::Reference(mapping) => &mapping.joins,
        }
    }

    pub fn as_column(&self) -> Option<&ColumnMapping> {
        match self {
            FieldMapping::Column(mapping) => Some(mapping),
            _ => None,
        }
    }
}
