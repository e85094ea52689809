use sieve_core::{
    schema::{db, Conversion},
    stmt::{self, TypedValue},
};

/// Output of a translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// Query text in the translator's dialect
    pub sql: String,

    /// Parameters, in placeholder order, each with the physical type it is
    /// bound as
    pub params: Vec<TypedValue>,

    /// Selected fields, in column order
    pub columns: Vec<ProjectedField>,
}

/// A selected column and the field it loads.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedField {
    /// Dotted field path relative to the query's entity
    pub name: String,

    pub column: db::ColumnId,

    /// Physical type of the column
    pub ty: db::Type,

    /// Logical type of the field
    pub logical: stmt::Type,

    pub conversion: Conversion,
}

impl Translation {
    /// Names of the selected fields, in column order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Physical types of the selected columns, in column order.
    pub fn column_types(&self) -> Vec<db::Type> {
        self.columns.iter().map(|column| column.ty.clone()).collect()
    }
}
