use super::ProjectedField;

use sieve_core::{
    schema::app::{Field, FieldTy},
    Catalog,
};

/// Columns selected for `entity`: its primitive fields and those of owned
/// objects stored in its table, inherited fields first.
///
/// Owned objects with their own table and references are not loaded.
pub(super) fn apply(catalog: &Catalog, entity: &str) -> Vec<ProjectedField> {
    let mut columns = vec![];

    for field in catalog.fields(entity) {
        project_field(catalog, field, "", &mut columns);
    }

    columns
}

fn project_field(catalog: &Catalog, field: &Field, prefix: &str, dst: &mut Vec<ProjectedField>) {
    let name = format!("{prefix}{}", field.name);

    match &field.ty {
        FieldTy::Primitive(primitive) => dst.push(ProjectedField {
            name,
            column: primitive.column,
            ty: catalog.column(primitive.column).ty.clone(),
            logical: primitive.ty.clone(),
            conversion: primitive.conversion,
        }),
        FieldTy::Owned(owned) if owned.is_table_split() => {
            let prefix = format!("{name}.");
            for nested in owned.fields.values() {
                project_field(catalog, nested, &prefix, dst);
            }
        }
        FieldTy::Owned(_) | FieldTy::BelongsTo(_) => {}
    }
}
