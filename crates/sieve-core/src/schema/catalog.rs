use super::{
    app::{self, FieldOwned, FieldPrimitive, FieldTy},
    db::{self, ColumnId},
    ColumnMapping, Declaration, FieldMapping, Join, JoinOn, OwnedMapping, ReferenceMapping,
    TypeDiscriminator,
};
use crate::{stmt, Error, Result};

use indexmap::IndexMap;
use log::trace;

/// Maps entities and their fields to tables and columns.
///
/// A catalog is built once from a [`Declaration`], verified as a whole, and
/// is read-only afterwards. Share it between threads with `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Physical tables
    pub db: db::Schema,

    /// Enumerations, by name
    pub enums: IndexMap<String, stmt::TypeEnum>,

    /// Entities, by name, bases before derived entities
    pub entities: IndexMap<String, app::Entity>,

    /// Discriminators, by root entity name
    pub discriminators: IndexMap<String, TypeDiscriminator>,
}

/// Where the next path segment is looked up.
#[derive(Clone, Copy)]
enum Scope<'a> {
    Entity(&'a app::Entity),
    Owned(&'a FieldOwned),
}

impl Catalog {
    /// Parses and builds a catalog from its JSON declaration.
    pub fn from_json(json: &str) -> Result<Catalog> {
        Catalog::from_declaration(Declaration::from_json(json)?)
    }

    /// Reads, parses and builds a catalog from a JSON declaration file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Catalog> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err).context(format!("reading catalog {}", path.display()))
        })?;

        Catalog::from_json(&json).map_err(|err| err.context(format!("loading {}", path.display())))
    }

    pub fn entity(&self, name: &str) -> Option<&app::Entity> {
        self.entities.get(name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&stmt::TypeEnum> {
        self.enums.get(name)
    }

    pub fn table(&self, id: db::TableId) -> &db::Table {
        self.db.table(id)
    }

    pub fn column(&self, id: ColumnId) -> &db::Column {
        self.db.column(id)
    }

    /// The entity followed by its bases, nearest first.
    pub fn ancestors<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a app::Entity> + 'a {
        let mut next = self.entities.get(name);

        std::iter::from_fn(move || {
            let entity = next?;
            next = entity
                .base
                .as_ref()
                .and_then(|base| self.entities.get(base));
            Some(entity)
        })
    }

    /// Root of the hierarchy `name` belongs to.
    pub fn root_of(&self, name: &str) -> Option<&app::Entity> {
        self.ancestors(name).last()
    }

    /// Returns `true` if `name` is `base` or derives from it.
    pub fn is_subtype_of(&self, name: &str, base: &str) -> bool {
        self.ancestors(name).any(|entity| entity.name == base)
    }

    /// `name` and every entity deriving from it, in declaration order.
    pub fn descendants(&self, name: &str) -> Vec<&app::Entity> {
        self.entities
            .values()
            .filter(|entity| self.is_subtype_of(&entity.name, name))
            .collect()
    }

    /// Finds a field declared on `entity` or inherited from one of its bases.
    pub fn find_field(&self, entity: &str, name: &str) -> Option<&app::Field> {
        self.ancestors(entity).find_map(|entity| entity.field(name))
    }

    /// All fields of `entity`, inherited fields first.
    pub fn fields(&self, entity: &str) -> Vec<&app::Field> {
        let mut chain = self.ancestors(entity).collect::<Vec<_>>();
        chain.reverse();
        chain
            .into_iter()
            .flat_map(|entity| entity.fields.values())
            .collect()
    }

    /// Primary key fields of `entity`, in key order.
    pub fn primary_key(&self, entity: &str) -> Vec<(&str, &FieldPrimitive)> {
        let Some(root) = self.entity(entity) else {
            return vec![];
        };

        root.primary_key
            .iter()
            .filter_map(|name| {
                let field = self.find_field(entity, name)?;
                Some((name.as_str(), field.as_primitive()?))
            })
            .collect()
    }

    /// Discriminator of the hierarchy `type_name` belongs to.
    pub fn discriminator_for(&self, type_name: &str) -> Option<&TypeDiscriminator> {
        let root = self.root_of(type_name)?;
        self.discriminators.get(&root.name)
    }

    /// Resolves a scalar field to its column.
    ///
    /// Fails with `UnmappedField` if any path segment has no mapping and with
    /// `TypeMismatch` if the field reference's declared type differs from the
    /// catalog's. Navigations (owned objects, references) are not columns and
    /// fail with `UnsupportedExpression`.
    pub fn resolve(&self, field: &stmt::Field) -> Result<ColumnMapping> {
        match self.resolve_field(field)? {
            FieldMapping::Column(mapping) => Ok(mapping),
            _ => Err(Error::unsupported_expression(format!(
                "`{field}` is a navigation, not a column"
            ))),
        }
    }

    /// Resolves a field reference, scalar or navigation, segment by segment.
    ///
    /// Every owned object stored in its own table and every reference
    /// navigated through adds a join to the mapping.
    pub fn resolve_field(&self, field: &stmt::Field) -> Result<FieldMapping> {
        let Some(entity) = self.entity(&field.owner) else {
            return Err(Error::unmapped_field(
                field.to_string(),
                format!("`{}` is not a mapped entity", field.owner),
            ));
        };

        let segments = field.path.segments();
        let mut scope = Scope::Entity(entity);
        let mut joins = vec![];

        for (i, segment) in segments.iter().enumerate() {
            let last = i + 1 == segments.len();

            let Some(app_field) = self.scope_field(scope, segment) else {
                return Err(Error::unmapped_field(
                    field.to_string(),
                    format!("`{}` has no mapped property `{segment}`", scope.name()),
                ));
            };

            trace!("resolve {field}: segment `{segment}` in `{}`", scope.name());

            match &app_field.ty {
                FieldTy::Primitive(primitive) => {
                    if !last {
                        return Err(Error::unmapped_field(
                            field.to_string(),
                            format!("`{segment}` is a scalar and cannot be navigated"),
                        ));
                    }

                    self.check_declared_type(field, &primitive.ty)?;

                    let column = self.db.column(primitive.column);
                    return Ok(FieldMapping::Column(ColumnMapping {
                        joins,
                        column: primitive.column,
                        ty: column.ty.clone(),
                        logical: primitive.ty.clone(),
                        conversion: primitive.conversion,
                        nullable: app_field.nullable || column.nullable,
                    }));
                }
                FieldTy::Owned(owned) => {
                    if !owned.is_table_split() {
                        joins.push(Join {
                            path: field.path.prefix(i + 1),
                            table: owned.table,
                            on: owned.join.clone(),
                        });
                    }

                    if last {
                        self.check_declared_type(field, &app_field.expr_ty())?;

                        let null_columns = if owned.is_table_split() {
                            owned.columns()
                        } else {
                            owned.join.iter().map(|on| on.rhs).collect()
                        };

                        return Ok(FieldMapping::Owned(OwnedMapping {
                            joins,
                            null_columns,
                        }));
                    }

                    scope = Scope::Owned(owned);
                }
                FieldTy::BelongsTo(belongs_to) => {
                    if last {
                        self.check_declared_type(field, &app_field.expr_ty())?;

                        return Ok(FieldMapping::Reference(ReferenceMapping {
                            joins,
                            target: belongs_to.target.clone(),
                            foreign_key: belongs_to
                                .foreign_key
                                .iter()
                                .map(|column| (*column, self.db.column(*column).ty.clone()))
                                .collect(),
                        }));
                    }

                    let Some(target) = self.entity(&belongs_to.target) else {
                        return Err(Error::unmapped_field(
                            field.to_string(),
                            format!("`{}` is not a mapped entity", belongs_to.target),
                        ));
                    };

                    joins.push(Join {
                        path: field.path.prefix(i + 1),
                        table: target.table,
                        on: belongs_to
                            .foreign_key
                            .iter()
                            .zip(self.primary_key(&target.name))
                            .map(|(lhs, (_, key))| JoinOn {
                                lhs: *lhs,
                                rhs: key.column,
                            })
                            .collect(),
                    });

                    scope = Scope::Entity(target);
                }
            }
        }

        Err(Error::unmapped_field(field.to_string(), "empty property path"))
    }

    fn scope_field<'a>(&'a self, scope: Scope<'a>, name: &str) -> Option<&'a app::Field> {
        match scope {
            Scope::Entity(entity) => self.find_field(&entity.name, name),
            Scope::Owned(owned) => owned.fields.get(name),
        }
    }

    fn check_declared_type(&self, field: &stmt::Field, mapped: &stmt::Type) -> Result<()> {
        if field.ty == *mapped {
            Ok(())
        } else {
            Err(Error::type_mismatch(format!(
                "`{field}` is referenced as {} but mapped as {mapped}",
                field.ty
            )))
        }
    }
}

impl Scope<'_> {
    fn name(&self) -> &str {
        match self {
            Scope::Entity(entity) => &entity.name,
            Scope::Owned(owned) => &owned.type_name,
        }
    }
}
