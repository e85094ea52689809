use super::Joins;

use sieve_core::{
    err,
    schema::{
        app,
        db::{self, ColumnId},
        ColumnMapping, Conversion, FieldMapping, ReferenceMapping,
    },
    stmt::{self, EntityRef, Operand, TypedValue, Value},
    Catalog, Error, Result,
};
use sieve_sql::stmt as sql;

use log::trace;

/// Escape character for `LIKE` patterns
const LIKE_ESCAPE: char = '\\';

/// Lowers a filter on one root entity into a SQL predicate, collecting the
/// joins it needs along the way.
pub(super) struct LowerQuery<'a> {
    catalog: &'a Catalog,

    /// Entity the query selects
    root: &'a app::Entity,

    joins: Joins,
}

impl<'a> LowerQuery<'a> {
    pub(super) fn new(catalog: &'a Catalog, root: &'a app::Entity) -> LowerQuery<'a> {
        LowerQuery {
            catalog,
            root,
            joins: Joins::default(),
        }
    }

    pub(super) fn into_joins(self) -> Vec<sql::Join> {
        self.joins.into_vec()
    }

    pub(super) fn lower_expr(&mut self, expr: &stmt::Expr) -> Result<sql::Expr> {
        match expr {
            stmt::Expr::And(expr) => {
                let operands = expr
                    .operands
                    .iter()
                    .map(|operand| self.lower_expr(operand))
                    .collect::<Result<Vec<_>>>()?;
                Ok(sql::Expr::and_from_vec(operands))
            }
            stmt::Expr::Or(expr) => {
                let operands = expr
                    .operands
                    .iter()
                    .map(|operand| self.lower_expr(operand))
                    .collect::<Result<Vec<_>>>()?;
                Ok(sql::Expr::or_from_vec(operands))
            }
            stmt::Expr::Not(expr) => Ok(sql::Expr::not(self.lower_expr(&expr.expr)?)),
            stmt::Expr::Eq(expr) => self.lower_eq(&expr.field, &expr.rhs),
            stmt::Expr::InList(expr) => self.lower_in_list(&expr.field, &expr.list),
            stmt::Expr::IsNull(expr) => {
                let (mapping, alias) = self.resolve(&expr.field)?;
                Ok(null_test(&mapping, alias, expr.negate))
            }
            stmt::Expr::StartsWith(expr) => self.lower_starts_with(&expr.field, &expr.prefix),
            stmt::Expr::TypeIs(expr) => self.lower_type_is(&expr.subtype),
        }
    }

    /// Tests the discriminator column for `subtype` and every entity deriving
    /// from it.
    pub(super) fn lower_type_is(&mut self, subtype: &str) -> Result<sql::Expr> {
        if self.catalog.entity(subtype).is_none() {
            return Err(Error::unknown_subtype(
                subtype,
                format!("`{subtype}` is not a mapped entity"),
            ));
        }

        let same_hierarchy = match (
            self.catalog.root_of(subtype),
            self.catalog.root_of(&self.root.name),
        ) {
            (Some(lhs), Some(rhs)) => lhs.name == rhs.name,
            _ => false,
        };

        if !same_hierarchy {
            return Err(Error::unknown_subtype(
                subtype,
                format!("`{subtype}` is not in the hierarchy of `{}`", self.root.name),
            ));
        }

        let Some(discriminator) = self.catalog.discriminator_for(subtype) else {
            return Err(Error::unknown_subtype(
                subtype,
                format!("the hierarchy of `{subtype}` declares no discriminator"),
            ));
        };

        let mut values = self
            .catalog
            .descendants(subtype)
            .into_iter()
            .filter_map(|entity| discriminator.value(&entity.name))
            .map(|value| sql::Expr::from(TypedValue::new(discriminator.ty.clone(), value.clone())))
            .collect::<Vec<_>>();

        if values.is_empty() {
            return Err(Error::unknown_subtype(
                subtype,
                format!("neither `{subtype}` nor any entity deriving from it has a discriminator value"),
            ));
        }

        trace!("type test `{subtype}`: {} discriminator value(s)", values.len());

        // The discriminator lives on the hierarchy's table, the root table
        let column = sql::Expr::column(0, discriminator.column);

        Ok(if values.len() == 1 {
            sql::Expr::eq(column, values.remove(0))
        } else {
            sql::Expr::in_list(column, values)
        })
    }

    fn lower_eq(&mut self, field: &stmt::Field, rhs: &Operand) -> Result<sql::Expr> {
        let (mapping, alias) = self.resolve(field)?;

        if rhs.is_null() {
            return Ok(null_test(&mapping, alias, false));
        }

        match (&mapping, rhs) {
            (FieldMapping::Column(column), Operand::Value(value)) => {
                let value = self.column_value(field, column, value.clone())?;
                Ok(sql::Expr::eq(sql::Expr::column(alias, column.column), value))
            }
            (FieldMapping::Reference(reference), Operand::Entity(entity)) => {
                let key = self.foreign_key_values(field, reference, entity)?;

                let operands = reference
                    .foreign_key
                    .iter()
                    .zip(key)
                    .map(|((column, _), value)| sql::Expr::eq(sql::Expr::column(alias, *column), value))
                    .collect();

                Ok(sql::Expr::and_from_vec(operands))
            }
            _ => Err(unsupported_comparison(field, &mapping, rhs)),
        }
    }

    fn lower_in_list(&mut self, field: &stmt::Field, list: &[Operand]) -> Result<sql::Expr> {
        let (mapping, alias) = self.resolve(field)?;

        let (nulls, items): (Vec<&Operand>, Vec<&Operand>) =
            list.iter().partition(|item| item.is_null());

        let mut operands = vec![];

        if !items.is_empty() {
            match &mapping {
                FieldMapping::Column(column) => {
                    let values = items
                        .iter()
                        .map(|item| match item {
                            Operand::Value(value) => {
                                Ok(self.column_value(field, column, value.clone())?.into())
                            }
                            Operand::Entity(_) => Err(unsupported_comparison(field, &mapping, item)),
                        })
                        .collect::<Result<Vec<sql::Expr>>>()?;

                    operands.push(sql::Expr::in_list(
                        sql::Expr::column(alias, column.column),
                        values,
                    ));
                }
                FieldMapping::Reference(reference) => {
                    let rows = items
                        .iter()
                        .map(|item| match item {
                            Operand::Entity(entity) => {
                                self.foreign_key_values(field, reference, entity)
                            }
                            Operand::Value(_) => Err(unsupported_comparison(field, &mapping, item)),
                        })
                        .collect::<Result<Vec<_>>>()?;

                    operands.push(foreign_key_in_list(reference, alias, rows));
                }
                FieldMapping::Owned(_) => {
                    return Err(Error::unsupported_expression(format!(
                        "owned object `{field}` cannot be tested for membership"
                    )));
                }
            }
        }

        // `IN` never matches null, so null items become a separate null test
        if !nulls.is_empty() {
            operands.push(null_test(&mapping, alias, false));
        }

        Ok(if operands.is_empty() {
            sql::Expr::False
        } else {
            sql::Expr::or_from_vec(operands)
        })
    }

    fn lower_starts_with(&mut self, field: &stmt::Field, prefix: &str) -> Result<sql::Expr> {
        let (mapping, alias) = self.resolve(field)?;

        let FieldMapping::Column(column) = mapping else {
            return Err(Error::unsupported_expression(format!(
                "`{field}` is a navigation and cannot be prefix-matched"
            )));
        };

        if column.logical != stmt::Type::String {
            return Err(Error::type_mismatch(format!(
                "prefix match requires a string field but `{field}` is {}",
                column.logical
            )));
        }

        let (pattern, escape) = like_prefix(prefix);

        Ok(sql::Expr::like(
            sql::Expr::column(alias, column.column),
            TypedValue::new(column.ty.clone(), pattern),
            escape,
        ))
    }

    /// Resolves `field` and registers the joins needed to reach it. Returns
    /// the mapping and the alias of the table holding its columns.
    fn resolve(&mut self, field: &stmt::Field) -> Result<(FieldMapping, usize)> {
        let related = self.catalog.is_subtype_of(&field.owner, &self.root.name)
            || self.catalog.is_subtype_of(&self.root.name, &field.owner);

        if !related && self.catalog.entity(&field.owner).is_some() {
            return Err(Error::unmapped_field(
                field.to_string(),
                format!(
                    "`{}` is neither a base nor a subtype of `{}`",
                    field.owner, self.root.name
                ),
            ));
        }

        let mapping = self.catalog.resolve_field(field)?;
        let alias = self.joins.register(mapping.joins());

        trace!("resolved `{field}` to table alias t{alias}");

        Ok((mapping, alias))
    }

    /// Converts a literal compared with `column` to its stored form.
    fn column_value(
        &self,
        field: &stmt::Field,
        column: &ColumnMapping,
        value: Value,
    ) -> Result<TypedValue> {
        if !value.is_a(&column.logical) {
            return Err(Error::type_mismatch(format!(
                "cannot compare `{field}` of type {} with {}",
                column.logical,
                value.kind_name()
            )));
        }

        self.stored_value(field, &column.logical, &column.conversion, &column.ty, value)
    }

    /// Decomposes an entity into the values of the foreign key referencing
    /// it, in foreign key column order.
    fn foreign_key_values(
        &self,
        field: &stmt::Field,
        reference: &ReferenceMapping,
        entity: &EntityRef,
    ) -> Result<Vec<TypedValue>> {
        if !self.catalog.is_subtype_of(&entity.entity, &reference.target) {
            return Err(Error::type_mismatch(format!(
                "`{field}` references `{}`, not `{}`",
                reference.target, entity.entity
            )));
        }

        let key = self.catalog.primary_key(&reference.target);

        key.into_iter()
            .zip(&reference.foreign_key)
            .map(|((name, primitive), (_, ty))| {
                let value = match entity.get(name) {
                    Some(value) if !value.is_null() => value.clone(),
                    _ => {
                        return Err(Error::type_mismatch(format!(
                            "`{}` entity compared with `{field}` has no value for key `{name}`",
                            entity.entity
                        )))
                    }
                };

                if !value.is_a(&primitive.ty) {
                    return Err(Error::type_mismatch(format!(
                        "key `{}.{name}` is {} but the entity holds {}",
                        reference.target,
                        primitive.ty,
                        value.kind_name()
                    )));
                }

                self.stored_value(field, &primitive.ty, &primitive.conversion, ty, value)
            })
            .collect()
    }

    /// Applies the mapping's conversion to a literal already checked against
    /// its logical type. The result must bind as `ty` unchanged.
    fn stored_value(
        &self,
        field: &stmt::Field,
        logical: &stmt::Type,
        conversion: &Conversion,
        ty: &db::Type,
        value: Value,
    ) -> Result<TypedValue> {
        let enumeration = match logical {
            stmt::Type::Enum(name) => self.catalog.enumeration(name),
            _ => None,
        };

        let value = conversion
            .to_column(value, enumeration)
            .map_err(|e| e.context(err!("comparing `{field}`")))?;

        if !ty.accepts(&value) {
            return Err(Error::type_mismatch(format!(
                "`{field}` holds {} which cannot be bound as {ty}",
                value.kind_name()
            )));
        }

        Ok(TypedValue::new(ty.clone(), value))
    }
}

/// `fk IN (...)`, or a row-value `IN` for composite keys.
fn foreign_key_in_list(
    reference: &ReferenceMapping,
    alias: usize,
    rows: Vec<Vec<TypedValue>>,
) -> sql::Expr {
    let mut columns = reference
        .foreign_key
        .iter()
        .map(|(column, _)| sql::Expr::column(alias, *column))
        .collect::<Vec<_>>();

    if columns.len() == 1 {
        let list = rows
            .into_iter()
            .flat_map(|row| row.into_iter().map(sql::Expr::from))
            .collect();
        sql::Expr::in_list(columns.remove(0), list)
    } else {
        let list = rows
            .into_iter()
            .map(|row| sql::Expr::Record(row.into_iter().map(sql::Expr::from).collect()))
            .collect();
        sql::Expr::in_list(sql::Expr::Record(columns), list)
    }
}

/// Null test of a field.
///
/// A scalar is null when its column is. An owned object or reference is
/// absent when all of its columns are null and present when any is not.
fn null_test(mapping: &FieldMapping, alias: usize, negate: bool) -> sql::Expr {
    let columns: Vec<ColumnId> = match mapping {
        FieldMapping::Column(column) => vec![column.column],
        FieldMapping::Owned(owned) => owned.null_columns.clone(),
        FieldMapping::Reference(reference) => reference
            .foreign_key
            .iter()
            .map(|(column, _)| *column)
            .collect(),
    };

    let operands = columns.into_iter().map(|column| sql::Expr::column(alias, column));

    if negate {
        sql::Expr::or_from_vec(operands.map(sql::Expr::is_not_null).collect())
    } else {
        sql::Expr::and_from_vec(operands.map(sql::Expr::is_null).collect())
    }
}

fn unsupported_comparison(field: &stmt::Field, mapping: &FieldMapping, rhs: &Operand) -> Error {
    let target = match mapping {
        FieldMapping::Column(_) => "a column",
        FieldMapping::Owned(_) => "an owned object",
        FieldMapping::Reference(_) => "a reference",
    };

    let operand = match rhs {
        Operand::Value(value) => value.kind_name(),
        Operand::Entity(entity) => format!("`{}` entity", entity.entity),
    };

    Error::unsupported_expression(format!(
        "`{field}` is {target} and cannot be compared with {operand}"
    ))
}

/// `LIKE` pattern matching strings that start with `prefix`, and the escape
/// character it needs, if any.
fn like_prefix(prefix: &str) -> (String, Option<char>) {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    let mut escaped = false;

    for c in prefix.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
            escaped = true;
        }
        pattern.push(c);
    }

    pattern.push('%');
    (pattern, escaped.then_some(LIKE_ESCAPE))
}
