use super::{
    app::{self, FieldBelongsTo, FieldOwned, FieldPrimitive, FieldTy},
    db::{self, Column, ColumnId, Table, TableId},
    declaration::{EntityDecl, EnumDecl, FieldDecl, OwnedDecl, TableDecl, VariantDecl},
    Catalog, Conversion, Declaration, JoinOn, TypeDiscriminator,
};
use crate::{stmt, Error, Result};

use indexmap::IndexMap;
use log::{debug, trace};

macro_rules! invalid {
    ($($arg:tt)*) => {
        return Err(Error::invalid_schema(format!($($arg)*)))
    };
}

/// Used to track state during the build process
struct BuildCatalog {
    /// The catalog as it is built
    catalog: Catalog,

    /// References are checked once every entity is known
    references: Vec<PendingReference>,
}

struct PendingReference {
    /// Qualified field name, for error messages
    field: String,
    target: String,
    foreign_key: Vec<ColumnId>,
}

impl Catalog {
    /// Builds and verifies a catalog.
    ///
    /// Fails with `InvalidSchema` on the first inconsistency found.
    pub fn from_declaration(declaration: Declaration) -> Result<Catalog> {
        let mut builder = BuildCatalog {
            catalog: Catalog::default(),
            references: vec![],
        };

        for decl in declaration.enums {
            builder.build_enum(decl)?;
        }

        for decl in declaration.tables {
            builder.build_table(decl)?;
        }

        for decl in order_by_hierarchy(declaration.entities)? {
            builder.build_entity(decl)?;
        }

        builder.verify_references()?;
        builder.verify_hierarchies()?;

        let catalog = builder.catalog;
        debug!(
            "catalog built; tables={} entities={} hierarchies={}",
            catalog.db.tables.len(),
            catalog.entities.len(),
            catalog.discriminators.len()
        );

        Ok(catalog)
    }
}

impl BuildCatalog {
    fn build_enum(&mut self, decl: EnumDecl) -> Result<()> {
        if self.catalog.enums.contains_key(&decl.name) {
            invalid!("enum `{}` is declared twice", decl.name);
        }

        if decl.variants.is_empty() {
            invalid!("enum `{}` has no variants", decl.name);
        }

        let mut variants: Vec<stmt::EnumVariant> = Vec::with_capacity(decl.variants.len());

        for (index, variant) in decl.variants.into_iter().enumerate() {
            let (name, discriminant) = match variant {
                VariantDecl::Name(name) => (name, index as i64),
                VariantDecl::Explicit { name, discriminant } => (name, discriminant),
            };

            if let Some(other) = variants
                .iter()
                .find(|v| v.name == name || v.discriminant == discriminant)
            {
                invalid!(
                    "enum `{}`: variant `{name}` clashes with `{}`",
                    decl.name,
                    other.name
                );
            }

            variants.push(stmt::EnumVariant { name, discriminant });
        }

        self.catalog.enums.insert(
            decl.name.clone(),
            stmt::TypeEnum {
                name: decl.name,
                variants,
            },
        );

        Ok(())
    }

    fn build_table(&mut self, decl: TableDecl) -> Result<()> {
        if self.catalog.db.table_by_name(&decl.name).is_some() {
            invalid!("table `{}` is declared twice", decl.name);
        }

        let id = TableId(self.catalog.db.tables.len());
        let mut columns: Vec<Column> = Vec::with_capacity(decl.columns.len());

        for (index, column) in decl.columns.into_iter().enumerate() {
            if columns.iter().any(|c| c.name == column.name) {
                invalid!("column `{}.{}` is declared twice", decl.name, column.name);
            }

            let ty = column
                .ty
                .parse::<db::Type>()
                .map_err(|err| err.context(format!("column `{}.{}`", decl.name, column.name)))?;

            columns.push(Column {
                id: ColumnId { table: id, index },
                name: column.name,
                ty,
                nullable: column.nullable,
                primary_key: false,
            });
        }

        let mut primary_key = vec![];

        for name in &decl.primary_key {
            let Some(column) = columns.iter_mut().find(|c| c.name == *name) else {
                invalid!("primary key column `{name}` is not a column of `{}`", decl.name);
            };

            column.primary_key = true;
            column.nullable = false;
            primary_key.push(column.id);
        }

        trace!("table `{}` -> {id:?}", decl.name);

        self.catalog.db.tables.push(Table {
            id,
            name: decl.name,
            columns,
            primary_key,
        });

        Ok(())
    }

    fn build_entity(&mut self, decl: EntityDecl) -> Result<()> {
        if self.catalog.entities.contains_key(&decl.name) {
            invalid!("entity `{}` is declared twice", decl.name);
        }

        let (table, primary_key) = match &decl.extends {
            Some(base_name) => {
                // Bases are built first
                let Some(base) = self.catalog.entity(base_name) else {
                    invalid!("entity `{}` extends unknown entity `{base_name}`", decl.name);
                };

                let base_table = &self.catalog.table(base.table).name;

                if decl.table.as_ref().is_some_and(|table| table != base_table) {
                    invalid!(
                        "derived entity `{}` must be stored in `{base_table}`, the table of `{base_name}`",
                        decl.name
                    );
                }

                if !decl.key.is_empty() && decl.key != base.primary_key {
                    invalid!(
                        "derived entity `{}` cannot redefine the key of `{base_name}`",
                        decl.name
                    );
                }

                if decl.discriminator.is_some() {
                    invalid!(
                        "discriminator must be declared on the root of the hierarchy, not on `{}`",
                        decl.name
                    );
                }

                (base.table, base.primary_key.clone())
            }
            None => {
                let Some(table) = &decl.table else {
                    invalid!("root entity `{}` must declare a table", decl.name);
                };

                if decl.key.is_empty() {
                    invalid!("root entity `{}` must declare a key", decl.name);
                }

                (self.table_id(table)?, decl.key.clone())
            }
        };

        let mut fields = IndexMap::new();

        for field in decl.fields {
            let inherited = decl
                .extends
                .as_deref()
                .is_some_and(|base| self.catalog.find_field(base, &field.name).is_some());

            if inherited || fields.contains_key(&field.name) {
                invalid!("field `{}.{}` is declared twice", decl.name, field.name);
            }

            let name = field.name.clone();
            let field = self.build_field(&decl.name, table, field)?;
            fields.insert(name, field);
        }

        if decl.extends.is_none() {
            for name in &primary_key {
                let valid = fields
                    .get(name)
                    .is_some_and(|field: &app::Field| field.is_primitive() && !field.nullable);

                if !valid {
                    invalid!(
                        "key field `{}.{name}` must be a non-nullable primitive field",
                        decl.name
                    );
                }
            }
        }

        if let Some(discriminator) = &decl.discriminator {
            let column = self.column_id(table, &discriminator.column)?;

            self.catalog.discriminators.insert(
                decl.name.clone(),
                TypeDiscriminator {
                    base: decl.name.clone(),
                    column,
                    ty: self.catalog.column(column).ty.clone(),
                    values: IndexMap::new(),
                },
            );
        }

        if let Some(value) = decl.discriminator_value {
            let root = match &decl.extends {
                Some(base) => self
                    .catalog
                    .root_of(base)
                    .map(|root| root.name.clone())
                    .unwrap_or_default(),
                None => decl.name.clone(),
            };

            let Some(discriminator) = self.catalog.discriminators.get_mut(&root) else {
                invalid!(
                    "entity `{}` declares a discriminator value but `{root}` has no discriminator column",
                    decl.name
                );
            };

            let value = match discriminator.ty.coerce(value.into()) {
                Ok(value) if !value.is_null() => value,
                _ => invalid!(
                    "discriminator value of `{}` cannot be stored as {}",
                    decl.name,
                    discriminator.ty
                ),
            };

            if let Some(other) = discriminator.entity_for(&value) {
                invalid!(
                    "entities `{other}` and `{}` share discriminator value {value}",
                    decl.name
                );
            }

            discriminator.values.insert(decl.name.clone(), value);
        }

        trace!("entity `{}` -> {table:?}", decl.name);

        self.catalog.entities.insert(
            decl.name.clone(),
            app::Entity {
                name: decl.name,
                table,
                fields,
                primary_key,
                base: decl.extends,
            },
        );

        Ok(())
    }

    /// `owner` is the qualified name of the entity or owned object declaring
    /// the field; `table` is where its columns live.
    fn build_field(&mut self, owner: &str, table: TableId, decl: FieldDecl) -> Result<app::Field> {
        let qualified = format!("{owner}.{}", decl.name);

        if decl.owned.is_some() && decl.references.is_some() {
            invalid!("field `{qualified}` cannot be both owned and a reference");
        }

        if let Some(owned) = decl.owned {
            if decl.ty.is_some() || decl.column.is_some() || !decl.foreign_key.is_empty() {
                invalid!("owned field `{qualified}` cannot declare a type, column or foreign key");
            }

            let owned = self.build_owned(&qualified, table, owned)?;

            return Ok(app::Field {
                name: decl.name,
                ty: FieldTy::Owned(owned),
                nullable: decl.nullable,
            });
        }

        if let Some(target) = decl.references {
            if decl.column.is_some() {
                invalid!("reference `{qualified}` declares its columns with `foreign_key`");
            }

            if decl.ty.as_ref().is_some_and(|ty| *ty != target) {
                invalid!("reference `{qualified}` has a type other than its target `{target}`");
            }

            if decl.foreign_key.is_empty() {
                invalid!("reference `{qualified}` must declare a foreign key");
            }

            let foreign_key = decl
                .foreign_key
                .iter()
                .map(|column| self.column_id(table, column))
                .collect::<Result<Vec<_>>>()?;

            self.references.push(PendingReference {
                field: qualified,
                target: target.clone(),
                foreign_key: foreign_key.clone(),
            });

            return Ok(app::Field {
                name: decl.name,
                ty: FieldTy::BelongsTo(FieldBelongsTo {
                    target,
                    foreign_key,
                }),
                nullable: decl.nullable,
            });
        }

        if !decl.foreign_key.is_empty() {
            invalid!("`foreign_key` is only valid on references, not on `{qualified}`");
        }

        let Some(ty) = &decl.ty else {
            invalid!("field `{qualified}` must declare a type");
        };

        let Some(column) = &decl.column else {
            invalid!("field `{qualified}` must declare a column");
        };

        let ty = self.logical_type(&qualified, ty)?;
        let column = self.column_id(table, column)?;
        self.verify_conversion(&qualified, &ty, decl.conversion, column)?;

        Ok(app::Field {
            name: decl.name,
            ty: FieldTy::Primitive(FieldPrimitive {
                ty,
                column,
                conversion: decl.conversion,
            }),
            nullable: decl.nullable,
        })
    }

    fn build_owned(
        &mut self,
        qualified: &str,
        owner_table: TableId,
        decl: OwnedDecl,
    ) -> Result<FieldOwned> {
        let (table, join) = match &decl.table {
            Some(name) => {
                let table = self.table_id(name)?;

                if decl.join.is_empty() {
                    invalid!("owned field `{qualified}` is stored in `{name}` and must declare join columns");
                }

                let join = decl
                    .join
                    .iter()
                    .map(|on| -> Result<JoinOn> {
                        Ok(JoinOn {
                            lhs: self.column_id(owner_table, &on.owner)?,
                            rhs: self.column_id(table, &on.owned)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                (table, join)
            }
            None => {
                if !decl.join.is_empty() {
                    invalid!("owned field `{qualified}` shares its owner's table and cannot declare join columns");
                }

                (owner_table, vec![])
            }
        };

        if decl.fields.is_empty() {
            invalid!("owned field `{qualified}` has no fields");
        }

        let mut fields = IndexMap::new();

        for field in decl.fields {
            if fields.contains_key(&field.name) {
                invalid!("field `{qualified}.{}` is declared twice", field.name);
            }

            let name = field.name.clone();
            let field = self.build_field(qualified, table, field)?;
            fields.insert(name, field);
        }

        Ok(FieldOwned {
            type_name: decl.type_name,
            table,
            join,
            fields,
        })
    }

    fn logical_type(&self, qualified: &str, name: &str) -> Result<stmt::Type> {
        match name {
            "string" => Ok(stmt::Type::String),
            "integer" => Ok(stmt::Type::I64),
            name if self.catalog.enums.contains_key(name) => Ok(stmt::Type::enumeration(name)),
            name => invalid!("field `{qualified}` has unknown type `{name}`"),
        }
    }

    /// The stored representation of the field must fit the column.
    fn verify_conversion(
        &self,
        qualified: &str,
        ty: &stmt::Type,
        conversion: Conversion,
        column: ColumnId,
    ) -> Result<()> {
        let stored = match (ty, conversion) {
            (stmt::Type::String, Conversion::Identity)
            | (stmt::Type::Enum(_), Conversion::EnumToString) => stmt::Value::from(""),
            (stmt::Type::I64, Conversion::Identity)
            | (stmt::Type::Enum(_), Conversion::EnumToInteger) => stmt::Value::I64(0),
            (stmt::Type::Enum(name), Conversion::Identity) => invalid!(
                "enum field `{qualified}` of `{name}` must declare `enum_to_string` or `enum_to_integer`"
            ),
            (ty, conversion) => {
                invalid!("{conversion:?} conversion cannot apply to `{qualified}` of type {ty}")
            }
        };

        let table = self.catalog.table(column.table);
        let column = table.column(column);

        if !column.ty.accepts(&stored) {
            invalid!(
                "field `{qualified}` stores {} values but column `{}.{}` is {}",
                stored.kind_name(),
                table.name,
                column.name,
                column.ty
            );
        }

        Ok(())
    }

    fn verify_references(&mut self) -> Result<()> {
        for reference in std::mem::take(&mut self.references) {
            if self.catalog.entity(&reference.target).is_none() {
                invalid!(
                    "reference `{}` targets unknown entity `{}`",
                    reference.field,
                    reference.target
                );
            }

            let key = self.catalog.primary_key(&reference.target);

            if key.len() != reference.foreign_key.len() {
                invalid!(
                    "foreign key of `{}` has {} columns but the key of `{}` has {}",
                    reference.field,
                    reference.foreign_key.len(),
                    reference.target,
                    key.len()
                );
            }

            for (fk, (_, pk)) in reference.foreign_key.iter().zip(&key) {
                let fk = self.catalog.column(*fk);
                let pk = self.catalog.column(pk.column);

                if fk.ty.is_text() != pk.ty.is_text() || fk.ty.is_numeric() != pk.ty.is_numeric() {
                    invalid!(
                        "foreign key column `{}` ({}) of `{}` does not match key column `{}` ({})",
                        fk.name,
                        fk.ty,
                        reference.field,
                        pk.name,
                        pk.ty
                    );
                }
            }
        }

        Ok(())
    }

    fn verify_hierarchies(&self) -> Result<()> {
        for entity in self.catalog.entities.values() {
            if entity.is_root() {
                continue;
            }

            let root = self.catalog.root_of(&entity.name).unwrap_or(entity);

            if !self.catalog.discriminators.contains_key(&root.name) {
                invalid!(
                    "`{}` derives from `{}`, which declares no discriminator",
                    entity.name,
                    root.name
                );
            }
        }

        Ok(())
    }

    fn table_id(&self, name: &str) -> Result<TableId> {
        match self.catalog.db.table_by_name(name) {
            Some(table) => Ok(table.id),
            None => invalid!("table `{name}` is not declared"),
        }
    }

    fn column_id(&self, table: TableId, name: &str) -> Result<ColumnId> {
        let table = self.catalog.table(table);

        match table.column_by_name(name) {
            Some(column) => Ok(column.id),
            None => invalid!("column `{name}` does not exist on table `{}`", table.name),
        }
    }
}

/// Orders entities so every base precedes the entities deriving from it.
fn order_by_hierarchy(entities: Vec<EntityDecl>) -> Result<Vec<EntityDecl>> {
    let mut pending = entities;
    let mut ordered: Vec<EntityDecl> = Vec::with_capacity(pending.len());

    while !pending.is_empty() {
        let before = pending.len();

        let (ready, rest): (Vec<_>, Vec<_>) =
            pending.into_iter().partition(|decl| match &decl.extends {
                Some(base) => ordered.iter().any(|entity| entity.name == *base),
                None => true,
            });

        ordered.extend(ready);
        pending = rest;

        if pending.len() == before {
            let decl = &pending[0];
            let base = decl.extends.as_deref().unwrap_or_default();

            if pending.iter().any(|entity| entity.name == base) {
                invalid!("inheritance cycle through `{}`", decl.name);
            }

            invalid!("entity `{}` extends unknown entity `{base}`", decl.name);
        }
    }

    Ok(ordered)
}
