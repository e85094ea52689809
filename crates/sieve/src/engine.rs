mod joins;
use joins::Joins;

mod lower;
use lower::LowerQuery;

mod project;

mod translation;
pub use translation::{ProjectedField, Translation};

use sieve_core::{driver::Dialect, stmt::Query, Catalog, Error, Result};
use sieve_sql::{
    stmt::{self as sql, ExprColumn, TableRef},
    Serializer,
};

use log::debug;

/// Translates queries against a catalog into parameterized SQL for one
/// dialect.
///
/// Translation is a pure function of the query and the catalog: the same
/// query always yields byte-identical SQL and parameters.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    dialect: Dialect,
}

/// Translates `query` into Oracle SQL.
pub fn translate(query: &Query, catalog: &Catalog) -> Result<Translation> {
    Translator::oracle(catalog).translate(query)
}

impl<'a> Translator<'a> {
    pub fn new(catalog: &'a Catalog, dialect: Dialect) -> Translator<'a> {
        Translator { catalog, dialect }
    }

    pub fn oracle(catalog: &'a Catalog) -> Translator<'a> {
        Translator::new(catalog, Dialect::Oracle)
    }

    pub fn postgresql(catalog: &'a Catalog) -> Translator<'a> {
        Translator::new(catalog, Dialect::Postgresql)
    }

    pub fn sqlite(catalog: &'a Catalog) -> Translator<'a> {
        Translator::new(catalog, Dialect::Sqlite)
    }

    pub fn mysql(catalog: &'a Catalog) -> Translator<'a> {
        Translator::new(catalog, Dialect::Mysql)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn translate(&self, query: &Query) -> Result<Translation> {
        let Some(root) = self.catalog.entity(&query.entity) else {
            return Err(Error::unmapped_field(
                query.entity.clone(),
                format!("`{}` is not a mapped entity", query.entity),
            ));
        };

        let mut lower = LowerQuery::new(self.catalog, root);
        let mut filters = vec![];

        // Rows of other entities share a derived entity's table
        if !root.is_root() {
            filters.push(lower.lower_type_is(&root.name)?);
        }

        if let Some(filter) = &query.filter {
            filters.push(lower.lower_expr(filter)?);
        }

        let columns = project::apply(self.catalog, &root.name);

        let select = sql::Select {
            columns: columns
                .iter()
                .map(|field| ExprColumn {
                    table: 0,
                    column: field.column,
                })
                .collect(),
            from: TableRef {
                table: root.table,
                alias: 0,
            },
            joins: lower.into_joins(),
            filter: if filters.is_empty() {
                None
            } else {
                Some(sql::Expr::and_from_vec(filters))
            },
        };

        let mut params = vec![];
        let sql = Serializer::for_dialect(&self.catalog.db, self.dialect)
            .serialize(&select.into(), &mut params);

        debug!(
            "translated query on `{}`; dialect={:?}; params={}; sql={sql}",
            query.entity,
            self.dialect,
            params.len()
        );

        Ok(Translation {
            sql,
            params,
            columns,
        })
    }
}
