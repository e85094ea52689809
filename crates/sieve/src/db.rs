mod connect;
pub use connect::Connect;

mod record;
pub use record::Record;

use crate::{config::ConnectionConfig, engine::Translator, Translation};

use sieve_core::{
    driver::{
        operation::{QuerySql, RawSql},
        Connection, Driver, Operation, Response, Rows,
    },
    err,
    stmt::{self, Query},
    Catalog, Error, Result,
};

use log::{debug, info};
use tokio::sync::Mutex;

use std::sync::Arc;

/// A catalog bound to a database connection.
///
/// Cloning is cheap; clones share the catalog and the connection.
/// Statements on one `Db` run one at a time.
#[derive(Debug, Clone)]
pub struct Db {
    catalog: Arc<Catalog>,
    driver: Arc<dyn Driver>,
    connection: Arc<Mutex<Box<dyn Connection>>>,
}

impl Db {
    /// Connects with the driver matching the configured URL.
    pub async fn connect(config: &ConnectionConfig, catalog: impl Into<Arc<Catalog>>) -> Result<Db> {
        let url = config.url()?;
        Db::with_driver(Connect::new(url)?, catalog).await
    }

    pub async fn with_driver(driver: impl Driver, catalog: impl Into<Arc<Catalog>>) -> Result<Db> {
        let connection = driver.connect().await?;
        info!("connected; url={}", driver.url());

        Ok(Db {
            catalog: catalog.into(),
            driver: Arc::new(driver),
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.catalog, self.driver.capability().dialect)
    }

    /// Translates `query` in the connected database's dialect.
    pub fn translate(&self, query: &Query) -> Result<Translation> {
        self.translator().translate(query)
    }

    /// Runs `query` and loads every matching row.
    pub async fn query(&self, query: &Query) -> Result<Vec<Record>> {
        let translation = self.translate(query)?;
        debug!("query `{}`: {}", query.entity, translation.sql);

        let op = QuerySql {
            sql: translation.sql.clone(),
            params: translation.params.clone(),
            ret: translation.column_types(),
        };

        let rows = match self.exec(op.into()).await?.rows {
            Rows::Values(rows) => rows,
            Rows::Count(_) => {
                return Err(err!("querying `{}`: the driver returned a row count", query.entity))
            }
        };

        rows.into_iter()
            .map(|row| self.load(&translation, row))
            .collect()
    }

    /// Runs SQL as is and returns the number of affected rows.
    pub async fn execute_raw(&self, sql: &str) -> Result<u64> {
        debug!("raw sql: {sql}");

        Ok(match self.exec(RawSql::new(sql).into()).await?.rows {
            Rows::Count(count) => count,
            Rows::Values(rows) => rows.len() as u64,
        })
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        let mut connection = self.connection.lock().await;
        connection.exec(op).await
    }

    /// Converts stored values back to their logical form.
    fn load(&self, translation: &Translation, row: Vec<stmt::Value>) -> Result<Record> {
        if row.len() != translation.columns.len() {
            return Err(Error::type_mismatch(format!(
                "expected {} columns, the database returned {}",
                translation.columns.len(),
                row.len()
            )));
        }

        let mut record = Record::default();

        for (column, value) in translation.columns.iter().zip(row) {
            let enumeration = match &column.logical {
                stmt::Type::Enum(name) => self.catalog.enumeration(name),
                _ => None,
            };

            let value = column
                .conversion
                .from_column(value, enumeration)
                .map_err(|err| err.context(format!("loading `{}`", column.name)))?;

            record.insert(column.name.clone(), value);
        }

        Ok(record)
    }
}
