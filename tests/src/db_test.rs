use crate::{DriverOp, Fixture, LoggingDriver};

use sieve::{
    db::Connect,
    driver::{operation::QuerySql, Operation},
    Catalog, ConnectionConfig, Db,
};

use std::sync::{Arc, Mutex};

/// A fresh in-memory database with one fixture's tables and rows.
///
/// Every operation sent to the database is logged so tests can assert on
/// the SQL that actually ran.
pub struct DbTest {
    db: Db,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    pub async fn setup(fixture: &Fixture) -> DbTest {
        crate::init_logging();

        let catalog = Catalog::from_json(fixture.catalog).expect("fixture catalog is invalid");

        let url = ConnectionConfig::sqlite_in_memory().url().unwrap();
        let driver = LoggingDriver::new(Box::new(Connect::new(url).unwrap()));
        let ops_log = driver.ops_log_handle();

        let db = Db::with_driver(driver, catalog).await.unwrap();

        for sql in fixture.setup {
            db.execute_raw(sql).await.unwrap();
        }

        // Only log what the test itself runs
        ops_log.lock().unwrap().clear();

        DbTest { db, ops_log }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn ops(&self) -> Vec<DriverOp> {
        self.ops_log.lock().unwrap().clone()
    }

    /// Queries executed so far, in order.
    pub fn queries(&self) -> Vec<QuerySql> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op.operation {
                Operation::QuerySql(query) => Some(query),
                Operation::RawSql(_) => None,
            })
            .collect()
    }

    /// The most recently executed query.
    #[track_caller]
    pub fn last_query(&self) -> QuerySql {
        self.queries().pop().expect("no query was executed")
    }
}
