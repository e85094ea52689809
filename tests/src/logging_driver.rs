use sieve_core::{
    async_trait,
    driver::{Capability, Connection, Driver, Operation, Response, Rows},
    Result,
};

use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

/// Wraps a driver and records every operation its connections execute.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Shared with every connection opened through this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

/// An executed operation and the number of rows it returned or affected.
#[derive(Debug, Clone)]
pub struct DriverOp {
    pub operation: Operation,
    pub rows: u64,
}

#[derive(Debug)]
struct LoggingConnection {
    inner: Box<dyn Connection>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        let logged = operation.clone();
        let response = self.inner.exec(operation).await?;

        let rows = match &response.rows {
            Rows::Count(count) => *count,
            Rows::Values(rows) => rows.len() as u64,
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation: logged,
                rows,
            });

        Ok(response)
    }
}
