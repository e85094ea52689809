mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use sieve_core::{
    async_trait,
    driver::{
        operation::{Operation, QuerySql},
        Capability, Driver, Response,
    },
    Error, Result,
};
use url::Url;

use log::trace;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` URL. `sqlite::memory:`
    /// opens a private in-memory database per connection.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("`{url_str}` is not a valid URL: {err}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn sieve_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    fn query(&mut self, op: QuerySql) -> Result<Response> {
        trace!("sqlite query; sql={}; params={}", op.sql, op.params.len());

        let params = op
            .params
            .into_iter()
            .map(Value::bind)
            .collect::<Result<Vec<_>>>()?;

        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::driver_operation_failed)?;

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let items = op
                        .ret
                        .iter()
                        .enumerate()
                        .map(|(index, ty)| Value::from_sql(row, index, ty).map(Value::into_inner))
                        .collect::<Result<Vec<_>>>()?;

                    ret.push(items);
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver_operation_failed(err)),
            }
        }

        Ok(Response::values(ret))
    }

    fn execute_batch(&mut self, sql: &str) -> Result<Response> {
        trace!("sqlite raw sql; sql={sql}");

        self.connection
            .execute_batch(sql)
            .map_err(Error::driver_operation_failed)?;

        Ok(Response::count(self.connection.changes()))
    }
}

#[async_trait]
impl sieve_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.query(op),
            Operation::RawSql(op) => self.execute_batch(&op.sql),
        }
    }
}
