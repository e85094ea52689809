use sieve_core::{
    async_trait,
    driver::{Capability, Connection, Driver},
    Error, Result,
};

use url::Url;

use std::borrow::Cow;

/// Picks a built-in driver by URL scheme.
#[derive(Debug)]
pub struct Connect {
    url: Url,
}

impl Connect {
    /// Fails with `InvalidConnectionUrl` if no enabled driver handles the
    /// URL's scheme.
    pub fn new(url: Url) -> Result<Connect> {
        match url.scheme() {
            "sqlite" if cfg!(feature = "sqlite") => Ok(Connect { url }),
            "sqlite" => Err(Error::invalid_connection_url(
                "`sqlite` feature not enabled",
            )),
            scheme => Err(Error::invalid_connection_url(format!(
                "no driver for scheme `{scheme}`; url={}",
                crate::config::redact_url(url.as_str())
            ))),
        }
    }
}

#[async_trait]
impl Driver for Connect {
    fn url(&self) -> Cow<'_, str> {
        Cow::Owned(crate::config::redact_url(self.url.as_str()))
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        connect_sqlite(&self.url).await
    }
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    sieve_driver_sqlite::Sqlite::new(url.as_str())?.connect().await
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
