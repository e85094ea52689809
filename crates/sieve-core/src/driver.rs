mod capability;
pub use capability::{Capability, Dialect};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to a database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL, for logging. Never includes a password.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the database, which picks the SQL flavor queries are
    /// serialized in.
    fn capability(&self) -> &'static Capability;

    /// Open a new connection
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// The query execution collaborator.
///
/// A connection runs SQL it is handed; it never builds queries itself.
/// Cancellation and timeouts are the connection's concern.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
