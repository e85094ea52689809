pub mod config;
pub use config::ConnectionConfig;

pub mod db;
pub use db::{Db, Record};

mod engine;
pub use engine::{translate, ProjectedField, Translation, Translator};

pub mod stmt;
pub use stmt::{Enum, Navigation, Path, Primitive};

pub use sieve_core::{driver, schema, Catalog, Error, Result};
