pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;

pub use sieve_core::stmt::TypedValue;
