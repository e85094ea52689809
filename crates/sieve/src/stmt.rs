//! Typed expression builders.
//!
//! A [`Path<T>`] only offers the operations that are valid for `T`, so a
//! predicate built through it is well typed by construction. The untyped
//! model lives in [`sieve_core::stmt`].

mod navigation;
pub use navigation::Navigation;

mod path;
pub use path::Path;

mod primitive;
pub use primitive::{Enum, Primitive};

pub use sieve_core::stmt::{EntityRef, Expr, Field, Query, Value};
