use super::Primitive;

use sieve_core::stmt::{self, Expr, ExprEq, ExprInList, ExprStartsWith, Operand};

use std::{fmt, marker::PhantomData};

/// A typed reference to a scalar field.
pub struct Path<T> {
    untyped: stmt::Field,
    _p: PhantomData<fn() -> T>,
}

impl<T: Primitive> Path<T> {
    /// `path` is the dotted property path from `owner`, e.g. `Beast.Name`.
    pub fn new(owner: impl Into<String>, path: impl Into<stmt::Path>) -> Path<T> {
        Path {
            untyped: stmt::Field::new(owner, path, T::ty()),
            _p: PhantomData,
        }
    }

    pub fn eq(self, rhs: impl Into<T>) -> Expr {
        ExprEq {
            field: self.untyped,
            rhs: Operand::Value(rhs.into().into_value()),
        }
        .into()
    }

    /// Compares with an optional value; `None` is a null test.
    pub fn eq_opt(self, rhs: Option<T>) -> Expr {
        match rhs {
            Some(rhs) => self.eq(rhs),
            None => self.is_null(),
        }
    }

    pub fn in_list(self, list: impl IntoIterator<Item = T>) -> Expr {
        ExprInList {
            field: self.untyped,
            list: list
                .into_iter()
                .map(|item| Operand::Value(item.into_value()))
                .collect(),
        }
        .into()
    }

    pub fn is_null(self) -> Expr {
        Expr::is_null(self.untyped)
    }

    pub fn is_not_null(self) -> Expr {
        Expr::is_not_null(self.untyped)
    }

    pub fn field(&self) -> &stmt::Field {
        &self.untyped
    }

    pub fn into_field(self) -> stmt::Field {
        self.untyped
    }
}

impl Path<String> {
    pub fn starts_with(self, prefix: impl Into<String>) -> Expr {
        ExprStartsWith {
            field: self.untyped,
            prefix: prefix.into(),
        }
        .into()
    }
}

impl<T> Clone for Path<T> {
    fn clone(&self) -> Self {
        Path {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.untyped).finish()
    }
}
