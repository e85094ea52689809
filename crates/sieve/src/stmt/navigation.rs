use sieve_core::{
    stmt::{self, EntityRef, Expr},
    Result,
};

/// A typed reference to an owned object or a referenced entity.
///
/// Navigations are compared with entities, which translate to their primary
/// key, or tested for null.
#[derive(Debug, Clone)]
pub struct Navigation {
    untyped: stmt::Field,
}

impl Navigation {
    /// `target` is the owned type or the referenced entity.
    pub fn new(
        owner: impl Into<String>,
        path: impl Into<stmt::Path>,
        target: impl Into<String>,
    ) -> Navigation {
        Navigation {
            untyped: stmt::Field::model(owner, path, target),
        }
    }

    /// Compares with an entity of the navigation's target type. Any other
    /// entity type is a type mismatch.
    pub fn eq(self, entity: EntityRef) -> Result<Expr> {
        Expr::eq(self.untyped, entity)
    }

    pub fn in_list(self, entities: impl IntoIterator<Item = EntityRef>) -> Result<Expr> {
        Expr::in_list(self.untyped, entities)
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
}
