use super::Expr;

/// Select instances of `entity` matching `filter`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Root entity of the query.
    pub entity: String,

    /// Optional filter; `None` selects every row.
    pub filter: Option<Expr>,
}

impl Query {
    pub fn new(entity: impl Into<String>) -> Query {
        Query {
            entity: entity.into(),
            filter: None,
        }
    }

    /// Adds a filter, AND-ed with any filter already present.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Query {
        let expr = expr.into();
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr,
        });
        self
    }
}
