use sieve_core::{
    schema::{db::TableId, Join},
    stmt::Path,
};
use sieve_sql::stmt::{self as sql, TableRef};

/// Joins of the statement being built.
///
/// A join is shared by every field reached through the same navigation path,
/// so several predicates on one owned object join its table once. Joined
/// tables are aliased in registration order, starting at `1`; the root table
/// is `0`.
#[derive(Debug, Default)]
pub(super) struct Joins {
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    path: Path,
    table: TableId,
    join: sql::Join,
}

impl Joins {
    /// Registers a chain of joins starting at the root table and returns the
    /// alias of the table the chain ends at.
    pub(super) fn register(&mut self, chain: &[Join]) -> usize {
        let mut alias = 0;

        for join in chain {
            alias = match self.position(join) {
                Some(index) => index + 1,
                None => self.push(join, alias),
            };
        }

        alias
    }

    pub(super) fn into_vec(self) -> Vec<sql::Join> {
        self.entries.into_iter().map(|entry| entry.join).collect()
    }

    fn position(&self, join: &Join) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.path == join.path && entry.table == join.table)
    }

    fn push(&mut self, join: &Join, parent: usize) -> usize {
        let alias = self.entries.len() + 1;

        let on = join
            .on
            .iter()
            .map(|on| sql::Expr::eq(sql::Expr::column(alias, on.rhs), sql::Expr::column(parent, on.lhs)))
            .collect();

        self.entries.push(Entry {
            path: join.path.clone(),
            table: join.table,
            join: sql::Join {
                table: TableRef {
                    table: join.table,
                    alias,
                },
                on: sql::Expr::and_from_vec(on),
            },
        });

        alias
    }
}
