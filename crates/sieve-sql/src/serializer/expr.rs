use super::{Comma, Delimited, Flavor, Formatter, Params, ToSql};

use crate::stmt::{BinaryOp, Expr, ExprLike};

impl ToSql for &Expr {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Expr::And(operands) => junction(f, operands, " AND "),
            Expr::BinaryOp(expr) => {
                let (lhs, rhs) = (&*expr.lhs, &*expr.rhs);
                fmt!(f, lhs " " expr.op " " rhs);
            }
            Expr::Column(expr) => expr.to_sql(f),
            Expr::False => fmt!(f, "1 = 0"),
            Expr::InList(expr) => {
                fmt!(f, &*expr.expr " IN (" Comma(&expr.list) ")");
            }
            Expr::IsNull(expr) => {
                let op = if expr.negate {
                    " IS NOT NULL"
                } else {
                    " IS NULL"
                };
                fmt!(f, &*expr.expr op);
            }
            Expr::Like(expr) => expr.to_sql(f),
            Expr::Not(expr) => {
                let operand: &Expr = expr;
                fmt!(f, "NOT (" operand ")");
            }
            Expr::Or(operands) => junction(f, operands, " OR "),
            Expr::Record(fields) => {
                fmt!(f, "(" Comma(fields) ")");
            }
            Expr::Value(value) => {
                let placeholder = f.params.push(value);
                placeholder.to_sql(f);
            }
        }
    }
}

/// Junctions of more than one operand are parenthesized so that nesting
/// never depends on operator precedence.
fn junction<T: Params>(f: &mut Formatter<'_, T>, operands: &[Expr], sep: &'static str) {
    match operands {
        [] if sep == " AND " => fmt!(f, "1 = 1"),
        [] => fmt!(f, "1 = 0"),
        [operand] => operand.to_sql(f),
        _ => fmt!(f, "(" Delimited(operands, sep) ")"),
    }
}

impl ToSql for &ExprLike {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let (expr, pattern) = (&*self.expr, &*self.pattern);
        fmt!(f, expr " LIKE " pattern);

        if let Some(escape) = self.escape {
            fmt!(f, " ESCAPE '");

            // MySQL treats backslash as an escape inside string literals
            if escape == '\\' && f.serializer.flavor == Flavor::Mysql {
                fmt!(f, "\\\\");
            } else if escape == '\'' {
                fmt!(f, "''");
            } else {
                fmt!(f, escape);
            }

            fmt!(f, "'");
        }
    }
}

impl ToSql for BinaryOp {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(match self {
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "<>",
        })
    }
}
