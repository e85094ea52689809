mod entity_ref;
pub use entity_ref::EntityRef;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_eq;
pub use expr_eq::ExprEq;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_starts_with;
pub use expr_starts_with::ExprStartsWith;

mod expr_type_is;
pub use expr_type_is::ExprTypeIs;

mod field;
pub use field::Field;

mod operand;
pub use operand::Operand;

mod path;
pub use path::Path;

mod query;
pub use query::Query;

mod ty;
pub use ty::{EnumVariant, Type, TypeEnum};

mod typed_value;
pub use typed_value::TypedValue;

mod value;
pub use value::{Value, ValueEnum};
