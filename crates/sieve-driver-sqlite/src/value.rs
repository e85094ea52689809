use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use sieve_core::{
    schema::db,
    stmt::{TypedValue, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl Value {
    /// Prepares a parameter for binding.
    ///
    /// The value must already be in its stored form: enum tags are converted
    /// by the translator and never reach the driver.
    pub fn bind(param: TypedValue) -> Result<Self> {
        if !param.ty.accepts(&param.value) {
            return Err(Error::type_mismatch(format!(
                "cannot bind {} as {}",
                param.value.kind_name(),
                param.ty
            )));
        }

        Ok(Self(param.value))
    }

    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value of the column's
    /// declared type.
    pub fn from_sql(row: &Row, index: usize, ty: &db::Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) if ty.is_text() => CoreValue::String(value.to_string()),
            SqlValue::Integer(value) => CoreValue::I64(value),
            SqlValue::Real(value) if value.fract() == 0.0 && !ty.is_text() => {
                CoreValue::I64(value as i64)
            }
            SqlValue::Text(value) if ty.is_numeric() => match value.parse() {
                Ok(value) => CoreValue::I64(value),
                Err(_) => {
                    return Err(Error::type_mismatch(format!(
                        "column {index} is {ty} but holds {value:?}"
                    )))
                }
            },
            SqlValue::Text(value) => CoreValue::String(value),
            value => {
                return Err(Error::type_mismatch(format!(
                    "column {index} is {ty} but holds {:?}",
                    value.data_type()
                )))
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::Enum(v) => Err(rusqlite::Error::ToSqlConversionFailure(
                format!("enum `{}` must be converted before binding", v.ty).into(),
            )),
        }
    }
}
