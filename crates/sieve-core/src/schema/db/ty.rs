use crate::{stmt, Error, Result};

use std::{fmt, str::FromStr};

/// Database-level storage types.
///
/// `db::Type` is the **physical** type of a column, as it appears in the
/// database's `CREATE TABLE` statement. It is distinct from
/// [`stmt::Type`], the logical type the application works with; a column's
/// [`Conversion`](crate::schema::Conversion) bridges the two.
///
/// Every query parameter is bound with the `db::Type` of the column it is
/// compared with (see [`stmt::TypedValue`]). Drivers must not infer a wire
/// type from the value instead: binding a string literal against a
/// `VARCHAR2` discriminator as `NCLOB` is exactly the failure this prevents.
///
/// # Parsing
///
/// Types are parsed from catalog declarations. Both Oracle and generic
/// spellings are accepted:
///
/// ```text
/// NUMBER(19, 0)      →  Numeric(Some((19, 0)))
/// VARCHAR2(50 CHAR)  →  VarChar(50)
/// NVARCHAR2(20)      →  NVarChar(20)
/// NCLOB              →  NClob
/// BIGINT             →  Integer(8)
/// TEXT               →  Text
/// ```
///
/// Anything unrecognised becomes `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// Decimal number with optional precision and scale.
    Numeric(Option<(u32, u32)>),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// National character set text with an explicit maximum length
    NVarChar(u64),

    /// Fixed length text
    Char(u64),

    /// Character large object
    Clob,

    /// National character set large object
    NClob,

    /// User-specified unrecognized type
    Custom(String),
}

impl Type {
    /// True for the types a string is stored in.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Type::Text
                | Type::VarChar(_)
                | Type::NVarChar(_)
                | Type::Char(_)
                | Type::Clob
                | Type::NClob
        )
    }

    /// True for the types an integer is stored in.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Integer(_) | Type::Numeric(_))
    }

    pub fn is_lob(&self) -> bool {
        matches!(self, Type::Clob | Type::NClob)
    }

    /// Returns `true` if `value` can be bound as this type without any
    /// coercion. Null binds as every type; custom types accept anything.
    pub fn accepts(&self, value: &stmt::Value) -> bool {
        match value {
            stmt::Value::Null => true,
            stmt::Value::String(_) => self.is_text() || matches!(self, Type::Custom(_)),
            stmt::Value::I64(_) => {
                self.is_numeric() || matches!(self, Type::Boolean | Type::Custom(_))
            }
            stmt::Value::Enum(_) => false,
        }
    }

    /// Converts a declared literal into this type's value class.
    ///
    /// Used for discriminator literals, which are stored with the column's
    /// type regardless of how they were written in the declaration: `"1"`
    /// becomes `1` for a `NUMBER` column, `1` becomes `"1"` for a `VARCHAR2`
    /// column.
    pub fn coerce(&self, value: stmt::Value) -> Result<stmt::Value> {
        let coerced = match value {
            stmt::Value::Null => Some(stmt::Value::Null),
            stmt::Value::String(s) if self.is_numeric() => {
                s.trim().parse::<i64>().ok().map(stmt::Value::I64)
            }
            stmt::Value::I64(i) if self.is_text() => Some(stmt::Value::String(i.to_string())),
            value if self.accepts(&value) => Some(value),
            _ => None,
        };

        coerced.ok_or_else(|| Error::type_mismatch(format!("literal cannot be stored as {self}")))
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Type> {
        let s = s.trim();

        if s.is_empty() {
            return Err(Error::invalid_schema("empty column type"));
        }

        let (name, args) = match s.find('(') {
            Some(open) => {
                let Some(args) = s[open + 1..].strip_suffix(')') else {
                    return Err(Error::invalid_schema(format!(
                        "unbalanced parentheses in column type `{s}`"
                    )));
                };
                (s[..open].trim(), Some(args))
            }
            None => (s, None),
        };

        let upper = name.to_ascii_uppercase();

        let ty = match (upper.as_str(), args) {
            ("BOOLEAN" | "BOOL", None) => Type::Boolean,
            ("SMALLINT", None) => Type::Integer(2),
            ("INT", None) => Type::Integer(4),
            ("INTEGER" | "BIGINT", None) => Type::Integer(8),
            ("NUMBER" | "NUMERIC" | "DECIMAL", None) => Type::Numeric(None),
            ("NUMBER" | "NUMERIC" | "DECIMAL", Some(args)) => {
                Type::Numeric(Some(parse_precision(s, args)?))
            }
            ("TEXT", None) => Type::Text,
            ("VARCHAR" | "VARCHAR2", Some(args)) => Type::VarChar(parse_length(s, args)?),
            ("NVARCHAR" | "NVARCHAR2", Some(args)) => Type::NVarChar(parse_length(s, args)?),
            ("CHAR" | "NCHAR", Some(args)) => Type::Char(parse_length(s, args)?),
            ("CLOB", None) => Type::Clob,
            ("NCLOB", None) => Type::NClob,
            _ => Type::Custom(s.to_string()),
        };

        Ok(ty)
    }
}

// `50`, `50 CHAR`, `50 BYTE`
fn parse_length(ty: &str, args: &str) -> Result<u64> {
    let number = args.split_whitespace().next().unwrap_or_default();
    number
        .parse()
        .map_err(|_| Error::invalid_schema(format!("invalid length in column type `{ty}`")))
}

// `19`, `19, 0`
fn parse_precision(ty: &str, args: &str) -> Result<(u32, u32)> {
    let invalid = || Error::invalid_schema(format!("invalid precision in column type `{ty}`"));

    let mut parts = args.split(',').map(str::trim);
    let precision = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let scale = match parts.next() {
        Some(scale) => scale.parse().map_err(|_| invalid())?,
        None => 0,
    };

    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok((precision, scale))
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("BOOLEAN"),
            Type::Integer(2) => f.write_str("SMALLINT"),
            Type::Integer(4) => f.write_str("INT"),
            Type::Integer(_) => f.write_str("BIGINT"),
            Type::Numeric(None) => f.write_str("NUMBER"),
            Type::Numeric(Some((precision, scale))) => write!(f, "NUMBER({precision}, {scale})"),
            Type::Text => f.write_str("TEXT"),
            Type::VarChar(len) => write!(f, "VARCHAR2({len})"),
            Type::NVarChar(len) => write!(f, "NVARCHAR2({len})"),
            Type::Char(len) => write!(f, "CHAR({len})"),
            Type::Clob => f.write_str("CLOB"),
            Type::NClob => f.write_str("NCLOB"),
            Type::Custom(name) => f.write_str(name),
        }
    }
}
