//! Static catalog declaration.
//!
//! The catalog is described once, up front, in JSON. A minimal declaration
//! with an owned object stored in its own table:
//!
//! ```json
//! {
//!   "tables": [
//!     {
//!       "name": "BEAST_RIDER",
//!       "columns": [
//!         { "name": "ID", "type": "NUMBER(19, 0)" },
//!         { "name": "RIDER_NAME", "type": "VARCHAR2(50 CHAR)" }
//!       ],
//!       "primary_key": ["ID"]
//!     },
//!     {
//!       "name": "BEAST_RIDER_BEAST",
//!       "columns": [
//!         { "name": "RIDER_ID", "type": "NUMBER(19, 0)" },
//!         { "name": "BEAST_NAME", "type": "VARCHAR2(50 CHAR)" }
//!       ],
//!       "primary_key": ["RIDER_ID"]
//!     }
//!   ],
//!   "entities": [
//!     {
//!       "name": "BeastRider",
//!       "table": "BEAST_RIDER",
//!       "key": ["Id"],
//!       "fields": [
//!         { "name": "Id", "type": "integer", "column": "ID" },
//!         { "name": "RiderName", "type": "string", "column": "RIDER_NAME" },
//!         {
//!           "name": "Beast",
//!           "nullable": true,
//!           "owned": {
//!             "type": "Beast",
//!             "table": "BEAST_RIDER_BEAST",
//!             "join": [{ "owner": "ID", "owned": "RIDER_ID" }],
//!             "fields": [{ "name": "Name", "type": "string", "column": "BEAST_NAME" }]
//!           }
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A declaration is only parsed here. Consistency checks happen when the
//! [`Catalog`](super::Catalog) is built from it.

use super::Conversion;
use crate::{stmt, Error, Result};

use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
    #[serde(default)]
    pub enums: Vec<EnumDecl>,

    #[serde(default)]
    pub tables: Vec<TableDecl>,

    #[serde(default)]
    pub entities: Vec<EntityDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDecl {
    pub name: String,
    pub variants: Vec<VariantDecl>,
}

/// A variant is either a bare name, whose discriminant is its position, or a
/// name with an explicit discriminant.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VariantDecl {
    Name(String),
    Explicit { name: String, discriminant: i64 },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDecl {
    pub name: String,
    pub columns: Vec<ColumnDecl>,

    #[serde(default)]
    pub primary_key: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDecl {
    pub name: String,

    /// Physical type, e.g. `NUMBER(19, 0)` or `VARCHAR2(50 CHAR)`
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub nullable: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDecl {
    pub name: String,

    /// Required on root entities; derived entities use their base's table.
    #[serde(default)]
    pub table: Option<String>,

    /// Primary key field names. Required on root entities.
    #[serde(default)]
    pub key: Vec<String>,

    /// Base entity
    #[serde(default)]
    pub extends: Option<String>,

    /// Declared on the root of a hierarchy
    #[serde(default)]
    pub discriminator: Option<DiscriminatorDecl>,

    /// Literal identifying rows of this entity. Entities without one are
    /// abstract.
    #[serde(default)]
    pub discriminator_value: Option<LiteralDecl>,

    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscriminatorDecl {
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LiteralDecl {
    Integer(i64),
    String(String),
}

/// A field is a primitive (`type` + `column`), an owned object (`owned`) or
/// a reference to another entity (`references` + `foreign_key`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,

    /// Logical type: `string`, `integer` or a declared enum name
    #[serde(default, rename = "type")]
    pub ty: Option<String>,

    #[serde(default)]
    pub column: Option<String>,

    #[serde(default)]
    pub conversion: Conversion,

    #[serde(default)]
    pub owned: Option<OwnedDecl>,

    #[serde(default)]
    pub references: Option<String>,

    #[serde(default)]
    pub foreign_key: Vec<String>,

    #[serde(default)]
    pub nullable: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OwnedDecl {
    /// Owned type name
    #[serde(rename = "type")]
    pub type_name: String,

    /// Own table of the owned type. When absent, the owned columns live in
    /// the owner's table.
    #[serde(default)]
    pub table: Option<String>,

    #[serde(default)]
    pub join: Vec<JoinDecl>,

    pub fields: Vec<FieldDecl>,
}

/// `owner` column on the owner's table matches `owned` column on the owned
/// table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JoinDecl {
    pub owner: String,
    pub owned: String,
}

impl Declaration {
    pub fn from_json(json: &str) -> Result<Declaration> {
        serde_json::from_str(json).map_err(|err| Error::invalid_schema(err.to_string()))
    }
}

impl VariantDecl {
    pub fn name(&self) -> &str {
        match self {
            VariantDecl::Name(name) => name,
            VariantDecl::Explicit { name, .. } => name,
        }
    }
}

impl From<LiteralDecl> for stmt::Value {
    fn from(value: LiteralDecl) -> Self {
        match value {
            LiteralDecl::Integer(value) => stmt::Value::I64(value),
            LiteralDecl::String(value) => stmt::Value::String(value),
        }
    }
}
