pub mod app;

mod builder;

mod catalog;
pub use catalog::Catalog;

pub mod db;

pub mod declaration;
pub use declaration::Declaration;

pub mod mapping;
pub use mapping::{
    ColumnMapping, Conversion, FieldMapping, Join, JoinOn, OwnedMapping, ReferenceMapping,
    TypeDiscriminator,
};
