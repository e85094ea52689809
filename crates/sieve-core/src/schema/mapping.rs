mod conversion;
pub use conversion::Conversion;

mod discriminator;
pub use discriminator::TypeDiscriminator;

mod field;
pub use field::{ColumnMapping, FieldMapping, OwnedMapping, ReferenceMapping};

mod join;
pub use join::{Join, JoinOn};
