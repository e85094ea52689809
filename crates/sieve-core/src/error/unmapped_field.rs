use super::Error;

/// Error when a field referenced by an expression has no column mapping.
///
/// This occurs when:
/// - The owning entity is not registered in the catalog
/// - A segment of the field path names no property on its entity or owned type
/// - A path tries to navigate through a scalar property
///
/// The translator never emits an untyped parameter in place of an unmapped
/// field; the query is rejected instead.
#[derive(Debug)]
pub(super) struct UnmappedField {
    field: Box<str>,
    message: Box<str>,
}

impl std::error::Error for UnmappedField {}

impl core::fmt::Display for UnmappedField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unmapped field `{}`: {}", self.field, self.message)
    }
}

impl Error {
    /// Creates an unmapped field error for the given dotted field name.
    pub fn unmapped_field(field: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnmappedField(UnmappedField {
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unmapped field error.
    pub fn is_unmapped_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmappedField(_))
    }
}
