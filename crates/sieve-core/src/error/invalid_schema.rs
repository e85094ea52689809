use super::Error;

/// Error when a catalog declaration is invalid.
///
/// This occurs when:
/// - A declaration has duplicate names (tables, columns, entities, enums)
/// - A field maps to a column that does not exist on its table
/// - A conversion does not fit the field's logical type or the column's
///   physical type (enum fields without an enum conversion, enum-to-string
///   into a numeric column, ...)
/// - A discriminator literal cannot be stored in the discriminator column
///
/// These errors are caught once, when the catalog is built.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
