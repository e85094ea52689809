use super::Error;

/// Error when a literal cannot be compared with a field.
///
/// Raised both when an expression is built (the literal's logical type does
/// not match the field's declared type) and during translation (the literal
/// does not survive the column's conversion, or the converted value cannot be
/// bound to the column's physical type).
#[derive(Debug)]
pub(super) struct TypeMismatch {
    message: Box<str>,
}

impl std::error::Error for TypeMismatch {}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type mismatch: {}", self.message)
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
