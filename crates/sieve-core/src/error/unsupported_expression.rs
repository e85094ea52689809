use super::Error;

/// Error when the translator declines an expression shape.
///
/// For example, comparing a whole owned object for equality or applying a
/// prefix match to a navigation.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    message: Box<str>,
}

impl std::error::Error for UnsupportedExpression {}

impl core::fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported expression: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported expression error.
    pub fn unsupported_expression(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpression(
            UnsupportedExpression {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedExpression(_))
    }
}
