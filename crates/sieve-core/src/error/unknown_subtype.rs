use super::Error;

/// Error when a type test names a subtype the hierarchy does not know.
#[derive(Debug)]
pub(super) struct UnknownSubtype {
    subtype: Box<str>,
    message: Box<str>,
}

impl std::error::Error for UnknownSubtype {}

impl core::fmt::Display for UnknownSubtype {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown subtype `{}`: {}", self.subtype, self.message)
    }
}

impl Error {
    /// Creates an unknown subtype error.
    pub fn unknown_subtype(subtype: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownSubtype(UnknownSubtype {
            subtype: subtype.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown subtype error.
    pub fn is_unknown_subtype(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownSubtype(_))
    }
}
