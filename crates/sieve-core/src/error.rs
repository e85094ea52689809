mod adhoc;
mod driver_operation_failed;
mod invalid_configuration;
mod invalid_connection_url;
mod invalid_schema;
mod type_mismatch;
mod unknown_subtype;
mod unmapped_field;
mod unsupported_expression;

use adhoc::AdhocError;
use driver_operation_failed::DriverOperationFailed;
use invalid_configuration::InvalidConfiguration;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_schema::InvalidSchema;
use std::sync::Arc;
use type_mismatch::TypeMismatch;
use unknown_subtype::UnknownSubtype;
use unmapped_field::UnmappedField;
use unsupported_expression::UnsupportedExpression;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
///
/// Mostly useful as the argument to [`Error::context`].
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while building a catalog, translating a query or
/// executing it.
///
/// Translation errors (`UnmappedField`, `TypeMismatch`, `UnknownSubtype`,
/// `UnsupportedExpression`) are deterministic: the same inputs always fail
/// the same way, so retrying without changing the expression is pointless.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(inner) => {
                assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                inner.kind
            }
            Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
        };

        Error {
            inner: Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            }),
        }
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    /// The innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.root_kind_holder().inner.kind
    }

    // Kind predicates look through context so `is_unmapped_field()` still
    // holds after a caller wraps the error.
    fn root_kind_holder(&self) -> &Error {
        self.chain()
            .find(|err| !matches!(err.inner.kind, ErrorKind::Adhoc(_)))
            .unwrap_or(self)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.kind {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(&err.inner.kind, f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnmappedField(UnmappedField),
    TypeMismatch(TypeMismatch),
    UnknownSubtype(UnknownSubtype),
    UnsupportedExpression(UnsupportedExpression),
    InvalidSchema(InvalidSchema),
    InvalidConfiguration(InvalidConfiguration),
    InvalidConnectionUrl(InvalidConnectionUrl),
    DriverOperationFailed(DriverOperationFailed),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnmappedField(err) => core::fmt::Display::fmt(err, f),
            TypeMismatch(err) => core::fmt::Display::fmt(err, f),
            UnknownSubtype(err) => core::fmt::Display::fmt(err, f),
            UnsupportedExpression(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidConfiguration(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self.to_string())))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}
