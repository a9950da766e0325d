use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ErrorKind

/// The category of a [`HostError`].
///
/// Callers that recover from some failures and not others match on this
/// instead of on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A mapping does not contain the requested key.
    Key,
    /// A sequence index is out of range.
    Index,
    /// An operation was applied to a value of the wrong type.
    Type,
    /// A value has no attribute with the requested name.
    Attribute,
    /// An argument has the right type but an unusable value.
    Value,
    /// Any other failure raised by user code.
    Runtime,
}

impl ErrorKind {
    /// Returns the name used when displaying errors of this kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Key => "KeyError",
            Self::Index => "IndexError",
            Self::Type => "TypeError",
            Self::Attribute => "AttributeError",
            Self::Value => "ValueError",
            Self::Runtime => "RuntimeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// -----------------------------------------------------------------------------
// HostError

/// A failure raised by a value operation or by user code.
///
/// The error is moved through every layer that does not handle it, so the
/// value a caller receives is the one that was raised.
///
/// # Examples
///
/// ```
/// use cg_value::{ErrorKind, HostError};
///
/// let err = HostError::key("'b'");
/// assert_eq!(err.kind(), ErrorKind::Key);
/// assert_eq!(err.to_string(), "KeyError: 'b'");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct HostError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl HostError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[inline]
    pub fn key(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Key, message)
    }

    #[inline]
    pub fn index(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Index, message)
    }

    #[inline]
    pub fn type_error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Type, message)
    }

    #[inline]
    pub fn attribute(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Attribute, message)
    }

    #[inline]
    pub fn value(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Value, message)
    }

    #[inline]
    pub fn runtime(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Runtime, message)
    }

    /// `'<type_name>' object has no attribute '<name>'`
    #[cold]
    pub fn no_attribute(type_name: &str, name: &str) -> Self {
        Self::attribute(format!("'{type_name}' object has no attribute '{name}'"))
    }

    /// `'<type_name>' object is not subscriptable`
    #[cold]
    pub fn not_subscriptable(type_name: &str) -> Self {
        Self::type_error(format!("'{type_name}' object is not subscriptable"))
    }

    /// `'<type_name>' object is not callable`
    #[cold]
    pub fn not_callable(type_name: &str) -> Self {
        Self::type_error(format!("'{type_name}' object is not callable"))
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

// -----------------------------------------------------------------------------
// Tests
