use cg_value::HostError;
use thiserror::Error;

/// An error returned by the argument-list entry points.
///
/// # Examples
///
/// ```
/// use cg_access::{AccessError, item_or_default};
/// use cg_value::Value;
///
/// let err = item_or_default(&[Value::None, Value::from(0)]).unwrap_err();
/// assert_eq!(err, AccessError::Arity(2));
/// assert_eq!(err.to_string(), "at least 3 arguments are expected, got 2");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AccessError {
    /// Fewer than three arguments (root, one step, fallback) were given.
    #[error("at least 3 arguments are expected, got {0}")]
    Arity(usize),

    /// A step or the fallback factory failed. The error is the one raised.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl AccessError {
    /// Returns the error raised by a step or a factory, if that is what this is.
    #[inline]
    pub fn into_host(self) -> Option<HostError> {
        match self {
            Self::Host(err) => Some(err),
            Self::Arity(_) => None,
        }
    }

    #[inline]
    pub fn is_arity(&self) -> bool {
        matches!(self, Self::Arity(_))
    }
}
