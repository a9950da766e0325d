//! Producing the value returned when a walk short-circuits.

use cg_value::{HostError, Value};

/// Produces the result of a walk that could not complete.
///
/// [`Fallback::resolve`] takes `self` by value, so a fallback is resolved at
/// most once per walk, and only if the walk actually short-circuits.
pub trait Fallback {
    fn resolve(self) -> Result<Value, HostError>;
}

/// Returns the given value.
///
/// The result is a clone of the caller's value and shares its allocation.
///
/// # Examples
///
/// ```
/// use cg_access::{Fallback, Static};
/// use cg_value::Value;
///
/// let default = Value::list([0]);
/// assert!(Static(&default).resolve().unwrap().ptr_eq(&default));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Static<'a>(pub &'a Value);

impl Fallback for Static<'_> {
    #[inline(always)]
    fn resolve(self) -> Result<Value, HostError> {
        Ok(self.0.clone())
    }
}

/// Runs a closure. Its error, if any, is returned unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Factory<F>(pub F);

impl<F> Fallback for Factory<F>
where
    F: FnOnce() -> Result<Value, HostError>,
{
    #[inline(always)]
    fn resolve(self) -> Result<Value, HostError> {
        (self.0)()
    }
}

/// Invokes a callable [`Value`] with no arguments.
///
/// Calling a value that is not callable fails with `TypeError`, which is
/// returned like any other factory failure.
///
/// # Examples
///
/// ```
/// use cg_access::{Call, Fallback};
/// use cg_value::{ErrorKind, Value};
///
/// let factory = Value::func(|| Ok(Value::from(-1)));
/// assert_eq!(Call(&factory).resolve().unwrap(), Value::from(-1));
///
/// let err = Call(&Value::from(7)).resolve().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Type);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Call<'a>(pub &'a Value);

impl Fallback for Call<'_> {
    #[inline]
    fn resolve(self) -> Result<Value, HostError> {
        self.0.call()
    }
}
