//! Single-step operations and their failure classification.

use core::fmt;

use cg_value::{ErrorKind, HostError, Value};

// -----------------------------------------------------------------------------
// StepFailure

/// Why a single step did not produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum StepFailure {
    /// The value does not have what was asked for.
    ///
    /// The walk replaces this with the fallback. The error is kept for
    /// diagnostics only.
    Miss(HostError),
    /// Any other failure. The walk returns it as-is.
    Error(HostError),
}

// -----------------------------------------------------------------------------
// Step

/// A way of moving from one value to the next with a key.
///
/// Implementors decide which failures of [`Step::get`] count as a miss
/// through [`Step::is_miss`]; [`Step::apply`] uses that to sort errors into
/// [`StepFailure`] variants.
pub trait Step: Copy {
    /// Short label used in log output.
    const NAME: &'static str;

    /// Performs the raw operation.
    fn get(&self, current: &Value, key: &Value) -> Result<Value, HostError>;

    /// Returns `true` if failures of this kind mean "not found".
    fn is_miss(kind: ErrorKind) -> bool;

    /// Writes `key` the way this step is written in a chain.
    fn fmt_key(key: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Performs the operation and classifies its failure.
    #[inline]
    fn apply(&self, current: &Value, key: &Value) -> Result<Value, StepFailure> {
        self.get(current, key).map_err(|err| {
            if Self::is_miss(err.kind()) {
                StepFailure::Miss(err)
            } else {
                StepFailure::Error(err)
            }
        })
    }
}

// -----------------------------------------------------------------------------
// Index

/// Element lookup, `current[key]`.
///
/// `KeyError`, `IndexError` and `TypeError` are misses. Treating `TypeError`
/// as a miss lets a chain run over heterogeneous data, where a step may land
/// on a value that cannot be indexed at all.
///
/// # Examples
///
/// ```
/// use cg_access::{Index, Step, StepFailure};
/// use cg_value::Value;
///
/// let v = Value::dict([("a", 1)]);
///
/// assert_eq!(Index.apply(&v, &"a".into()).unwrap(), Value::from(1));
/// assert!(matches!(Index.apply(&v, &"b".into()), Err(StepFailure::Miss(_))));
/// assert!(matches!(Index.apply(&Value::from(1), &"a".into()), Err(StepFailure::Miss(_))));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Index;

impl Step for Index {
    const NAME: &'static str = "item";

    #[inline(always)]
    fn get(&self, current: &Value, key: &Value) -> Result<Value, HostError> {
        current.get_item(key)
    }

    #[inline(always)]
    fn is_miss(kind: ErrorKind) -> bool {
        matches!(kind, ErrorKind::Key | ErrorKind::Index | ErrorKind::Type)
    }

    fn fmt_key(key: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{key}]")
    }
}

// -----------------------------------------------------------------------------
// Attribute

/// Member lookup, `current.name`.
///
/// Only `AttributeError` is a miss. A `TypeError` (for example a name that is
/// not a string) or a `KeyError` raised inside a computed attribute is an
/// error.
///
/// # Examples
///
/// ```
/// use cg_access::{Attribute, Step, StepFailure};
/// use cg_value::{Record, Value};
///
/// let v = Value::from(Record::new("Obj").with("a", 1));
///
/// assert_eq!(Attribute.apply(&v, &"a".into()).unwrap(), Value::from(1));
/// assert!(matches!(Attribute.apply(&v, &"b".into()), Err(StepFailure::Miss(_))));
/// assert!(matches!(Attribute.apply(&v, &Value::from(0)), Err(StepFailure::Error(_))));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Attribute;

impl Step for Attribute {
    const NAME: &'static str = "attr";

    #[inline(always)]
    fn get(&self, current: &Value, key: &Value) -> Result<Value, HostError> {
        current.get_attr(key)
    }

    #[inline(always)]
    fn is_miss(kind: ErrorKind) -> bool {
        kind == ErrorKind::Attribute
    }

    fn fmt_key(key: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match key.as_str() {
            Some(name) => write!(f, ".{name}"),
            None => write!(f, ".<{key}>"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
