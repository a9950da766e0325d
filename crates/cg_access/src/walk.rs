//! The chain walker.

use cg_value::{HostError, Value};

use crate::{Fallback, Step, StepFailure};

/// Walks `steps` from `root`, short-circuiting to `fallback`.
///
/// Before each step the current value is checked for `None`; if it is, the
/// fallback is returned and no further step runs. This also applies before
/// the last step, so a chain that reaches `None` at its end still returns the
/// fallback instead of attempting the step. A step that misses (see
/// [`Step::is_miss`]) returns the fallback as well. Any other step error is
/// returned unchanged and the fallback is left untouched.
///
/// Every step runs at most once, strictly in order. With no steps the root is
/// returned as-is.
///
/// # Examples
///
/// ```
/// use cg_access::{Index, Static, walk};
/// use cg_value::Value;
///
/// let data = Value::dict([("a", Value::dict([("b", 5)]))]);
/// let zero = Value::from(0);
///
/// let keys: [Value; 2] = ["a".into(), "b".into()];
/// assert_eq!(walk(&data, &keys, Index, Static(&zero)).unwrap(), Value::from(5));
///
/// let keys: [Value; 3] = ["a".into(), "b".into(), "c".into()];
/// assert_eq!(walk(&data, &keys, Index, Static(&zero)).unwrap(), zero);
/// ```
pub fn walk<S: Step, F: Fallback>(
    root: &Value,
    steps: &[Value],
    step: S,
    fallback: F,
) -> Result<Value, HostError> {
    let mut current = root.clone();

    for (position, key) in steps.iter().enumerate() {
        if current.is_none() {
            log::trace!(
                "{} chain reached None before step {position}, using fallback",
                S::NAME
            );
            return fallback.resolve();
        }

        current = match step.apply(&current, key) {
            Ok(next) => next,
            Err(StepFailure::Miss(err)) => {
                log::trace!(
                    "{} chain missed at step {position}, using fallback: {err}",
                    S::NAME
                );
                return fallback.resolve();
            }
            Err(StepFailure::Error(err)) => return Err(err),
        };
    }

    Ok(current)
}

/// Walks `steps` from `root` without a fallback.
///
/// Every failure is returned, misses included, and `None` gets no special
/// treatment: a step on `None` fails like a step on any other value.
///
/// # Examples
///
/// ```
/// use cg_access::{Index, walk_strict};
/// use cg_value::{ErrorKind, Value};
///
/// let data = Value::dict([("a", Value::None)]);
///
/// let err = walk_strict(&data, &["a".into(), "b".into()], Index).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Type);
/// ```
pub fn walk_strict<S: Step>(root: &Value, steps: &[Value], step: S) -> Result<Value, HostError> {
    let mut current = root.clone();
    for key in steps {
        current = step.get(&current, key)?;
    }
    Ok(current)
}

// -----------------------------------------------------------------------------
// Tests
