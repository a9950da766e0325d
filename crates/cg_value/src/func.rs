use alloc::sync::Arc;
use core::fmt;

use crate::{HostError, Value};

/// A shareable zero-argument callable.
///
/// Clones share the same closure, see [`Func::ptr_eq`].
#[derive(Clone)]
pub struct Func(Arc<dyn Fn() -> Result<Value, HostError> + Send + Sync>);

impl Func {
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<Value, HostError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callable. Every call runs the closure again.
    #[inline]
    pub fn call(&self) -> Result<Value, HostError> {
        (self.0)()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<function>")
    }
}
