//! Callable implementations and method descriptors

use std::fmt;
use std::sync::Arc;

use crate::error::CallResult;
use crate::value::Value;

/// A constructor or method implementation.
///
/// Receives the `this` receiver and the argument list. Constructors get the
/// freshly allocated instance as receiver; their return value is ignored.
pub type NativeFn = Arc<dyn Fn(&Value, &[Value]) -> CallResult<Value> + Send + Sync>;

/// Wrap a closure as a [`NativeFn`]
pub fn native_fn(
    f: impl Fn(&Value, &[Value]) -> CallResult<Value> + Send + Sync + 'static,
) -> NativeFn {
    Arc::new(f)
}

/// A method slot on a class: the implementation plus its property flags.
///
/// Wrapping a method produces a new descriptor with the same flags and a
/// replaced `value`.
#[derive(Clone)]
pub struct MethodDescriptor {
    /// The implementation
    pub value: NativeFn,
    /// Whether the slot may be reassigned
    pub writable: bool,
    /// Whether the slot shows up in enumeration
    pub enumerable: bool,
    /// Whether the slot may be redefined or removed
    pub configurable: bool,
}

impl MethodDescriptor {
    /// Descriptor with the flags of an ordinary class method
    /// (writable, non-enumerable, configurable)
    pub fn new(value: NativeFn) -> Self {
        Self {
            value,
            writable: true,
            enumerable: false,
            configurable: true,
        }
    }

    /// Same flags, different implementation
    pub fn with_value(&self, value: NativeFn) -> Self {
        Self {
            value,
            writable: self.writable,
            enumerable: self.enumerable,
            configurable: self.configurable,
        }
    }

    /// Invoke the implementation
    #[inline]
    pub fn call(&self, this: &Value, args: &[Value]) -> CallResult<Value> {
        (self.value)(this, args)
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("writable", &self.writable)
            .field("enumerable", &self.enumerable)
            .field("configurable", &self.configurable)
            .finish_non_exhaustive()
    }
}
