//! Invocation wrappers
//!
//! Wrappers run prebuilt checks around a wrapped implementation. Each
//! call reads the global [`RuntimeChecks`] flag first; when checking is
//! off the original runs directly.
//!
//! - Parameter checks run before delegation; a failure means the original
//!   is never invoked.
//! - Return checks run after delegation; a failure discards the produced
//!   value.

use std::sync::Arc;

use rtcheck_sdk::{CallResult, ClassRef, MethodDescriptor, NativeFn, TypeCheckError, Value};
use tracing::debug;

use crate::check::{Check, CheckList};
use crate::runtime_checks::RuntimeChecks;

/// Result of wrapping a constructor
#[derive(Clone)]
pub struct WrappedConstructor {
    /// New class with the original as its parent
    pub class: ClassRef,
    /// Constructor body that checks, then runs the original body
    pub constructor: NativeFn,
}

fn report(err: &TypeCheckError) {
    debug!(error = %err, "runtime type check failed");
}

/// Wrap a method so its arguments are checked before the original runs.
/// Descriptor flags are carried over unchanged.
pub fn wrap_method(original: &MethodDescriptor, checks: CheckList) -> MethodDescriptor {
    let inner = original.value.clone();
    original.with_value(Arc::new(move |this: &Value, args: &[Value]| -> CallResult<Value> {
        if RuntimeChecks::enabled() {
            checks.run(args).inspect_err(report)?;
        }
        inner(this, args)
    }))
}

/// Wrap a method so its produced value is checked before being returned.
/// Descriptor flags are carried over unchanged.
pub fn wrap_return(original: &MethodDescriptor, check: Check) -> MethodDescriptor {
    let inner = original.value.clone();
    original.with_value(Arc::new(move |this: &Value, args: &[Value]| -> CallResult<Value> {
        let result = inner(this, args)?;
        if RuntimeChecks::enabled() {
            check(&result).inspect_err(report)?;
        }
        Ok(result)
    }))
}

/// Wrap a constructor.
///
/// The returned class has the same name as `original` and declares it as
/// parent, so instances built through the wrapper are instances of both.
/// The wrapper body checks the arguments, then runs `body` (the original
/// constructor logic, if any) with the new instance as receiver.
pub fn wrap_constructor(
    original: &ClassRef,
    body: Option<NativeFn>,
    checks: CheckList,
) -> WrappedConstructor {
    let class = ClassRef::new(original.name(), Some(original));
    let constructor: NativeFn =
        Arc::new(move |this: &Value, args: &[Value]| -> CallResult<Value> {
            if RuntimeChecks::enabled() {
                checks.run(args).inspect_err(report)?;
            }
            match &body {
                Some(body) => body(this, args),
                None => Ok(Value::Undefined),
            }
        });
    WrappedConstructor { class, constructor }
}
