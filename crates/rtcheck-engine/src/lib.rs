//! rtcheck engine - runtime type checks at constructor and method boundaries
//!
//! A definition site declares the expected type of each parameter and of
//! the return value once. Annotations then wrap the constructor or method
//! so that every call is validated before (parameters) or after (return
//! value) the wrapped implementation runs. A failed check aborts the call
//! with a [`TypeCheckError`](rtcheck_sdk::TypeCheckError) whose message
//! names the callable, the position, the expected type and what was passed.
//!
//! # Check resolution
//!
//! For each position the builder picks, in order:
//!
//! 1. a per-parameter predicate recorded with [`Runtime::check`]
//! 2. a type-level predicate recorded with [`Runtime::custom_check`]
//! 3. the default nominal/primitive check, optionally nullable
//!
//! # Usage
//!
//! ```ignore
//! use rtcheck_engine::Runtime;
//! use rtcheck_sdk::{native_fn, ExpectedType, Value};
//!
//! let rt = Runtime::new();
//! let dep = rt.define_class("Dependency1", None);
//! let target = rt.define_class("Target", None);
//! rt.define_constructor(
//!     &target,
//!     vec![Some(ExpectedType::class(&dep))],
//!     native_fn(|_, _| Ok(Value::Undefined)),
//! )?;
//! let target = rt.check_params(&target, None)?;
//!
//! rt.construct(&target, &[rt.construct(&dep, &[])?])?; // ok
//! rt.construct(&target, &[Value::from(1)]).unwrap_err(); // The parameter '0' ...
//! ```
//!
//! Checking can be switched off process-wide with
//! [`RuntimeChecks::set_enabled`] or through [`CheckSettings`].

pub mod check;
pub mod config;
pub mod error;
pub mod registry;
pub mod runtime;
pub mod runtime_checks;
pub mod wrap;

pub use check::{build_param_checks, build_return_check, CallSite, Check, CheckList, Position};
pub use config::{CheckSettings, ConfigError, ENABLE_CHECKS_ENV};
pub use error::{DeclarationError, DeclarationResult};
pub use registry::{ClassEntry, ClassRegistry, DeclarationRegistry};
pub use runtime::Runtime;
pub use runtime_checks::RuntimeChecks;
pub use wrap::{wrap_constructor, wrap_method, wrap_return, WrappedConstructor};
