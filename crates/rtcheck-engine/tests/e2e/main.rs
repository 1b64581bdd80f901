//! End-to-end tests for checked constructors and methods
//!
//! Each test declares classes on a fresh `Runtime`, applies annotations the
//! way a definition site would, then calls through the runtime.
//!
//! The global flag is never touched here; see `runtime_checks_flag.rs`.


mod constructor_params;
mod precedence;
