//! Check construction
//!
//! A [`Check`] validates one value and fails with a formatted
//! [`TypeCheckError`]. A [`CheckList`] holds one check per parameter
//! position. Both are built once when a callable is wrapped and only
//! evaluated afterwards.

mod builder;
mod message;

use std::fmt;
use std::sync::Arc;

use rtcheck_sdk::{TypeCheckError, Value};

pub use builder::{build_param_checks, build_return_check};
pub use message::{CallSite, Position};

/// A single position check
pub type Check = Arc<dyn Fn(&Value) -> Result<(), TypeCheckError> + Send + Sync>;

/// Ordered parameter checks for one callable
#[derive(Clone, Default)]
pub struct CheckList {
    checks: Vec<Check>,
}

impl CheckList {
    /// Create from already built checks
    pub fn new(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    /// Number of checked positions
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if no position is checked
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run the checks left to right against `args`, stopping at the first
    /// failure. Arguments beyond the list are not checked; positions with no
    /// argument are checked as `undefined`.
    pub fn run(&self, args: &[Value]) -> Result<(), TypeCheckError> {
        let undefined = Value::Undefined;
        for (index, check) in self.checks.iter().enumerate() {
            check(args.get(index).unwrap_or(&undefined))?;
        }
        Ok(())
    }
}

impl fmt::Debug for CheckList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckList")
            .field("len", &self.checks.len())
            .finish()
    }
}
