//! Process-wide switch for all runtime checks
//!
//! Initialized to enabled at process start. Every wrapped callable reads the
//! flag once per call; when it is off, wrappers delegate straight to the
//! wrapped implementation without evaluating any check. Wrappers are
//! neither rebuilt nor removed when the flag changes.
//!
//! The flag is a single relaxed boolean. Writes are expected from setup or
//! test code; a call racing with a write may observe either value.

use std::sync::atomic::{AtomicBool, Ordering};

static ENABLE_CHECKS: AtomicBool = AtomicBool::new(true);

/// Global enable/disable switch for checking
pub struct RuntimeChecks;

impl RuntimeChecks {
    /// Check if runtime checks are currently enabled
    #[inline]
    pub fn enabled() -> bool {
        ENABLE_CHECKS.load(Ordering::Relaxed)
    }

    /// Enable or disable all runtime checks
    pub fn set_enabled(enabled: bool) {
        ENABLE_CHECKS.store(enabled, Ordering::Relaxed);
    }
}
