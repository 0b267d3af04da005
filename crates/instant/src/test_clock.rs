//! Process-wide frozen clock for deterministic tests.

use std::sync::{LazyLock, RwLock};

use crate::error::InstantError;
use crate::instant::Instant;

static TEST_NOW: LazyLock<RwLock<Option<Instant>>> = LazyLock::new(|| RwLock::new(None));

/// A process-wide override for "now".
///
/// While set, every code path that asks for the current moment
/// ([`Instant::now`], relative parsing, human-readable diffs against
/// "now") sees the frozen instant instead of the system clock. The
/// override is shared by all threads; tests that use it should not run
/// concurrently with tests that depend on the real clock.
pub struct TestClock;

impl TestClock {
    /// Freezes the clock at the given instant.
    pub fn set(instant: Instant) {
        tracing::debug!(frozen = %instant, "test clock set");
        *TEST_NOW.write().expect("test clock lock poisoned") = Some(instant);
    }

    /// Freezes the clock at the instant described by `input`, which may
    /// itself be relative to the currently effective "now".
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error for unusable input.
    pub fn set_from_str(input: &str) -> Result<(), InstantError> {
        let instant = Instant::parse(input, None)?;
        Self::set(instant);
        Ok(())
    }

    /// Releases the override; the system clock takes over again.
    pub fn clear() {
        tracing::debug!("test clock cleared");
        *TEST_NOW.write().expect("test clock lock poisoned") = None;
    }

    /// The frozen instant, if one is set.
    pub fn get() -> Option<Instant> {
        *TEST_NOW.read().expect("test clock lock poisoned")
    }

    /// Whether an override is currently in force.
    pub fn has() -> bool {
        Self::get().is_some()
    }
}
