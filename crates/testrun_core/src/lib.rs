//! testrun_core: I/O-free engine for the test-run lifecycle.
//!
//! Design goals:
//! - Pure, testable logic (no transport, no printing).
//! - Explicit types; closed phase set; no macro wizardry.
//! - Small, stable public API surface.

pub mod error;

/// Lifecycle phases, transitions, listener fan-out and the `TestRun` subject.
pub mod lifecycle;
