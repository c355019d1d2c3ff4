//! testrun_core::lifecycle
//!
//! Test-run lifecycle semantics. This module contains **no** transport or output code.
//!
//! Key ideas:
//! - Closed, linear phase set: `PreStart -> Start -> PostRun`
//! - Phase work is pluggable (`PhaseWork`); the phase only decides its successor
//! - Transition pipeline: notify listeners -> swap phase -> execute new phase
//! - Listener failures are collected, never allowed to halt the lifecycle

mod engine;
mod listener;
mod run;
mod state;
mod transition;

pub use engine::{PhaseWork, SimulatedWork};
pub use listener::Listener;
pub use run::TestRun;
pub use state::{Phase, ALL_PHASES};
pub use transition::Transition;
