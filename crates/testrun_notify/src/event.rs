//! State-change event rendered by listeners.
//!
//! Transport-agnostic: listeners map it onto their channel's wire format.

use std::fmt;

use testrun_core::lifecycle::{Phase, TestRun, Transition};

/// Snapshot of a test run at notification time.
///
/// `from` is the phase still current while listeners run; `to` is the phase being
/// entered, or `None` when `notify_all` was called outside a transition (and then
/// `transition` is `None` too).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChangeEvent {
    pub run: String,
    pub transition: Option<Transition>,
    pub from: Phase,
    pub to: Option<Phase>,
}

impl StateChangeEvent {
    pub fn from_run(run: &TestRun) -> Self {
        Self {
            run: run.name().to_owned(),
            transition: run.pending_transition(),
            from: run.state(),
            to: run.pending(),
        }
    }
}

impl fmt::Display for StateChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "{}: {} -> {}", self.run, self.from, to),
            None => write!(f, "{}: {}", self.run, self.from),
        }
    }
}
