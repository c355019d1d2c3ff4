use std::fmt;

/// Test-run lifecycle phases, in their fixed order.
///
/// - PreStart: setup before the run (initial)
/// - Start: the run itself
/// - PostRun: teardown and reporting (terminal)
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Phase {
    #[default]
    PreStart,
    Start,
    PostRun,
}

/// Internal, compact IDs used for error payloads and telemetry.
impl Phase {
    pub const fn id(self) -> u8 {
        match self {
            Phase::PreStart => 0,
            Phase::Start => 1,
            Phase::PostRun => 2,
        }
    }

    /// The single successor phase; `None` for the terminal phase.
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::PreStart => Some(Phase::Start),
            Phase::Start => Some(Phase::PostRun),
            Phase::PostRun => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::PostRun)
    }

    /// Stable, human-readable label for adapters.
    pub const fn label(self) -> &'static str {
        match self {
            Phase::PreStart => "PreStart",
            Phase::Start => "Start",
            Phase::PostRun => "PostRun",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical list of all lifecycle phases, in order.
pub const ALL_PHASES: [Phase; 3] = [Phase::PreStart, Phase::Start, Phase::PostRun];
