use super::Phase;

/// Named forward step between two adjacent phases.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    /// PreStart -> Start
    Begin,
    /// Start -> PostRun
    Finish,
}

impl Transition {
    /// Stable, human-readable label for adapters.
    pub const fn label(self) -> &'static str {
        match self {
            Transition::Begin => "begin",
            Transition::Finish => "finish",
        }
    }

    pub const fn to(self) -> Phase {
        match self {
            Transition::Begin => Phase::Start,
            Transition::Finish => Phase::PostRun,
        }
    }

    /// The transition leaving `phase`, if any.
    pub const fn leaving(phase: Phase) -> Option<Transition> {
        match phase {
            Phase::PreStart => Some(Transition::Begin),
            Phase::Start => Some(Transition::Finish),
            Phase::PostRun => None,
        }
    }
}
