use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{CoreError, ListenerFailure, Result};

use super::{Listener, Phase, PhaseWork, SimulatedWork, Transition};

/// The observed subject: a test run walking `PreStart -> Start -> PostRun`.
///
/// Responsibilities:
/// - Hold the current phase (never absent, starts at `PreStart`)
/// - Hold the ordered listener list (duplicates allowed)
/// - Drive transitions: notify, swap, execute
pub struct TestRun {
    name: String,
    state: Phase,
    // Set only while listeners are being notified of a transition.
    pending: Option<Phase>,
    listeners: Vec<Arc<dyn Listener>>,
    work: Box<dyn PhaseWork>,
}

impl TestRun {
    /// Create a run in `PreStart` with simulated phase work.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_work(name, SimulatedWork)
    }

    /// Create a run in `PreStart` with caller-supplied phase work.
    pub fn with_work(name: impl Into<String>, work: impl PhaseWork + 'static) -> Self {
        Self {
            name: name.into(),
            state: Phase::PreStart,
            pending: None,
            listeners: Vec::new(),
            work: Box::new(work),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current phase.
    pub fn state(&self) -> Phase {
        self.state
    }

    /// Phase being entered while a transition notifies its listeners.
    pub fn pending(&self) -> Option<Phase> {
        self.pending
    }

    /// The transition in flight while listeners are notified.
    pub fn pending_transition(&self) -> Option<Transition> {
        self.pending.and(Transition::leaving(self.state))
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Listener names in notification order.
    pub fn listener_names(&self) -> Vec<&'static str> {
        self.listeners.iter().map(|l| l.name()).collect()
    }

    /// Append a listener. The same handle may be registered more than once.
    pub fn register_listener(&mut self, listener: Arc<dyn Listener>) {
        debug!(run = %self.name, listener = listener.name(), "listener registered");
        self.listeners.push(listener);
    }

    /// Remove the first registration of `listener` (matched by handle identity).
    ///
    /// Returns `ErrorKind::ListenerNotFound` and leaves the list untouched if absent.
    pub fn unregister_listener(&mut self, listener: &Arc<dyn Listener>) -> Result<()> {
        let Some(index) = self
            .listeners
            .iter()
            .position(|registered| Arc::ptr_eq(registered, listener))
        else {
            return Err(CoreError::listener_not_found(listener.name()));
        };

        self.listeners.remove(index);
        debug!(run = %self.name, listener = listener.name(), "listener unregistered");
        Ok(())
    }

    /// Notify every listener once, in registration order.
    ///
    /// Best-effort: a failing listener does not stop the fan-out. All failures are
    /// returned together as `ErrorKind::ListenerNotificationFailure`.
    pub fn notify_all(&self) -> Result<()> {
        CoreError::from_listener_failures(self.fan_out())
    }

    /// Move to `next`: notify listeners, swap the phase, then execute `next`.
    ///
    /// Listeners are notified *before* the swap, so they observe the outgoing phase
    /// as `state()` and the incoming one as `pending()`. `next` must be the direct
    /// successor of the current phase; anything else is `ErrorKind::InvalidTransition`
    /// and nothing is notified.
    ///
    /// Listener failures from this and every following transition are aggregated
    /// into the returned error once the run reaches `PostRun`.
    pub fn transition(&mut self, next: Phase) -> Result<()> {
        let mut failures = Vec::new();
        self.transition_collecting(next, &mut failures)?;
        CoreError::from_listener_failures(failures)
    }

    /// Execute the current phase and every phase after it.
    ///
    /// On `PostRun` this reruns the terminal work only; no notification fires.
    pub fn execute(&mut self) -> Result<()> {
        let mut failures = Vec::new();
        self.execute_collecting(&mut failures)?;
        CoreError::from_listener_failures(failures)
    }

    fn execute_collecting(&mut self, failures: &mut Vec<ListenerFailure>) -> Result<()> {
        debug!(run = %self.name, phase = %self.state, "executing phase");
        match self.state.execute(&self.name, self.work.as_mut()) {
            Some(next) => self.transition_collecting(next, failures),
            None => Ok(()),
        }
    }

    fn transition_collecting(
        &mut self,
        next: Phase,
        failures: &mut Vec<ListenerFailure>,
    ) -> Result<()> {
        let Some(transition) = self.transition_to(next) else {
            return Err(CoreError::invalid_transition_lifecycle(
                self.state.id(),
                next.id(),
            ));
        };

        self.pending = Some(next);
        failures.extend(self.fan_out());
        self.pending = None;

        debug!(
            run = %self.name,
            transition = transition.label(),
            from = %self.state,
            to = %next,
            "phase transition"
        );
        self.state = next;
        self.execute_collecting(failures)
    }

    fn transition_to(&self, next: Phase) -> Option<Transition> {
        Transition::leaving(self.state).filter(|transition| transition.to() == next)
    }

    fn fan_out(&self) -> Vec<ListenerFailure> {
        let mut failures = Vec::new();
        for listener in &self.listeners {
            if let Err(err) = listener.on_state_change(self) {
                warn!(
                    run = %self.name,
                    listener = listener.name(),
                    error = %err,
                    "listener notification failed"
                );
                failures.push(ListenerFailure::new(
                    Cow::Borrowed(listener.name()),
                    err.message,
                ));
            }
        }
        failures
    }
}

impl fmt::Debug for TestRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRun")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("listeners", &self.listener_names())
            .finish_non_exhaustive()
    }
}
