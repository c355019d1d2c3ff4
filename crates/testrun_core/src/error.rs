use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Convenient result alias for testrun_core.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Log/handling importance. Maps onto `tracing` levels in the adapter layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    /// Caller misuse the run survives (bad transition, unknown listener).
    Warn,
    /// Lost notifications.
    Error,
}

/// Where an error came from (helps triage and routing).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Domain {
    Lifecycle,
    Listener,
    Other,
}

/// Stable error "kind" for matching/branching.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// `unregister_listener` was handed a listener that is not registered.
    ListenerNotFound,
    /// One or more listeners failed during a fan-out.
    ListenerNotificationFailure,
    InvalidTransition,
    Other,
}

/// One listener's failed notification, as collected by a best-effort fan-out.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ListenerFailure {
    pub listener: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl ListenerFailure {
    pub fn new(
        listener: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            listener: listener.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ListenerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.listener, self.message)
    }
}

/// Optional structured payload for rich context.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Payload {
    None,

    /// Generic key/value context (usually no heap alloc if using &str).
    Context {
        key: &'static str,
        value: Cow<'static, str>,
    },

    /// Lifecycle-specific context (phase ids, see `Phase::id`).
    LifecycleTransition { from_state: u8, to_state: u8 },

    /// Every listener failure of a fan-out (or a whole run), in notification order.
    ListenerFailures(Vec<ListenerFailure>),
}

/// The one error type that crosses module boundaries in testrun_core.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{severity:?}: {message}")]
pub struct CoreError {
    pub domain: Domain,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: Cow<'static, str>,
    pub payload: Payload,
}

impl CoreError {
    // ---------------- Fluent entry points ----------------

    #[inline]
    pub fn warn() -> ErrB {
        ErrB::new(Severity::Warn)
    }
    #[inline]
    pub fn error() -> ErrB {
        ErrB::new(Severity::Error)
    }

    /// Construct a lifecycle InvalidTransition error with structured context.
    pub fn invalid_transition_lifecycle(from_state: u8, to_state: u8) -> Self {
        CoreError::warn()
            .domain(Domain::Lifecycle)
            .kind(ErrorKind::InvalidTransition)
            .msg("invalid lifecycle transition")
            .payload(Payload::LifecycleTransition {
                from_state,
                to_state,
            })
            .build()
    }

    /// Construct the error returned when unregistering a listener that is not present.
    pub fn listener_not_found(listener: &'static str) -> Self {
        CoreError::warn()
            .domain(Domain::Listener)
            .kind(ErrorKind::ListenerNotFound)
            .msgf(format_args!("listener '{listener}' is not registered"))
            .payload(Payload::Context {
                key: "listener",
                value: Cow::Borrowed(listener),
            })
            .build()
    }

    /// Aggregate listener failures into one error; `Ok` when there are none.
    pub fn from_listener_failures(failures: Vec<ListenerFailure>) -> Result<()> {
        if failures.is_empty() {
            return Ok(());
        }

        Err(CoreError::error()
            .domain(Domain::Listener)
            .kind(ErrorKind::ListenerNotificationFailure)
            .msgf(format_args!("{} listener notification(s) failed", failures.len()))
            .payload(Payload::ListenerFailures(failures))
            .build())
    }

    /// Listener failures carried by this error (empty for other kinds).
    pub fn listener_failures(&self) -> &[ListenerFailure] {
        match &self.payload {
            Payload::ListenerFailures(failures) => failures,
            _ => &[],
        }
    }
}

/// Fluent builder that behaves like iterator chains (takes self, returns Self).
/// Defaults:
/// - domain = Other
/// - kind = Other
/// - message = ""
/// - payload = None
#[derive(Debug, Clone)]
pub struct ErrB {
    domain: Domain,
    kind: ErrorKind,
    severity: Severity,
    message: Cow<'static, str>,
    payload: Payload,
}

impl ErrB {
    #[inline]
    fn new(severity: Severity) -> Self {
        Self {
            domain: Domain::Other,
            kind: ErrorKind::Other,
            severity,
            message: Cow::Borrowed(""),
            payload: Payload::None,
        }
    }

    /// Set/override the domain (defaults to Domain::Other).
    #[inline]
    pub fn domain(mut self, d: Domain) -> Self {
        self.domain = d;
        self
    }

    /// Set/override the kind (defaults to ErrorKind::Other).
    #[inline]
    pub fn kind(mut self, k: ErrorKind) -> Self {
        self.kind = k;
        self
    }

    #[inline]
    pub fn msg(mut self, m: impl Into<Cow<'static, str>>) -> Self {
        self.message = m.into();
        self
    }

    /// Formatting-friendly message setter.
    #[inline]
    pub fn msgf(mut self, args: fmt::Arguments<'_>) -> Self {
        self.message = Cow::Owned(args.to_string());
        self
    }

    /// Only one payload: this replaces any previous payload.
    #[inline]
    pub fn payload(mut self, p: Payload) -> Self {
        self.payload = p;
        self
    }

    #[inline]
    pub fn build(self) -> CoreError {
        CoreError {
            domain: self.domain,
            kind: self.kind,
            severity: self.severity,
            message: self.message,
            payload: self.payload,
        }
    }
}
