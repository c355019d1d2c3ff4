use crate::error::Result;

use super::TestRun;

/// Observer of test-run state changes.
///
/// Called synchronously from `TestRun::notify_all`, in registration order, while the
/// outgoing phase is still current (`run.state()`); `run.pending()` names the phase
/// being entered.
///
/// ### Implementation requirements
/// - Return `Err` instead of panicking; the failure is collected and the fan-out
///   continues with the next listener.
/// - Keep the call short: the state swap waits for every listener.
pub trait Listener: Send + Sync {
    fn on_state_change(&self, run: &TestRun) -> Result<()>;

    /// Name used in logs and failure reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
