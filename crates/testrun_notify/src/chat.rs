use testrun_core::error::Result;
use testrun_core::lifecycle::{Listener, TestRun};
use tracing::info;

use crate::StateChangeEvent;

/// Posts state changes to the team chat channel (MS Teams style, simulated).
#[derive(Debug, Default, Clone, Copy)]
pub struct ChatStateChangeNotifier;

impl ChatStateChangeNotifier {
    /// Chat message body for `event`.
    pub fn message(event: &StateChangeEvent) -> String {
        format!("Test run update - {event}")
    }
}

impl Listener for ChatStateChangeNotifier {
    fn on_state_change(&self, run: &TestRun) -> Result<()> {
        let event = StateChangeEvent::from_run(run);
        info!(
            target: "testrun::chat",
            message = %Self::message(&event),
            "simulating sending state change data to chat"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "chat"
    }
}
