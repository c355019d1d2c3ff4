use testrun_core::error::Result;
use testrun_core::lifecycle::{Listener, TestRun};
use tracing::info;

use crate::StateChangeEvent;

/// Pushes state changes to the UI over its websocket channel (simulated).
#[derive(Debug, Default, Clone, Copy)]
pub struct UiStateChangeNotifier;

impl UiStateChangeNotifier {
    /// Websocket text frame for `event`.
    pub fn frame(event: &StateChangeEvent) -> String {
        let via = event.transition.map_or("-", |transition| transition.label());
        let to = event.to.map_or("-", |phase| phase.label());
        format!(
            "state_change run={} via={} from={} to={}",
            event.run, via, event.from, to
        )
    }
}

impl Listener for UiStateChangeNotifier {
    fn on_state_change(&self, run: &TestRun) -> Result<()> {
        let event = StateChangeEvent::from_run(run);
        info!(
            target: "testrun::ui",
            frame = %Self::frame(&event),
            "simulating sending state change websocket data to UI"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ui"
    }
}
