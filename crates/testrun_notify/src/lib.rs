//! testrun_notify
//!
//! Adapter layer: the state-change listeners that plug into `testrun_core`.
//! Delivery to real endpoints is simulated; each listener renders a
//! `StateChangeEvent` and reports it through `tracing`.

pub mod error;

mod event;
pub use event::StateChangeEvent;

mod ui;
pub use ui::UiStateChangeNotifier;

mod chat;
pub use chat::ChatStateChangeNotifier;

use std::sync::Arc;

// Re-export core types that listener users will commonly need
pub use testrun_core::error::{CoreError, Result};
pub use testrun_core::lifecycle::{Listener, Phase, TestRun, Transition};

/// The stock listener set, in notification order: UI first, then chat.
pub fn default_listeners() -> Vec<Arc<dyn Listener>> {
    vec![
        Arc::new(UiStateChangeNotifier) as Arc<dyn Listener>,
        Arc::new(ChatStateChangeNotifier),
    ]
}
