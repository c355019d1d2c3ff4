use std::process::ExitCode;

use tracing::info;

use testrun_core::lifecycle::TestRun;
use testrun_notify::default_listeners;
use testrun_notify::error::log_core_error;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let mut run = TestRun::new("test-run");
    for listener in default_listeners() {
        run.register_listener(listener);
    }

    info!(run = %run.name(), listeners = ?run.listener_names(), "starting test run");

    if let Err(err) = run.execute() {
        log_core_error(&err);
        return ExitCode::FAILURE;
    }

    info!(run = %run.name(), phase = %run.state(), "test run finished");
    ExitCode::SUCCESS
}
