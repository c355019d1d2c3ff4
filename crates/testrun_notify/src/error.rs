use testrun_core::error::{CoreError, Severity};

/// Emit `err` at the `tracing` level matching its severity, then one `warn` line per
/// listener failure it carries.
pub fn log_core_error(err: &CoreError) {
    match err.severity {
        Severity::Warn => tracing::warn!("{err}"),
        Severity::Error => tracing::error!("{err}"),
    }

    for failure in err.listener_failures() {
        tracing::warn!(listener = %failure.listener, "{}", failure.message);
    }
}
