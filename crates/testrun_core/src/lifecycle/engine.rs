use tracing::info;

use super::Phase;

/// Work executed while a test run sits in a phase.
///
/// Implementors own the real domain logic (build, deploy, teardown...) and any
/// output it produces. The engine only decides ordering; `run` is the test-run name.
pub trait PhaseWork {
    fn on_pre_start(&mut self, run: &str);
    fn on_start(&mut self, run: &str);
    fn on_post_run(&mut self, run: &str);
}

/// Default work: no real effects, one `tracing` event per simulated step.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedWork;

impl PhaseWork for SimulatedWork {
    fn on_pre_start(&mut self, run: &str) {
        info!(target: "testrun::work", run, "simulating run pre-start code");
        info!(target: "testrun::work", run, "pre-start complete");
    }

    fn on_start(&mut self, run: &str) {
        info!(target: "testrun::work", run, "simulating run start code");
        info!(target: "testrun::work", run, "test run complete");
    }

    fn on_post_run(&mut self, run: &str) {
        info!(target: "testrun::work", run, "simulating post test run code");
        info!(target: "testrun::work", run, "done");
    }
}

impl Phase {
    /// Run this phase's work and return the phase that must follow, if any.
    ///
    /// Transitions are linear and unconditional: the result is always `self.next()`.
    pub fn execute(self, run: &str, work: &mut dyn PhaseWork) -> Option<Phase> {
        match self {
            Phase::PreStart => work.on_pre_start(run),
            Phase::Start => work.on_start(run),
            Phase::PostRun => work.on_post_run(run),
        }

        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl PhaseWork for Recorder {
        fn on_pre_start(&mut self, _run: &str) {
            self.calls.push("pre_start");
        }
        fn on_start(&mut self, _run: &str) {
            self.calls.push("start");
        }
        fn on_post_run(&mut self, _run: &str) {
            self.calls.push("post_run");
        }
    }

    #[test]
    fn each_phase_runs_its_own_hook_and_names_its_successor() {
        let cases = [
            (Phase::PreStart, "pre_start", Some(Phase::Start)),
            (Phase::Start, "start", Some(Phase::PostRun)),
            (Phase::PostRun, "post_run", None),
        ];

        for (phase, hook, expected_next) in cases {
            let mut work = Recorder::default();
            let next = phase.execute("run", &mut work);
            assert_eq!(work.calls, [hook]);
            assert_eq!(next, expected_next);
        }
    }

    #[test]
    fn simulated_work_follows_the_same_order() {
        let mut work = SimulatedWork;
        assert_eq!(Phase::PreStart.execute("run", &mut work), Some(Phase::Start));
    }
}
