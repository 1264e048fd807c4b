//! Driver: activation then stabilization under one shared deadline

use crate::aws::ServiceInventory;
use crate::deadline::Deadline;
use crate::types::{format_list, Phase, RunOutcome, WaitOutcome, WaitSummary};
use log::info;

impl<I: ServiceInventory> super::service::ServiceWaiter<I> {
    /// Run both phases and summarize the result.
    ///
    /// The timeout budget is shared: stabilization only gets what activation
    /// left over. Stabilization never starts if activation timed out.
    pub async fn run(&self) -> WaitSummary {
        let deadline = Deadline::start(self.config.timeout);
        let outcome = self.run_phases(&deadline).await;

        WaitSummary::new(
            &self.config.cluster,
            &self.config.services,
            outcome,
            deadline.elapsed(),
            deadline.timeout(),
        )
    }

    async fn run_phases(&self, deadline: &Deadline) -> RunOutcome {
        info!(
            "Waiting for services: {} in cluster {}...",
            format_list(&self.config.services),
            self.config.cluster
        );

        if self.wait_for_active(deadline).await == WaitOutcome::TimedOut {
            return RunOutcome::TimedOut {
                phase: Phase::Activation,
            };
        }

        // activation only returns Satisfied once every configured service is ACTIVE
        let accepted = &self.config.services;
        info!(
            "Waiting for services to stabilize (runningCount == desiredCount), {:?} left...",
            deadline.remaining()
        );
        match self.wait_for_stable(accepted, deadline).await {
            WaitOutcome::Satisfied => RunOutcome::Ready,
            WaitOutcome::TimedOut => RunOutcome::TimedOut {
                phase: Phase::Stabilization,
            },
        }
    }
}
