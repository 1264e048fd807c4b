//! Stabilization phase: wait until running count reaches desired count

use super::activation::log_query_failures;
use crate::aws::ServiceInventory;
use crate::deadline::Deadline;
use crate::matching::{match_service, ServiceMatch};
use crate::types::{format_list, ServiceRecord, StabilizationReport, UnstableService, WaitOutcome};
use log::{debug, info, warn};

impl<I: ServiceInventory> super::service::ServiceWaiter<I> {
    /// Poll until every service in `accepted` runs at least its desired count.
    ///
    /// `accepted` must be the identifiers the activation phase confirmed ACTIVE.
    /// Status is not re-checked here; a service that drops out of the describe
    /// response is logged as an anomaly and polled again.
    pub async fn wait_for_stable(&self, accepted: &[String], deadline: &Deadline) -> WaitOutcome {
        let cluster = self.config.cluster.as_str();

        loop {
            if deadline.expired() {
                return WaitOutcome::TimedOut;
            }

            match self.inventory.describe_services(cluster, accepted).await {
                Ok(result) => {
                    log_query_failures(&result);
                    let report = classify_stabilization(accepted, &result.records);
                    if report.is_satisfied() {
                        info!("All dependency services are stable.");
                        return WaitOutcome::Satisfied;
                    }
                    if !report.unstable.is_empty() {
                        info!(
                            "Waiting for services to stabilize: {}",
                            format_list(&report.unstable)
                        );
                    }
                    if !report.vanished.is_empty() {
                        warn!(
                            "Services confirmed ACTIVE are missing from the describe response, retrying: {}",
                            format_list(&report.vanished)
                        );
                    }
                }
                Err(err) => warn!("Error checking service stability: {err}"),
            }

            // a slow query may already have used up the budget
            if deadline.expired() {
                return WaitOutcome::TimedOut;
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}

/// Sort every accepted identifier into stable, unstable or vanished.
///
/// Only `running < desired` blocks; an over-provisioned service counts as stable.
pub(crate) fn classify_stabilization(
    identifiers: &[String],
    records: &[ServiceRecord],
) -> StabilizationReport {
    let mut report = StabilizationReport::default();
    for identifier in identifiers {
        let record = match match_service(identifier, records) {
            ServiceMatch::Found(record) => record,
            ServiceMatch::NotFound => {
                report.vanished.push(identifier.clone());
                continue;
            }
        };

        debug!(
            "{identifier}: running={} desired={} pending={}",
            record.running_count, record.desired_count, record.pending_count
        );
        if record.running_count < record.desired_count {
            report.unstable.push(UnstableService {
                name: identifier.clone(),
                running: record.running_count,
                desired: record.desired_count,
                pending: record.pending_count,
            });
        } else {
            report.stable.push(identifier.clone());
        }
    }
    report
}
