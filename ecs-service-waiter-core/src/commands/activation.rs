//! Activation phase: wait until every requested service exists and is ACTIVE

use crate::aws::{QueryError, ServiceInventory};
use crate::deadline::Deadline;
use crate::matching::{match_service, ServiceMatch};
use crate::types::{
    format_list, ActivationReport, ClusterQueryResult, InactiveService, ServiceRecord,
    WaitOutcome,
};
use log::{debug, info, warn};

impl<I: ServiceInventory> super::service::ServiceWaiter<I> {
    /// Poll until every configured service resolves to an ACTIVE record.
    ///
    /// Query errors, including an absent cluster, are logged and retried after
    /// the poll interval. The deadline is checked before every query and before every sleep.
    pub async fn wait_for_active(&self, deadline: &Deadline) -> WaitOutcome {
        let cluster = self.config.cluster.as_str();
        let services = self.config.services.as_slice();

        loop {
            if deadline.expired() {
                return WaitOutcome::TimedOut;
            }

            match self.inventory.describe_services(cluster, services).await {
                Ok(result) => {
                    log_query_failures(&result);
                    let report = classify_activation(services, &result.records);
                    if report.is_satisfied() {
                        info!("All dependency services are ACTIVE.");
                        return WaitOutcome::Satisfied;
                    }
                    if !report.missing.is_empty() {
                        info!(
                            "Waiting for services to be created: {}",
                            format_list(&report.missing)
                        );
                    }
                    if !report.inactive.is_empty() {
                        info!(
                            "Waiting for services to be ACTIVE: {}",
                            format_list(&report.inactive)
                        );
                    }
                }
                Err(QueryError::ClusterNotFound(detail)) => {
                    info!("Cluster {cluster} not found yet. Waiting...");
                    debug!("{detail}");
                }
                Err(err) => warn!("Error checking services: {err}"),
            }

            // a slow query may already have used up the budget
            if deadline.expired() {
                return WaitOutcome::TimedOut;
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}

/// Sort every requested identifier into active, inactive or missing
pub(crate) fn classify_activation(
    identifiers: &[String],
    records: &[ServiceRecord],
) -> ActivationReport {
    let mut report = ActivationReport::default();
    for identifier in identifiers {
        match match_service(identifier, records) {
            ServiceMatch::NotFound => report.missing.push(identifier.clone()),
            ServiceMatch::Found(record) if record.status.is_active() => {
                report.active.push(identifier.clone());
            }
            ServiceMatch::Found(record) => report.inactive.push(InactiveService {
                name: identifier.clone(),
                status: record.status.clone(),
            }),
        }
    }
    report
}

pub(crate) fn log_query_failures(result: &ClusterQueryResult) {
    for failure in &result.failures {
        debug!("Describe reported failure {failure}");
    }
}
