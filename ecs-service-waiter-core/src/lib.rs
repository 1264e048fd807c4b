//! This crate provides the core logic of the ECS service waiter:
//! - Matching requested service identifiers against describe results
//! - A monotonic deadline shared by both waiting phases
//! - The activation phase (services exist and are ACTIVE)
//! - The stabilization phase (running count has reached desired count)
//!

mod aws;
pub mod commands;
mod config;
mod deadline;
mod error;
mod matching;
mod types;

#[cfg(test)]
mod test_utils;

// Re-exports for a small, focused public API
pub use aws::ecs_client::{EcsServiceInventory, DESCRIBE_SERVICES_BATCH_SIZE};
pub use aws::{AwsClientOptions, QueryError, ServiceInventory};
pub use commands::ServiceWaiter;
pub use config::{
    parse_service_list, WaitConfig, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TIMEOUT_MINUTES,
};
pub use deadline::Deadline;
pub use error::{WaiterError, WaiterResult};
pub use matching::{match_service, ServiceMatch};
pub use types::{
    ActivationReport, ClusterQueryResult, InactiveService, Phase, QueryFailure, RunOutcome,
    ServiceRecord, ServiceStatus, StabilizationReport, UnstableService, WaitOutcome, WaitSummary,
};
