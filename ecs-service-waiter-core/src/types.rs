//! Data model shared by the waiting phases.
//!
//! Every value here is rebuilt from a fresh describe round-trip; nothing is
//! carried between polls except the deadline.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Status string ECS reports for a service that is accepted and not being deleted.
pub const ACTIVE_STATUS: &str = "ACTIVE";

/// Lifecycle status reported by the control plane for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Active,
    /// Any other textual status (`DRAINING`, `INACTIVE`, ...)
    Other(String),
}

impl ServiceStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<&str> for ServiceStatus {
    fn from(status: &str) -> Self {
        if status == ACTIVE_STATUS {
            Self::Active
        } else {
            Self::Other(status.to_string())
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str(ACTIVE_STATUS),
            Self::Other(status) => f.write_str(status),
        }
    }
}

/// One service as returned by a describe call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: String,
    pub arn: String,
    pub status: ServiceStatus,
    pub desired_count: u32,
    pub running_count: u32,
    pub pending_count: u32,
}

/// Per-identifier failure reported alongside a successful describe call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFailure {
    pub arn: Option<String>,
    pub reason: Option<String>,
    pub detail: Option<String>,
}

impl fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.arn.as_deref().unwrap_or("<unknown>"),
            self.reason.as_deref().unwrap_or("<no reason>")
        )?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

/// Result of one describe round-trip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterQueryResult {
    pub records: Vec<ServiceRecord>,
    pub failures: Vec<QueryFailure>,
}

/// Terminal result of a single phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Satisfied,
    TimedOut,
}

/// The two waiting phases, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Activation,
    Stabilization,
}

impl Phase {
    /// What the phase was waiting for, used in the timeout message
    pub fn goal(self) -> &'static str {
        match self {
            Self::Activation => "become ACTIVE",
            Self::Stabilization => "stabilize (runningCount == desiredCount)",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activation => f.write_str("activation"),
            Self::Stabilization => f.write_str("stabilization"),
        }
    }
}

/// A matched service whose status is not ACTIVE yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactiveService {
    pub name: String,
    pub status: ServiceStatus,
}

impl fmt::Display for InactiveService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.status)
    }
}

/// Classification of every requested identifier for one activation poll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationReport {
    pub active: Vec<String>,
    pub inactive: Vec<InactiveService>,
    pub missing: Vec<String>,
}

impl ActivationReport {
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty() && self.inactive.is_empty()
    }
}

/// A service whose running count is below its desired count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnstableService {
    pub name: String,
    pub running: u32,
    pub desired: u32,
    pub pending: u32,
}

impl fmt::Display for UnstableService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{}, {} pending)",
            self.name, self.running, self.desired, self.pending
        )
    }
}

/// Classification of every accepted identifier for one stabilization poll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StabilizationReport {
    pub stable: Vec<String>,
    pub unstable: Vec<UnstableService>,
    /// Identifiers that were ACTIVE during activation but are absent from this response
    pub vanished: Vec<String>,
}

impl StabilizationReport {
    pub fn is_satisfied(&self) -> bool {
        self.unstable.is_empty() && self.vanished.is_empty()
    }
}

/// Final result of a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Ready,
    TimedOut { phase: Phase },
}

/// Summary of a run, printed by the CLI before it exits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitSummary {
    pub cluster: String,
    pub services: Vec<String>,
    #[serde(flatten)]
    pub outcome: RunOutcome,
    pub elapsed_secs: u64,
    pub timeout_secs: u64,
}

impl WaitSummary {
    pub fn new(
        cluster: &str,
        services: &[String],
        outcome: RunOutcome,
        elapsed: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            cluster: cluster.to_string(),
            services: services.to_vec(),
            outcome,
            elapsed_secs: elapsed.as_secs(),
            timeout_secs: timeout.as_secs(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.outcome, RunOutcome::Ready)
    }
}

impl fmt::Display for WaitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            RunOutcome::Ready => write!(
                f,
                "All dependency services in cluster {} are ACTIVE and stable ({}s elapsed).",
                self.cluster, self.elapsed_secs
            ),
            RunOutcome::TimedOut { phase } => write!(
                f,
                "Timed out after {}s in {} phase waiting for services {} in cluster {} to {}.",
                self.elapsed_secs,
                phase,
                format_list(&self.services),
                self.cluster,
                phase.goal()
            ),
        }
    }
}

/// Render a list the way progress lines show it: `[a, b, c]`
pub(crate) fn format_list<T: fmt::Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
