//! Wait configuration assembled by the CLI

use crate::error::{WaiterError, WaiterResult};
use std::collections::HashSet;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MINUTES: u64 = 20;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// What to wait for, and for how long
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitConfig {
    pub cluster: String,
    /// Requested identifiers, in the order the operator gave them
    pub services: Vec<String>,
    /// Budget shared by both phases
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl WaitConfig {
    /// Validate and build a configuration with the default poll interval
    pub fn new(
        cluster: impl Into<String>,
        services: Vec<String>,
        timeout: Duration,
    ) -> WaiterResult<Self> {
        let cluster = cluster.into().trim().to_string();
        if cluster.is_empty() {
            return Err(WaiterError::invalid_config("cluster name must not be empty"));
        }
        if services.is_empty() {
            return Err(WaiterError::invalid_config(
                "at least one service name is required",
            ));
        }
        if timeout.is_zero() {
            return Err(WaiterError::invalid_config("timeout must be positive"));
        }

        Ok(Self {
            cluster,
            services,
            timeout,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        })
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> WaiterResult<Self> {
        if poll_interval.is_zero() {
            return Err(WaiterError::invalid_config("poll interval must be positive"));
        }
        self.poll_interval = poll_interval;
        Ok(self)
    }
}

/// Split a comma-separated service list.
///
/// Entries are trimmed, empty entries dropped and duplicates removed, keeping
/// the first occurrence so reporting order follows the operator's input.
pub fn parse_service_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
