//! Test helpers: record builders and a scripted in-memory inventory.

use crate::aws::{QueryError, ServiceInventory};
use crate::deadline::Deadline;
use crate::types::{ClusterQueryResult, ServiceRecord, ServiceStatus};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub(crate) const TEST_CLUSTER: &str = "test-cluster";

pub(crate) fn record(
    name: &str,
    status: &str,
    desired: u32,
    running: u32,
    pending: u32,
) -> ServiceRecord {
    ServiceRecord {
        name: name.to_string(),
        arn: format!("arn:aws:ecs:us-east-1:123456789012:service/{TEST_CLUSTER}/{name}"),
        status: ServiceStatus::from(status),
        desired_count: desired,
        running_count: running,
        pending_count: pending,
    }
}

pub(crate) fn response(records: Vec<ServiceRecord>) -> Result<ClusterQueryResult, QueryError> {
    Ok(ClusterQueryResult {
        records,
        failures: Vec::new(),
    })
}

pub(crate) fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

/// Paused-clock sleeps land on whole seconds; allow for timer rounding anyway.
pub(crate) fn assert_elapsed(deadline: &Deadline, secs: u64) {
    let elapsed = deadline.elapsed();
    assert!(
        elapsed >= Duration::from_secs(secs) && elapsed < Duration::from_secs(secs + 1),
        "elapsed {elapsed:?}, expected about {secs}s"
    );
}

/// Serves canned responses in order; the last one repeats forever.
pub(crate) struct ScriptedInventory {
    script: Mutex<VecDeque<Result<ClusterQueryResult, QueryError>>>,
    calls: AtomicUsize,
    last_services: Mutex<Vec<String>>,
    delay: Duration,
}

impl ScriptedInventory {
    pub(crate) fn new(script: Vec<Result<ClusterQueryResult, QueryError>>) -> Self {
        assert!(!script.is_empty(), "script needs at least one response");
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
            last_services: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    /// Make every query take `delay` on the (paused) tokio clock
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Identifiers passed to the most recent query
    pub(crate) fn last_services(&self) -> Vec<String> {
        self.last_services
            .lock()
            .expect("services lock poisoned")
            .clone()
    }
}

#[async_trait]
impl ServiceInventory for ScriptedInventory {
    async fn describe_services(
        &self,
        cluster: &str,
        services: &[String],
    ) -> Result<ClusterQueryResult, QueryError> {
        assert_eq!(cluster, TEST_CLUSTER);
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_services.lock().expect("services lock poisoned") = services.to_vec();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut script = self.script.lock().expect("script lock poisoned");
        if script.len() > 1 {
            script.pop_front().expect("script is non-empty")
        } else {
            script.front().cloned().expect("script is non-empty")
        }
    }
}
