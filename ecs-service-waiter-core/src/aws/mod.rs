//! Control-plane integration: the inventory capability and its ECS client.

pub mod ecs_client;

use crate::types::ClusterQueryResult;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from a single describe round-trip.
///
/// Both variants are transient as far as the phases are concerned; the split
/// only exists so an absent cluster can be reported differently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Cluster not found: {0}")]
    ClusterNotFound(String),
    #[error("ECS API error: {0}")]
    Api(String),
}

/// Read-only view of a cluster's live service inventory
#[async_trait]
pub trait ServiceInventory: Send + Sync {
    /// Describe `services` in `cluster` in one logical round-trip
    async fn describe_services(
        &self,
        cluster: &str,
        services: &[String],
    ) -> Result<ClusterQueryResult, QueryError>;
}

/// Settings used to build the AWS SDK configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsClientOptions {
    pub region: String,
    pub profile: Option<String>,
    /// Overrides the resolved ECS endpoint (local emulators, private endpoints)
    pub endpoint_url: Option<String>,
}
