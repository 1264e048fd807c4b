//! AWS ECS client wrapper for service inventory queries

use crate::aws::{AwsClientOptions, QueryError, ServiceInventory};
use crate::types::{ClusterQueryResult, QueryFailure, ServiceRecord, ServiceStatus};
use async_trait::async_trait;
use aws_sdk_ecs::error::{DisplayErrorContext, SdkError};
use aws_sdk_ecs::operation::describe_services::DescribeServicesError;
use aws_sdk_ecs::types::{Failure, Service};
use aws_sdk_ecs::Client as EcsClient;
use log::debug;

/// Maximum number of services ECS accepts in one `DescribeServices` call
pub const DESCRIBE_SERVICES_BATCH_SIZE: usize = 10;

pub struct EcsServiceInventory {
    client: EcsClient,
}

impl EcsServiceInventory {
    pub fn new(client: EcsClient) -> Self {
        Self { client }
    }

    /// Build a client from the standard credential provider chain.
    ///
    /// Region, profile and endpoint come from the caller; everything else
    /// (credentials, retries) follows the SDK defaults.
    pub async fn from_options(options: &AwsClientOptions) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(options.region.clone()));
        if let Some(profile) = &options.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let config = loader.load().await;

        Self::new(EcsClient::new(&config))
    }
}

#[async_trait]
impl ServiceInventory for EcsServiceInventory {
    async fn describe_services(
        &self,
        cluster: &str,
        services: &[String],
    ) -> Result<ClusterQueryResult, QueryError> {
        let mut result = ClusterQueryResult::default();

        for batch in services.chunks(DESCRIBE_SERVICES_BATCH_SIZE) {
            debug!("Describing {} service(s) in cluster {cluster}", batch.len());
            let output = self
                .client
                .describe_services()
                .cluster(cluster)
                .set_services(Some(batch.to_vec()))
                .send()
                .await
                .map_err(classify_sdk_error)?;

            result
                .records
                .extend(output.services().iter().map(record_from_service));
            result
                .failures
                .extend(output.failures().iter().map(failure_from_sdk));
        }

        Ok(result)
    }
}

fn classify_sdk_error(err: SdkError<DescribeServicesError>) -> QueryError {
    let message = DisplayErrorContext(&err).to_string();
    match err.as_service_error() {
        Some(service_err) if service_err.is_cluster_not_found_exception() => {
            QueryError::ClusterNotFound(message)
        }
        _ => QueryError::Api(message),
    }
}

fn record_from_service(service: &Service) -> ServiceRecord {
    ServiceRecord {
        name: service.service_name().unwrap_or_default().to_string(),
        arn: service.service_arn().unwrap_or_default().to_string(),
        status: ServiceStatus::from(service.status().unwrap_or_default()),
        desired_count: non_negative(service.desired_count()),
        running_count: non_negative(service.running_count()),
        pending_count: non_negative(service.pending_count()),
    }
}

fn failure_from_sdk(failure: &Failure) -> QueryFailure {
    QueryFailure {
        arn: failure.arn().map(str::to_string),
        reason: failure.reason().map(str::to_string),
        detail: failure.detail().map(str::to_string),
    }
}

fn non_negative(count: i32) -> u32 {
    u32::try_from(count).unwrap_or_default()
}
