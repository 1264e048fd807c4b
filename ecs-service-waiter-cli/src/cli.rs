//! Command-line arguments

use anyhow::{Context, Result};
use clap::Parser;
use ecs_service_waiter_core::{
    parse_service_list, AwsClientOptions, WaitConfig, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_TIMEOUT_MINUTES,
};
use std::time::Duration;

/// Block until ECS services are ACTIVE and running at their desired count.
#[derive(Parser, Debug)]
#[command(name = "ecs-service-waiter", version)]
pub(crate) struct Cli {
    /// ECS cluster name
    #[arg(long, env = "ECS_CLUSTER")]
    pub cluster: String,

    /// Comma-separated list of service names
    #[arg(long, env = "ECS_SERVICES")]
    pub services: String,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    pub region: String,

    /// Timeout in minutes, shared by the activation and stabilization phases
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_MINUTES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Seconds to sleep between polls
    #[arg(
        long,
        default_value_t = DEFAULT_POLL_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval: u64,

    /// Named AWS profile to load credentials from
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Override the ECS endpoint URL
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Print the final summary as a JSON object (progress goes to stderr)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub(crate) fn wait_config(&self) -> Result<WaitConfig> {
        let services = parse_service_list(&self.services);
        let timeout = Duration::from_secs(self.timeout.saturating_mul(60));

        let config = WaitConfig::new(&self.cluster, services, timeout)
            .and_then(|config| config.with_poll_interval(Duration::from_secs(self.poll_interval)))
            .context("Invalid arguments")?;
        Ok(config)
    }

    pub(crate) fn aws_options(&self) -> AwsClientOptions {
        AwsClientOptions {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
