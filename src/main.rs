// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use configmap_publisher::config::Config;
use configmap_publisher::kubernetes::{create_client, KubeStore};
use configmap_publisher::publish::{run, RunOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting ConfigMap publisher");

    // Load configuration
    let config = Config::from_env().inspect_err(|e| error!("Failed to load configuration: {:#}", e))?;
    info!(
        "Configuration loaded: pod={}/{} apps_root={} match={:?}",
        config.pod_namespace,
        config.pod_name,
        config.apps_root.display(),
        config.name_matcher
    );

    // One client for the whole run
    let client = create_client(&config)
        .await
        .inspect_err(|e| error!("Failed to create Kubernetes client: {}", e))?;
    let store = KubeStore::new(client);

    match run(&store, &config).await? {
        RunOutcome::Skipped(target) => info!("Nothing to publish for {}", target.canonical_name),
        RunOutcome::Published(target) => info!("Published {}", target.canonical_name),
    }

    Ok(())
}
