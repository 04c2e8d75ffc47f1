// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and per-environment kubeconfig selection

use crate::config::Config;
use crate::constants::kubeconfig::{FILE_EXTENSION, NAMESPACE_ENV_SEPARATOR};
use crate::error::{PublisherError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Create the single Kubernetes client used for the whole run
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match &config.kubeconfig_dir {
        Some(dir) => {
            let path = kubeconfig_path(dir, &config.pod_namespace);
            info!("Loading kubeconfig from {}", path.display());
            let kubeconfig = tokio::fs::read_to_string(&path).await.map_err(|e| {
                PublisherError::KubeconfigError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
            })?;
            create_client_from_kubeconfig(&kubeconfig).await
        }
        None => Client::try_default().await.map_err(|e| {
            PublisherError::KubeconfigError(format!("Failed to infer config: {}", e))
        }),
    }
}

/// Kubeconfig file for the environment a namespace belongs to.
/// Namespace `prod-app1` selects `<dir>/prod.conf`.
pub fn kubeconfig_path(dir: &Path, namespace: &str) -> PathBuf {
    let env = namespace
        .split(NAMESPACE_ENV_SEPARATOR)
        .next()
        .unwrap_or(namespace);
    dir.join(format!("{}.{}", env, FILE_EXTENSION))
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| PublisherError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                PublisherError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| PublisherError::KubeconfigError(format!("Failed to create client: {}", e)))
}
