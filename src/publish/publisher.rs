// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading the artifact and creating its ConfigMap

use crate::constants::artifact::DATA_KEY;
use crate::error::{PublisherError, Result};
use crate::kubernetes::{ClusterStore, CreateOutcome};
use crate::types::ConfigTarget;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Build the ConfigMap holding `content` under `config.json`
pub fn build_config_map(namespace: &str, name: &str, content: String) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(DATA_KEY.to_string(), content)])),
        ..Default::default()
    }
}

/// Read the artifact and create its ConfigMap.
/// Nothing is sent to the store when the artifact cannot be read.
#[instrument(
    skip(store, target),
    fields(configmap = %format!("{}/{}", target.namespace, target.canonical_name))
)]
pub async fn publish_config<S: ClusterStore>(
    store: &S,
    target: &ConfigTarget,
) -> Result<CreateOutcome> {
    let content = tokio::fs::read_to_string(&target.artifact_path)
        .await
        .map_err(|source| PublisherError::ArtifactUnavailable {
            path: target.artifact_path.clone(),
            source,
        })?;

    info!(
        "Read {} bytes from {}",
        content.len(),
        target.artifact_path.display()
    );

    let config_map = build_config_map(&target.namespace, &target.canonical_name, content);
    store.create_config_map(&target.namespace, &config_map).await
}
