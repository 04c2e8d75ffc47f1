// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The cluster store capability: pod lookup and ConfigMap list/create

use crate::error::{PublisherError, Result};
use crate::types::PodIdentity;
use k8s_openapi::api::core::v1::{ConfigMap, Pod};
use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use std::future::Future;
use tracing::{debug, instrument};

/// Result of a create call against the cluster store
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// The API server accepted the object and returned it
    Created(ConfigMap),
    /// Another writer created an object with the same name first
    AlreadyExists,
}

/// Operations the publisher needs from the cluster
pub trait ClusterStore {
    fn get_pod(&self, namespace: &str, name: &str)
        -> impl Future<Output = Result<PodIdentity>> + Send;

    /// Names of all ConfigMaps in the namespace
    fn list_config_maps(&self, namespace: &str) -> impl Future<Output = Result<Vec<String>>> + Send;

    fn create_config_map(
        &self,
        namespace: &str,
        config_map: &ConfigMap,
    ) -> impl Future<Output = Result<CreateOutcome>> + Send;
}

/// `ClusterStore` backed by the Kubernetes API
#[derive(Clone)]
pub struct KubeStore {
    client: Client,
}

impl KubeStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ClusterStore for KubeStore {
    #[instrument(skip(self))]
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<PodIdentity> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);

        let pod = pods
            .get(name)
            .await
            .map_err(|source| PublisherError::IdentityUnavailable {
                namespace: namespace.to_string(),
                name: name.to_string(),
                source,
            })?;

        Ok(PodIdentity::from_pod(&pod))
    }

    #[instrument(skip(self))]
    async fn list_config_maps(&self, namespace: &str) -> Result<Vec<String>> {
        let config_maps: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        let list = config_maps.list(&ListParams::default()).await?;

        debug!("Found {} ConfigMaps in {}", list.items.len(), namespace);
        Ok(list.items.iter().map(|cm| cm.name_any()).collect())
    }

    #[instrument(skip(self, config_map), fields(name = %config_map.name_any()))]
    async fn create_config_map(
        &self,
        namespace: &str,
        config_map: &ConfigMap,
    ) -> Result<CreateOutcome> {
        let config_maps: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);

        match config_maps.create(&PostParams::default(), config_map).await {
            Ok(created) => Ok(CreateOutcome::Created(created)),
            Err(kube::Error::Api(err)) if err.code == 409 => {
                debug!("ConfigMap {} already exists: {}", config_map.name_any(), err.message);
                Ok(CreateOutcome::AlreadyExists)
            }
            Err(e) => Err(PublisherError::StoreUnavailable(e)),
        }
    }
}
