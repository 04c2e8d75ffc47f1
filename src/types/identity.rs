// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;

/// Name and image of one declared container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerRef {
    pub name: String,
    pub image: String,
}

/// The running pod as seen by the publisher, read once at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PodIdentity {
    pub namespace: String,
    pub name: String,
    pub containers: Vec<ContainerRef>,
}

impl PodIdentity {
    /// Extract the identity from a Pod object returned by the API server
    pub fn from_pod(pod: &Pod) -> Self {
        let containers = pod
            .spec
            .as_ref()
            .map(|spec| {
                spec.containers
                    .iter()
                    .map(|c| ContainerRef {
                        name: c.name.clone(),
                        image: c.image.clone().unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        PodIdentity {
            namespace: pod.namespace().unwrap_or_default(),
            name: pod.name_any(),
            containers,
        }
    }

    /// The container whose metadata names the published ConfigMap.
    /// When several are declared the last one wins.
    pub fn selected_container(&self) -> Option<&ContainerRef> {
        self.containers.last()
    }
}
