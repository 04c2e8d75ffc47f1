// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("Pod {namespace}/{name} unavailable: {source}")]
    IdentityUnavailable {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Pod declares no containers")]
    NoContainers,

    #[error("Image reference '{0}' has no tag")]
    MalformedImageReference(String),

    #[error("Kubernetes API error: {0}")]
    StoreUnavailable(#[from] kube::Error),

    #[error("Artifact {path} unavailable: {source}")]
    ArtifactUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid name pattern: {0}")]
    InvalidNamePattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, PublisherError>;
