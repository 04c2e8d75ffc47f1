// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Project/version derivation from container metadata

use crate::error::{PublisherError, Result};
use crate::types::{PodIdentity, ProjectVersion};

/// Derive the project and version from the pod's last declared container
pub fn derive_project_version(identity: &PodIdentity) -> Result<ProjectVersion> {
    let container = identity
        .selected_container()
        .ok_or(PublisherError::NoContainers)?;

    Ok(ProjectVersion {
        project: container.name.clone(),
        raw_version: image_tag(&container.image)?.to_string(),
    })
}

/// Everything after the first `:` of an image reference
pub fn image_tag(image: &str) -> Result<&str> {
    match image.split_once(':') {
        Some((_, tag)) if !tag.is_empty() => Ok(tag),
        _ => Err(PublisherError::MalformedImageReference(image.to_string())),
    }
}
