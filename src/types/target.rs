// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::artifact;
use std::path::{Path, PathBuf};

/// Project and version derived from the selected container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectVersion {
    pub project: String,
    /// Image tag exactly as declared
    pub raw_version: String,
}

impl ProjectVersion {
    /// The tag lowercased, as used in ConfigMap names
    pub fn version(&self) -> String {
        self.raw_version.to_lowercase()
    }

    /// `<project>-<version>`
    pub fn canonical_name(&self) -> String {
        format!("{}-{}", self.project, self.version())
    }
}

/// Where the artifact is read from and which ConfigMap it becomes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigTarget {
    pub namespace: String,
    pub canonical_name: String,
    pub artifact_path: PathBuf,
}

impl ConfigTarget {
    pub fn new(namespace: &str, project_version: &ProjectVersion, apps_root: &Path) -> Self {
        ConfigTarget {
            namespace: namespace.to_string(),
            canonical_name: project_version.canonical_name(),
            artifact_path: artifact_path(apps_root, &project_version.project),
        }
    }
}

/// `<apps_root>/<project>/tmp/config.json`
pub fn artifact_path(apps_root: &Path, project: &str) -> PathBuf {
    apps_root.join(project).join(artifact::RELATIVE_PATH)
}
