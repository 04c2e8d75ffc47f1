// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variable names read at startup
pub mod env {
    pub const POD_NAMESPACE: &str = "POD_NAMESPACE";
    pub const POD_NAME: &str = "POD_NAME";
    /// Root directory under which each project renders its artifact (optional)
    pub const APPS_ROOT: &str = "APPS_ROOT";
    pub const ARTIFACT_WAIT_SECS: &str = "ARTIFACT_WAIT_SECS";
    /// `exact` or `pattern`
    pub const NAME_MATCH: &str = "NAME_MATCH";
    /// Directory holding per-environment kubeconfig files (optional)
    pub const KUBECONFIG_DIR: &str = "KUBECONFIG_DIR";
}

/// Artifact location and payload layout
pub mod artifact {
    pub const DEFAULT_APPS_ROOT: &str = "/data/apps";
    /// Path of the rendered file relative to the project directory
    pub const RELATIVE_PATH: &str = "tmp/config.json";
    /// The single key under which the artifact is stored in the ConfigMap
    pub const DATA_KEY: &str = "config.json";
    /// Fixed wait window in seconds when the artifact is not yet present
    pub const WAIT_SECS: u64 = 10;
}

/// Per-environment kubeconfig selection
pub mod kubeconfig {
    /// Namespaces are named `<env>-app...`; everything from this marker on is dropped
    pub const NAMESPACE_ENV_SEPARATOR: &str = "-app";
    pub const FILE_EXTENSION: &str = "conf";
}
