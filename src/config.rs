// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{artifact, env as vars};
use crate::publish::NameMatcher;
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Publisher configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub pod_namespace: String,
    pub pod_name: String,
    /// Root of the per-project artifact directories
    pub apps_root: PathBuf,
    pub artifact_wait: Duration,
    pub name_matcher: NameMatcher,
    /// When set, the cluster client is built from `<dir>/<env>.conf`
    pub kubeconfig_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pod_namespace = lookup(vars::POD_NAMESPACE)
            .filter(|v| !v.is_empty())
            .with_context(|| format!("{} environment variable not set", vars::POD_NAMESPACE))?;
        let pod_name = lookup(vars::POD_NAME)
            .filter(|v| !v.is_empty())
            .with_context(|| format!("{} environment variable not set", vars::POD_NAME))?;

        let apps_root = lookup(vars::APPS_ROOT)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(artifact::DEFAULT_APPS_ROOT));

        let wait_secs = match lookup(vars::ARTIFACT_WAIT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("{} must be a number of seconds, got '{}'", vars::ARTIFACT_WAIT_SECS, raw)
            })?,
            None => artifact::WAIT_SECS,
        };

        let name_matcher = match lookup(vars::NAME_MATCH).as_deref() {
            None | Some("exact") => NameMatcher::Exact,
            Some("pattern") => NameMatcher::Pattern,
            Some(other) => bail!(
                "{} must be 'exact' or 'pattern', got '{}'",
                vars::NAME_MATCH,
                other
            ),
        };

        let kubeconfig_dir = lookup(vars::KUBECONFIG_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            pod_namespace,
            pod_name,
            apps_root,
            artifact_wait: Duration::from_secs(wait_secs),
            name_matcher,
            kubeconfig_dir,
        })
    }
}
