// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The single-pass publish run

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{ClusterStore, CreateOutcome};
use crate::publish::{derive_project_version, is_already_published, publish_config, wait_for_artifact};
use crate::types::ConfigTarget;
use tracing::{debug, error, info};

/// Stages of a run, in order. `Failed` can follow any non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Start,
    IdentityResolved,
    WaitedForArtifact,
    Checked,
    Skipped,
    Published,
    Done,
    Failed,
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A ConfigMap with the canonical name was already present
    Skipped(ConfigTarget),
    Published(ConfigTarget),
}

impl RunOutcome {
    pub fn target(&self) -> &ConfigTarget {
        match self {
            RunOutcome::Skipped(target) | RunOutcome::Published(target) => target,
        }
    }
}

struct Progress {
    state: RunState,
}

impl Progress {
    fn advance(&mut self, next: RunState) {
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Resolve the pod, wait for the artifact and publish it unless already present
pub async fn run<S: ClusterStore>(store: &S, config: &Config) -> Result<RunOutcome> {
    let mut progress = Progress {
        state: RunState::Start,
    };

    match run_stages(store, config, &mut progress).await {
        Ok(outcome) => {
            progress.advance(RunState::Done);
            Ok(outcome)
        }
        Err(e) => {
            error!("Run failed after {:?}: {}", progress.state, e);
            progress.advance(RunState::Failed);
            Err(e)
        }
    }
}

async fn run_stages<S: ClusterStore>(
    store: &S,
    config: &Config,
    progress: &mut Progress,
) -> Result<RunOutcome> {
    let identity = store
        .get_pod(&config.pod_namespace, &config.pod_name)
        .await?;
    let project_version = derive_project_version(&identity)?;
    let target = ConfigTarget::new(&config.pod_namespace, &project_version, &config.apps_root);
    info!(
        "Pod {}/{} runs {} version {}, target ConfigMap {}",
        identity.namespace,
        identity.name,
        project_version.project,
        project_version.raw_version,
        target.canonical_name
    );
    progress.advance(RunState::IdentityResolved);

    wait_for_artifact(&target.artifact_path, config.artifact_wait).await;
    progress.advance(RunState::WaitedForArtifact);

    let published = is_already_published(
        store,
        &target.namespace,
        &target.canonical_name,
        config.name_matcher,
    )
    .await?;
    progress.advance(RunState::Checked);

    if published {
        info!(
            "ConfigMap {}/{} already exists",
            target.namespace, target.canonical_name
        );
        progress.advance(RunState::Skipped);
        return Ok(RunOutcome::Skipped(target));
    }

    match publish_config(store, &target).await? {
        CreateOutcome::Created(_) => {
            info!(
                "ConfigMap {}/{} created successfully",
                target.namespace, target.canonical_name
            );
            progress.advance(RunState::Published);
            Ok(RunOutcome::Published(target))
        }
        CreateOutcome::AlreadyExists => {
            info!(
                "ConfigMap {}/{} was created concurrently, skipping",
                target.namespace, target.canonical_name
            );
            progress.advance(RunState::Skipped);
            Ok(RunOutcome::Skipped(target))
        }
    }
}
