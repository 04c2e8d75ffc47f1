// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bounded waiting for the rendered artifact

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The condition held at a check
    Ready,
    /// The timeout ran out; the condition was not re-checked after the last sleep
    Elapsed,
}

/// Check `predicate`, sleeping `poll_interval` between checks until `timeout` has passed.
///
/// A check is only made while time remains, so `poll_interval == timeout` gives a
/// single check followed by at most one sleep.
pub async fn await_condition<F>(
    mut predicate: F,
    timeout: Duration,
    poll_interval: Duration,
) -> WaitOutcome
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    let step = if poll_interval.is_zero() {
        timeout
    } else {
        poll_interval
    };

    if predicate() {
        return WaitOutcome::Ready;
    }

    loop {
        let remaining = timeout.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            return WaitOutcome::Elapsed;
        }

        let pause = step.min(remaining);
        debug!("Condition not met, sleeping {:?}", pause);
        sleep(pause).await;

        if start.elapsed() >= timeout {
            return WaitOutcome::Elapsed;
        }
        if predicate() {
            return WaitOutcome::Ready;
        }
    }
}

/// Give a sibling process one `window` to render the artifact.
/// Absence afterwards is not an error here; the read at publish time decides.
pub async fn wait_for_artifact(path: &Path, window: Duration) -> WaitOutcome {
    info!("Checking for artifact {}", path.display());

    let outcome = await_condition(|| !is_absent(path), window, window).await;
    match outcome {
        WaitOutcome::Ready => debug!("Artifact {} is present", path.display()),
        WaitOutcome::Elapsed => warn!(
            "Artifact {} not seen within {}s, continuing",
            path.display(),
            window.as_secs()
        ),
    }
    outcome
}

/// Only a missing file counts as absent; other metadata errors surface at read time
fn is_absent(path: &Path) -> bool {
    matches!(std::fs::metadata(path), Err(e) if e.kind() == ErrorKind::NotFound)
}
