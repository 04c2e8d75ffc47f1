// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Detection of an already published ConfigMap

use crate::error::Result;
use crate::kubernetes::ClusterStore;
use regex::Regex;
use tracing::{debug, instrument};

/// How existing ConfigMap names are compared against the canonical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatcher {
    /// Names must be equal
    #[default]
    Exact,
    /// The canonical name is an unanchored regular expression; any existing name it
    /// matches counts. `api-1.2` therefore also matches `api-1.23` and `api-1x2`.
    Pattern,
}

impl NameMatcher {
    /// Whether any of `existing` counts as `canonical_name`
    pub fn matches_any<S: AsRef<str>>(&self, canonical_name: &str, existing: &[S]) -> Result<bool> {
        match self {
            NameMatcher::Exact => Ok(existing.iter().any(|n| n.as_ref() == canonical_name)),
            NameMatcher::Pattern => {
                let re = Regex::new(canonical_name)?;
                Ok(existing.iter().any(|n| re.is_match(n.as_ref())))
            }
        }
    }
}

/// List the namespace's ConfigMaps and report whether `canonical_name` is among them
#[instrument(skip(store))]
pub async fn is_already_published<S: ClusterStore>(
    store: &S,
    namespace: &str,
    canonical_name: &str,
    matcher: NameMatcher,
) -> Result<bool> {
    let existing = store.list_config_maps(namespace).await?;
    let found = matcher.matches_any(canonical_name, &existing)?;

    debug!(
        "ConfigMap {}/{} {} among {} existing ({:?} match)",
        namespace,
        canonical_name,
        if found { "found" } else { "not found" },
        existing.len(),
        matcher
    );
    Ok(found)
}
