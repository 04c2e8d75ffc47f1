// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The publish run: name derivation, artifact wait, existence check and create.

pub mod existence;
pub mod naming;
pub mod publisher;
pub mod wait;
pub mod workflow;

pub use existence::{is_already_published, NameMatcher};
pub use naming::{derive_project_version, image_tag};
pub use publisher::{build_config_map, publish_config};
pub use wait::{await_condition, wait_for_artifact, WaitOutcome};
pub use workflow::{run, RunOutcome};
