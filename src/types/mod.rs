// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Identity and target types flowing through a publish run.

pub mod identity;
pub mod target;

pub use identity::{ContainerRef, PodIdentity};
pub use target::{ConfigTarget, ProjectVersion};
