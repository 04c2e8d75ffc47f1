// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction and the cluster store capability.

pub mod client;
pub mod store;

pub use client::{create_client, kubeconfig_path};
pub use store::{ClusterStore, CreateOutcome, KubeStore};
