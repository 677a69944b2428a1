// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#![allow(unexpected_cfgs)]

//! # Pravega Operator - controller resource synthesis
//!
//! Turns a `PravegaCluster` custom resource into the Kubernetes resources that run the
//! Pravega controller: a `Deployment`, a `ConfigMap`, a `Service` and a
//! `PodDisruptionBudget`.
//!
//! ## Overview
//!
//! Synthesis is deterministic and side-effect free. It produces desired state only;
//! applying it to a cluster and reconciling drift belong to the caller.
//!
//! ## Modules
//!
//! - [`crd`] - The `PravegaCluster` custom resource
//! - [`naming`] - Resource names, labels and selectors
//! - [`version`] - Version comparison for version-gated settings
//! - [`controller_config`] - Controller configuration data and `JAVA_OPTS`
//! - [`controller_pod`] - Controller pod template
//! - [`controller_resources`] - Controller resource builders
//! - [`manifest`] - YAML input and output
//!
//! ## Example
//!
//! ```rust,no_run
//! use pravega_operator::controller_resources::synthesize_controller;
//! use pravega_operator::manifest::{parse_cluster, render_yaml};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cluster = parse_cluster(
//!     r#"
//! apiVersion: pravega.pravega.io/v1alpha1
//! kind: PravegaCluster
//! metadata:
//!   name: demo
//! spec:
//!   version: "0.4.0"
//!   zookeeperUri: zk-client:2181
//!   pravega:
//!     controllerResources:
//!       requests:
//!         memory: 1Gi
//! "#,
//!     Some("pravega"),
//! )?;
//!
//! let resources = synthesize_controller(&cluster)?;
//! println!("{}", render_yaml(&resources)?);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod controller_config;
pub mod controller_pod;
pub mod controller_resources;
pub mod crd;
pub mod errors;
pub mod labels;
pub mod manifest;
pub mod naming;
pub mod settings;
pub mod version;

#[cfg(test)]
mod crd_tests;
#[cfg(test)]
mod manifest_tests;
#[cfg(test)]
mod test_fixtures;
#[cfg(test)]
mod version_tests;
