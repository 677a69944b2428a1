// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reading `PravegaCluster` manifests and writing rendered resources as YAML.

use crate::controller_resources::ControllerResources;
use crate::crd::PravegaCluster;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Namespace used when neither the manifest nor the caller sets one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Parses a `PravegaCluster` from YAML.
///
/// `namespace_override` wins over `metadata.namespace`; when both are absent the
/// cluster is placed in [`DEFAULT_NAMESPACE`].
///
/// # Errors
///
/// Returns an error if the YAML is not a valid `PravegaCluster`
pub fn parse_cluster(yaml: &str, namespace_override: Option<&str>) -> Result<PravegaCluster> {
    let mut cluster: PravegaCluster =
        serde_yaml::from_str(yaml).context("Failed to parse PravegaCluster manifest")?;

    if let Some(namespace) = namespace_override {
        cluster.metadata.namespace = Some(namespace.to_string());
    } else if cluster.metadata.namespace.is_none() {
        cluster.metadata.namespace = Some(DEFAULT_NAMESPACE.to_string());
    }

    debug!(
        name = ?cluster.metadata.name,
        namespace = ?cluster.metadata.namespace,
        "Loaded PravegaCluster manifest"
    );

    Ok(cluster)
}

/// Reads and parses a `PravegaCluster` manifest file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_cluster(path: &Path, namespace_override: Option<&str>) -> Result<PravegaCluster> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    parse_cluster(&yaml, namespace_override)
        .with_context(|| format!("Invalid manifest {}", path.display()))
}

/// Renders the resources as a multi-document YAML stream.
///
/// Documents are emitted in apply order: `ConfigMap`, `Service`, `Deployment`,
/// `PodDisruptionBudget`.
///
/// # Errors
///
/// Returns an error if a resource fails to serialize
pub fn render_yaml(resources: &ControllerResources) -> Result<String> {
    let documents = [
        serde_yaml::to_string(&resources.config_map)?,
        serde_yaml::to_string(&resources.service)?,
        serde_yaml::to_string(&resources.deployment)?,
        serde_yaml::to_string(&resources.pod_disruption_budget)?,
    ];
    Ok(documents.join("---\n"))
}
