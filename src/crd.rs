// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definition for Pravega clusters.
//!
//! [`PravegaCluster`] is the desired-state descriptor every controller resource is
//! synthesized from. It is owned by the caller and only ever read here.
//!
//! # Example
//!
//! ```rust,no_run
//! use pravega_operator::crd::{PravegaCluster, PravegaClusterSpec, PravegaSpec, TlsSpec};
//!
//! let mut cluster = PravegaCluster::new(
//!     "demo",
//!     PravegaClusterSpec {
//!         version: "0.4.0".to_string(),
//!         zookeeper_uri: "zk-client:2181".to_string(),
//!         tls: Some(TlsSpec {
//!             enabled: true,
//!             controller_secret: Some("controller-tls".to_string()),
//!         }),
//!         external_access: None,
//!         pravega: PravegaSpec::default(),
//!     },
//! );
//! cluster.metadata.namespace = Some("pravega".to_string());
//! ```

use crate::constants::{DEFAULT_IMAGE_PULL_POLICY, DEFAULT_IMAGE_REPOSITORY};
use crate::errors::SynthesisError;
use k8s_openapi::api::core::v1::ResourceRequirements;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// `PravegaCluster` describes one Pravega deployment on Kubernetes.
///
/// # Example
///
/// ```yaml
/// apiVersion: pravega.pravega.io/v1alpha1
/// kind: PravegaCluster
/// metadata:
///   name: demo
///   namespace: pravega
/// spec:
///   version: "0.4.0"
///   zookeeperUri: zk-client:2181
///   externalAccess:
///     enabled: true
///     type: LoadBalancer
///   pravega:
///     controllerReplicas: 2
///     controllerResources:
///       requests:
///         cpu: 500m
///         memory: 1Gi
///     options:
///       controller.retention.frequencyMinutes: "10"
/// ```
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "pravega.pravega.io",
    version = "v1alpha1",
    kind = "PravegaCluster",
    namespaced,
    shortname = "pk",
    derive = "PartialEq",
    doc = "PravegaCluster describes a Pravega deployment. The operator synthesizes the controller Deployment, ConfigMap, Service and PodDisruptionBudget from it."
)]
#[kube(status = "PravegaClusterStatus")]
#[serde(rename_all = "camelCase")]
pub struct PravegaClusterSpec {
    /// Pravega version. Selects the image tag (unless overridden) and version-gated
    /// JVM options.
    ///
    /// Example: "0.4.0"
    pub version: String,

    /// Zookeeper connection string, e.g. `zk-client:2181`.
    ///
    /// The controller connects to it and waits for it before starting.
    pub zookeeper_uri: String,

    /// TLS configuration for the controller.
    #[serde(default)]
    pub tls: Option<TlsSpec>,

    /// External access configuration for the controller service.
    #[serde(default)]
    pub external_access: Option<ExternalAccess>,

    /// Pravega component configuration.
    #[serde(default)]
    pub pravega: PravegaSpec,
}

impl PravegaCluster {
    /// Returns the cluster name.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::MissingField`] if `metadata.name` is unset or empty
    pub fn cluster_name(&self) -> Result<&str, SynthesisError> {
        self.metadata
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| SynthesisError::MissingField {
                cluster: "<unnamed>".to_string(),
                field: "metadata.name",
            })
    }

    /// Returns the cluster namespace.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::MissingField`] if `metadata.namespace` is unset or empty
    pub fn cluster_namespace(&self) -> Result<&str, SynthesisError> {
        let name = self.cluster_name()?;
        self.metadata
            .namespace
            .as_deref()
            .filter(|namespace| !namespace.is_empty())
            .ok_or_else(|| SynthesisError::MissingField {
                cluster: name.to_string(),
                field: "metadata.namespace",
            })
    }

    /// Returns the external Service type if external access is enabled.
    #[must_use]
    pub fn external_service_type(&self) -> Option<ServiceType> {
        self.spec
            .external_access
            .as_ref()
            .filter(|access| access.enabled)
            .map(|access| access.type_.unwrap_or(ServiceType::LoadBalancer))
    }
}

/// TLS settings for the controller.
#[derive(Clone, Debug, Serialize, Deserialize, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TlsSpec {
    /// Run the controller with TLS material mounted.
    #[serde(default)]
    pub enabled: bool,

    /// Name of the Secret holding the controller certificate and key.
    ///
    /// Required when `enabled` is true.
    #[serde(default)]
    pub controller_secret: Option<String>,
}

impl TlsSpec {
    /// Returns the controller secret when TLS is enabled and a non-empty secret is set.
    #[must_use]
    pub fn controller_secret_name(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.controller_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
    }
}

/// External access settings for the controller service.
#[derive(Clone, Debug, Serialize, Deserialize, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAccess {
    /// Expose the controller outside the cluster.
    #[serde(default)]
    pub enabled: bool,

    /// Service type used when `enabled` is true. Defaults to `LoadBalancer`.
    #[serde(default, rename = "type")]
    pub type_: Option<ServiceType>,
}

/// Kubernetes Service type.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, JsonSchema, PartialEq, Eq)]
pub enum ServiceType {
    /// Reachable only from inside the cluster
    #[default]
    ClusterIP,
    /// Reachable on a port of every node
    NodePort,
    /// Reachable through a cloud load balancer
    LoadBalancer,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::ClusterIP => "ClusterIP",
            Self::NodePort => "NodePort",
            Self::LoadBalancer => "LoadBalancer",
        };
        f.write_str(val)
    }
}

/// Pravega component settings. Only the controller fields are consumed here.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PravegaSpec {
    /// Number of controller replicas.
    ///
    /// Defaults to 1.
    #[serde(default = "default_controller_replicas")]
    #[schemars(range(min = 0, max = 100))]
    pub controller_replicas: i32,

    /// Compute resources for the controller container. Required.
    #[serde(default)]
    pub controller_resources: Option<ResourceRequirements>,

    /// Service account the controller pods run as. Platform default when unset.
    #[serde(default)]
    pub controller_service_account_name: Option<String>,

    /// Container image configuration.
    #[serde(default)]
    pub image: Option<ImageSpec>,

    /// Free-form Pravega options, passed to the JVM as `-D<name>=<value>`.
    ///
    /// Applied in lexicographic order of option name.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl Default for PravegaSpec {
    fn default() -> Self {
        Self {
            controller_replicas: default_controller_replicas(),
            controller_resources: None,
            controller_service_account_name: None,
            image: None,
            options: BTreeMap::new(),
        }
    }
}

fn default_controller_replicas() -> i32 {
    1
}

/// Container image configuration.
#[derive(Clone, Debug, Serialize, Deserialize, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSpec {
    /// Image repository. Defaults to `pravega/pravega`.
    #[serde(default)]
    pub repository: Option<String>,

    /// Image tag. Defaults to the cluster version.
    #[serde(default)]
    pub tag: Option<String>,

    /// Image pull policy. Defaults to `IfNotPresent`.
    #[serde(default)]
    pub pull_policy: Option<String>,
}

impl ImageSpec {
    /// Resolves the image reference as `<repository>:<tag>`.
    #[must_use]
    pub fn reference(&self, version: &str) -> String {
        let repository = self
            .repository
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_IMAGE_REPOSITORY);
        let tag = self
            .tag
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(version);
        format!("{repository}:{tag}")
    }

    /// Resolves the pull policy, falling back to `IfNotPresent`.
    #[must_use]
    pub fn pull_policy(&self) -> String {
        self.pull_policy
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_PULL_POLICY.to_string())
    }
}

/// Condition represents an observation of a resource's current state.
#[derive(Clone, Debug, Serialize, Deserialize, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition, e.g. Ready.
    pub r#type: String,

    /// Status of the condition: True, False, or Unknown.
    pub status: String,

    /// Machine-readable reason for the last transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// RFC3339 timestamp of the last transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// `PravegaCluster` status. Written by the reconciler, never by synthesis.
#[derive(Clone, Debug, Serialize, Deserialize, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PravegaClusterStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_ready_replicas: Option<i32>,
}
