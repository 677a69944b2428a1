// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Fixed values injected into the controller resource builders.
//!
//! None of these come from the `PravegaCluster`. They are contractual: the defaults
//! must not change without a matching change in the Pravega controller image.
//! Builders take a [`ControllerSettings`] instead of reading [`crate::constants`]
//! directly so the values stay single-sourced.

use crate::constants::{
    ANTI_AFFINITY_WEIGHT, BASELINE_JVM_OPTS, CGROUP_JVM_OPTS, CGROUP_JVM_OPTS_MIN_VERSION,
    CLUSTER_NAME_PROPERTY, DEFAULT_AUTHORIZATION_ENABLED, DEFAULT_TLS_ENABLED,
    DEFAULT_TOKEN_SIGNING_KEY, DEFAULT_USER_PASSWORD_FILE, GRPC_PORT, GRPC_PORT_NAME,
    HOSTNAME_TOPOLOGY_KEY, LIVENESS_FAILURE_THRESHOLD, LIVENESS_INITIAL_DELAY_SECS,
    LIVENESS_PERIOD_SECS, PDB_MIN_AVAILABLE, READINESS_FAILURE_THRESHOLD, READINESS_PERIOD_SECS,
    REST_PORT, REST_PORT_NAME, TLS_MOUNT_DIR, TLS_VOLUME_NAME,
};

/// A named network port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedPort {
    pub name: String,
    pub port: i32,
}

impl NamedPort {
    #[must_use]
    pub fn new(name: &str, port: i32) -> Self {
        Self {
            name: name.to_string(),
            port,
        }
    }
}

/// Timing of an exec probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeTiming {
    /// `None` leaves the platform default (no delay)
    pub initial_delay_seconds: Option<i32>,
    pub period_seconds: i32,
    pub failure_threshold: i32,
}

/// Static security values exported in the controller `ConfigMap`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityDefaults {
    pub authorization_enabled: String,
    pub token_signing_key: String,
    pub user_password_file: String,
    pub tls_enabled: String,
}

/// JVM flag blocks used to assemble `JAVA_OPTS`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JvmOptions {
    /// Always applied, before anything else
    pub baseline: Vec<String>,
    /// System property set to the cluster name
    pub cluster_name_property: String,
    /// Applied only when the cluster version passes `gated_min_version`
    pub gated: Vec<String>,
    pub gated_min_version: String,
}

/// Everything fixed about a controller deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Status/REST port
    pub rest_port: NamedPort,
    /// Control-plane RPC port, also the health-check target
    pub grpc_port: NamedPort,
    pub readiness: ProbeTiming,
    pub liveness: ProbeTiming,
    pub tls_volume_name: String,
    pub tls_mount_path: String,
    pub security: SecurityDefaults,
    pub jvm: JvmOptions,
    pub anti_affinity_weight: i32,
    pub anti_affinity_topology_key: String,
    pub pdb_min_available: i32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            rest_port: NamedPort::new(REST_PORT_NAME, REST_PORT),
            grpc_port: NamedPort::new(GRPC_PORT_NAME, GRPC_PORT),
            readiness: ProbeTiming {
                initial_delay_seconds: None,
                period_seconds: READINESS_PERIOD_SECS,
                failure_threshold: READINESS_FAILURE_THRESHOLD,
            },
            liveness: ProbeTiming {
                initial_delay_seconds: Some(LIVENESS_INITIAL_DELAY_SECS),
                period_seconds: LIVENESS_PERIOD_SECS,
                failure_threshold: LIVENESS_FAILURE_THRESHOLD,
            },
            tls_volume_name: TLS_VOLUME_NAME.to_string(),
            tls_mount_path: TLS_MOUNT_DIR.to_string(),
            security: SecurityDefaults {
                authorization_enabled: DEFAULT_AUTHORIZATION_ENABLED.to_string(),
                token_signing_key: DEFAULT_TOKEN_SIGNING_KEY.to_string(),
                user_password_file: DEFAULT_USER_PASSWORD_FILE.to_string(),
                tls_enabled: DEFAULT_TLS_ENABLED.to_string(),
            },
            jvm: JvmOptions {
                baseline: BASELINE_JVM_OPTS.iter().map(ToString::to_string).collect(),
                cluster_name_property: CLUSTER_NAME_PROPERTY.to_string(),
                gated: CGROUP_JVM_OPTS.iter().map(ToString::to_string).collect(),
                gated_min_version: CGROUP_JVM_OPTS_MIN_VERSION.to_string(),
            },
            anti_affinity_weight: ANTI_AFFINITY_WEIGHT,
            anti_affinity_topology_key: HOSTNAME_TOPOLOGY_KEY.to_string(),
            pdb_min_available: PDB_MIN_AVAILABLE,
        }
    }
}

impl ControllerSettings {
    /// Both controller ports, REST first.
    #[must_use]
    pub fn ports(&self) -> [&NamedPort; 2] {
        [&self.rest_port, &self.grpc_port]
    }
}
