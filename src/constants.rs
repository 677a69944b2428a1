// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Pravega operator.
//!
//! This module contains all numeric and string constants used when synthesizing
//! controller resources. Constants are organized by category for easy maintenance.
//! Builders never read these directly; they go through [`crate::settings::ControllerSettings`].

// ============================================================================
// API Constants
// ============================================================================

/// API group for the Pravega CRDs
pub const API_GROUP: &str = "pravega.pravega.io";

/// API version for the Pravega CRDs
pub const API_VERSION: &str = "v1alpha1";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "pravega.pravega.io/v1alpha1";

/// Kind name for `PravegaCluster` resource
pub const KIND_PRAVEGA_CLUSTER: &str = "PravegaCluster";

// ============================================================================
// Controller Network Constants
// ============================================================================

/// Port name for the controller REST (status) server
pub const REST_PORT_NAME: &str = "rest";

/// Controller REST (status) server port
pub const REST_PORT: i32 = 10080;

/// Port name for the controller gRPC (control-plane RPC) server
pub const GRPC_PORT_NAME: &str = "grpc";

/// Controller gRPC (control-plane RPC) server port
pub const GRPC_PORT: i32 = 9090;

// ============================================================================
// Controller Container Constants
// ============================================================================

/// Name of the controller container
pub const CONTAINER_NAME_CONTROLLER: &str = "pravega-controller";

/// Single argument passed to the Pravega entrypoint to run the controller
pub const CONTROLLER_RUN_MODE_ARG: &str = "controller";

/// Default image repository when the cluster does not set one
pub const DEFAULT_IMAGE_REPOSITORY: &str = "pravega/pravega";

/// Default image pull policy
pub const DEFAULT_IMAGE_PULL_POLICY: &str = "IfNotPresent";

/// Pod template annotation carrying the Pravega version
pub const VERSION_ANNOTATION: &str = "pravega.version";

// ============================================================================
// Kubernetes Health Check Constants
// ============================================================================

/// Readiness probe period. Controller pods start fast.
pub const READINESS_PERIOD_SECS: i32 = 5;

/// Readiness probe failure threshold (5s * 12 = up to 1 minute to become ready)
pub const READINESS_FAILURE_THRESHOLD: i32 = 12;

/// Liveness probe initial delay, the maximum time a pod can take to become ready
pub const LIVENESS_INITIAL_DELAY_SECS: i32 = 60;

/// Liveness probe period
pub const LIVENESS_PERIOD_SECS: i32 = 15;

/// Liveness probe failure threshold (1 minute of failures before restart)
pub const LIVENESS_FAILURE_THRESHOLD: i32 = 4;

// ============================================================================
// Scheduling Constants
// ============================================================================

/// Weight of the preferred pod anti-affinity term
pub const ANTI_AFFINITY_WEIGHT: i32 = 100;

/// Topology key used to spread controller pods across hosts
pub const HOSTNAME_TOPOLOGY_KEY: &str = "kubernetes.io/hostname";

/// Minimum available controller pods during voluntary disruption
pub const PDB_MIN_AVAILABLE: i32 = 1;

// ============================================================================
// TLS Constants
// ============================================================================

/// Name of the volume carrying the controller TLS secret
pub const TLS_VOLUME_NAME: &str = "tls-secret";

/// Mount path of the controller TLS secret
pub const TLS_MOUNT_DIR: &str = "/etc/secret-volume";

// ============================================================================
// ConfigMap Keys
// ============================================================================

pub const CONFIG_KEY_CLUSTER_NAME: &str = "CLUSTER_NAME";
pub const CONFIG_KEY_ZK_URL: &str = "ZK_URL";
pub const CONFIG_KEY_JAVA_OPTS: &str = "JAVA_OPTS";
pub const CONFIG_KEY_REST_SERVER_PORT: &str = "REST_SERVER_PORT";
pub const CONFIG_KEY_CONTROLLER_SERVER_PORT: &str = "CONTROLLER_SERVER_PORT";
pub const CONFIG_KEY_AUTHORIZATION_ENABLED: &str = "AUTHORIZATION_ENABLED";
pub const CONFIG_KEY_TOKEN_SIGNING_KEY: &str = "TOKEN_SIGNING_KEY";
pub const CONFIG_KEY_USER_PASSWORD_FILE: &str = "USER_PASSWORD_FILE";
pub const CONFIG_KEY_TLS_ENABLED: &str = "TLS_ENABLED";
pub const CONFIG_KEY_WAIT_FOR: &str = "WAIT_FOR";

// ============================================================================
// Security Defaults
// ============================================================================

/// Authorization is not wired yet; the controller always runs with it disabled
pub const DEFAULT_AUTHORIZATION_ENABLED: &str = "false";

/// Placeholder token signing key
pub const DEFAULT_TOKEN_SIGNING_KEY: &str = "secret";

/// Credential file read by the controller when authorization is on
pub const DEFAULT_USER_PASSWORD_FILE: &str = "/etc/pravega/conf/passwd";

/// TLS flag exported to the controller process
pub const DEFAULT_TLS_ENABLED: &str = "false";

// ============================================================================
// JVM Options
// ============================================================================

/// Flags every controller JVM starts with
pub const BASELINE_JVM_OPTS: &[&str] = &[
    "-Xms512m",
    "-XX:+ExitOnOutOfMemoryError",
    "-XX:+CrashOnOutOfMemoryError",
    "-XX:+HeapDumpOnOutOfMemoryError",
];

/// System property tagging the JVM with the cluster name
pub const CLUSTER_NAME_PROPERTY: &str = "pravegaservice.clusterName";

/// Pravega releases from this version on ship a JVM that understands [`CGROUP_JVM_OPTS`]
pub const CGROUP_JVM_OPTS_MIN_VERSION: &str = "0.4.0";

/// Container memory-limit flags, rejected by the JVM of Pravega < 0.4
pub const CGROUP_JVM_OPTS: &[&str] = &[
    "-XX:+UnlockExperimentalVMOptions",
    "-XX:+UseCGroupMemoryLimitForHeap",
    "-XX:MaxRAMFraction=2",
];
