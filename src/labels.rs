// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Common label constants used across all synthesized resources.
//!
//! This module defines the standard Kubernetes labels and the Pravega-specific labels
//! that tie every object of one cluster component together under a single selector.

// ============================================================================
// Kubernetes Standard Labels
// https://kubernetes.io/docs/concepts/overview/working-with-objects/common-labels/
// ============================================================================

/// Standard label for the component name within the architecture (e.g., "pravega-controller")
pub const K8S_COMPONENT: &str = "app.kubernetes.io/component";

/// Standard label for the tool being used to manage the operation of an application
pub const K8S_MANAGED_BY: &str = "app.kubernetes.io/managed-by";

/// Standard label for the name of the application (e.g., "pravega")
pub const K8S_NAME: &str = "app.kubernetes.io/name";

/// Standard label for a unique name identifying the instance of an application
pub const K8S_INSTANCE: &str = "app.kubernetes.io/instance";

/// Standard label for the name of a higher-level application this one is part of
pub const K8S_PART_OF: &str = "app.kubernetes.io/part-of";

// ============================================================================
// Kubernetes Standard Label Values
// ============================================================================

/// Application name for Pravega workloads
pub const APP_NAME_PRAVEGA: &str = "pravega";

/// Value for `app.kubernetes.io/part-of`
pub const PART_OF_PRAVEGA: &str = "pravega";

/// Value for `app.kubernetes.io/managed-by`
pub const MANAGED_BY_PRAVEGA_OPERATOR: &str = "pravega-operator";

// ============================================================================
// Pravega-Specific Labels
// ============================================================================

/// Label grouping every resource of a Pravega cluster
pub const APP_LABEL: &str = "app";

/// Value of [`APP_LABEL`]
pub const APP_PRAVEGA_CLUSTER: &str = "pravega-cluster";

/// Label carrying the owning `PravegaCluster` name
pub const PRAVEGA_CLUSTER_LABEL: &str = "pravega_cluster";

/// Label carrying the component role
pub const COMPONENT_LABEL: &str = "component";

// ============================================================================
// Component Roles
// ============================================================================

/// Role value for the controller component
pub const COMPONENT_CONTROLLER: &str = "pravega-controller";
