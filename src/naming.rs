// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resource names and label sets for one cluster component.
//!
//! Everything here is a pure function of the cluster name and the component role, so
//! the same descriptor always yields the same names, labels and selectors.

use crate::labels::{
    APP_LABEL, APP_NAME_PRAVEGA, APP_PRAVEGA_CLUSTER, COMPONENT_LABEL, K8S_COMPONENT, K8S_INSTANCE,
    K8S_MANAGED_BY, K8S_NAME, K8S_PART_OF, MANAGED_BY_PRAVEGA_OPERATOR, PART_OF_PRAVEGA,
    PRAVEGA_CLUSTER_LABEL,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use std::collections::BTreeMap;

/// Builds the name shared by every resource of a component, e.g. `demo-pravega-controller`.
///
/// Different kinds may share a name, so the result is unique per kind within a namespace.
#[must_use]
pub fn component_resource_name(cluster_name: &str, role: &str) -> String {
    format!("{cluster_name}-{role}")
}

/// Builds standardized labels for the resources of one cluster component.
///
/// # Arguments
///
/// * `cluster_name` - Name of the `PravegaCluster` resource
/// * `role` - Component role, e.g. [`crate::labels::COMPONENT_CONTROLLER`]
///
/// # Returns
///
/// A `BTreeMap` of label key-value pairs
#[must_use]
pub fn build_component_labels(cluster_name: &str, role: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(APP_LABEL.into(), APP_PRAVEGA_CLUSTER.into());
    labels.insert(PRAVEGA_CLUSTER_LABEL.into(), cluster_name.into());
    labels.insert(COMPONENT_LABEL.into(), role.into());
    labels.insert(K8S_NAME.into(), APP_NAME_PRAVEGA.into());
    labels.insert(K8S_INSTANCE.into(), cluster_name.into());
    labels.insert(K8S_COMPONENT.into(), role.into());
    labels.insert(K8S_MANAGED_BY.into(), MANAGED_BY_PRAVEGA_OPERATOR.into());
    labels.insert(K8S_PART_OF.into(), PART_OF_PRAVEGA.into());
    labels
}

/// Builds a selector matching exactly the labels of [`build_component_labels`].
#[must_use]
pub fn build_component_selector(cluster_name: &str, role: &str) -> LabelSelector {
    LabelSelector {
        match_labels: Some(build_component_labels(cluster_name, role)),
        ..Default::default()
    }
}

/// Builds the identity metadata (name, namespace, labels) of a component resource.
#[must_use]
pub fn build_component_metadata(cluster_name: &str, namespace: &str, role: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(component_resource_name(cluster_name, role)),
        namespace: Some(namespace.into()),
        labels: Some(build_component_labels(cluster_name, role)),
        ..Default::default()
    }
}
