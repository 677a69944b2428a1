// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared `PravegaCluster` fixtures for unit tests

use crate::crd::{PravegaCluster, PravegaClusterSpec, PravegaSpec, TlsSpec};
use k8s_openapi::api::core::v1::ResourceRequirements;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;

pub fn create_test_resources() -> ResourceRequirements {
    let mut requests = BTreeMap::new();
    requests.insert("cpu".to_string(), Quantity("500m".into()));
    requests.insert("memory".to_string(), Quantity("1Gi".into()));

    let mut limits = BTreeMap::new();
    limits.insert("cpu".to_string(), Quantity("1".into()));
    limits.insert("memory".to_string(), Quantity("2Gi".into()));

    ResourceRequirements {
        requests: Some(requests),
        limits: Some(limits),
        ..Default::default()
    }
}

/// A valid cluster named `name` in `test-ns`, version 0.4.0, TLS off, internal access.
pub fn create_test_cluster(name: &str) -> PravegaCluster {
    let mut cluster = PravegaCluster::new(
        name,
        PravegaClusterSpec {
            version: "0.4.0".into(),
            zookeeper_uri: "zk-client:2181".into(),
            tls: None,
            external_access: None,
            pravega: PravegaSpec {
                controller_replicas: 2,
                controller_resources: Some(create_test_resources()),
                ..Default::default()
            },
        },
    );
    cluster.metadata.namespace = Some("test-ns".into());
    cluster
}

pub fn create_tls_cluster(name: &str, secret: &str) -> PravegaCluster {
    let mut cluster = create_test_cluster(name);
    cluster.spec.tls = Some(TlsSpec {
        enabled: true,
        controller_secret: Some(secret.into()),
    });
    cluster
}
