// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `crd`

#[cfg(test)]
mod tests {
    use crate::constants::{API_GROUP, API_GROUP_VERSION, API_VERSION, KIND_PRAVEGA_CLUSTER};
    use crate::crd::*;
    use crate::errors::SynthesisError;
    use crate::test_fixtures::create_test_cluster;
    use kube::{CustomResourceExt, Resource};

    #[test]
    fn test_pravega_cluster_resource_identity() {
        assert_eq!(PravegaCluster::kind(&()), KIND_PRAVEGA_CLUSTER);
        assert_eq!(PravegaCluster::group(&()), API_GROUP);
        assert_eq!(PravegaCluster::version(&()), API_VERSION);
        assert_eq!(PravegaCluster::api_version(&()), API_GROUP_VERSION);
    }

    #[test]
    fn test_crd_is_namespaced() {
        let crd = PravegaCluster::crd();
        assert_eq!(crd.spec.scope, "Namespaced");
        assert_eq!(crd.spec.names.plural, "pravegaclusters");
        assert_eq!(
            crd.spec.names.short_names.unwrap_or_default(),
            vec!["pk".to_string()]
        );
    }

    #[test]
    fn test_pravega_spec_default() {
        let spec = PravegaSpec::default();
        assert_eq!(spec.controller_replicas, 1);
        assert!(spec.controller_resources.is_none());
        assert!(spec.controller_service_account_name.is_none());
        assert!(spec.image.is_none());
        assert!(spec.options.is_empty());
    }

    #[test]
    fn test_spec_deserializes_with_defaults() {
        let spec: PravegaClusterSpec = serde_json::from_value(serde_json::json!({
            "version": "0.4.0",
            "zookeeperUri": "zk-client:2181"
        }))
        .unwrap();

        assert_eq!(spec.pravega.controller_replicas, 1);
        assert!(spec.tls.is_none());
        assert!(spec.external_access.is_none());
    }

    #[test]
    fn test_external_access_type_field_name() {
        let access: ExternalAccess = serde_json::from_value(serde_json::json!({
            "enabled": true,
            "type": "NodePort"
        }))
        .unwrap();
        assert_eq!(access.type_, Some(ServiceType::NodePort));
    }

    #[test]
    fn test_service_type_display() {
        assert_eq!(ServiceType::ClusterIP.to_string(), "ClusterIP");
        assert_eq!(ServiceType::NodePort.to_string(), "NodePort");
        assert_eq!(ServiceType::LoadBalancer.to_string(), "LoadBalancer");
    }

    #[test]
    fn test_tls_controller_secret_name() {
        let mut tls = TlsSpec {
            enabled: true,
            controller_secret: Some("controller-tls".into()),
        };
        assert_eq!(tls.controller_secret_name(), Some("controller-tls"));

        tls.controller_secret = Some(String::new());
        assert_eq!(tls.controller_secret_name(), None);

        tls.enabled = false;
        tls.controller_secret = Some("controller-tls".into());
        assert_eq!(tls.controller_secret_name(), None);
    }

    #[test]
    fn test_image_reference_defaults() {
        let image = ImageSpec::default();
        assert_eq!(image.reference("0.4.0"), "pravega/pravega:0.4.0");
        assert_eq!(image.pull_policy(), "IfNotPresent");

        let image = ImageSpec {
            repository: Some(String::new()),
            tag: Some(String::new()),
            pull_policy: Some(String::new()),
        };
        assert_eq!(image.reference("0.4.0"), "pravega/pravega:0.4.0");
        assert_eq!(image.pull_policy(), "IfNotPresent");
    }

    #[test]
    fn test_cluster_identity_accessors() {
        let cluster = create_test_cluster("demo");
        assert_eq!(cluster.cluster_name(), Ok("demo"));
        assert_eq!(cluster.cluster_namespace(), Ok("test-ns"));
    }

    #[test]
    fn test_empty_name_is_missing() {
        let mut cluster = create_test_cluster("demo");
        cluster.metadata.name = Some(String::new());
        assert_eq!(
            cluster.cluster_name(),
            Err(SynthesisError::MissingField {
                cluster: "<unnamed>".into(),
                field: "metadata.name",
            })
        );
    }

    #[test]
    fn test_external_service_type() {
        let mut cluster = create_test_cluster("demo");
        assert_eq!(cluster.external_service_type(), None);

        cluster.spec.external_access = Some(ExternalAccess {
            enabled: false,
            type_: Some(ServiceType::NodePort),
        });
        assert_eq!(cluster.external_service_type(), None);

        cluster.spec.external_access = Some(ExternalAccess {
            enabled: true,
            type_: None,
        });
        assert_eq!(
            cluster.external_service_type(),
            Some(ServiceType::LoadBalancer)
        );
    }

    #[test]
    fn test_pravega_cluster_status_default() {
        let status = PravegaClusterStatus::default();
        assert!(status.conditions.is_empty());
        assert!(status.observed_generation.is_none());
        assert!(status.controller_ready_replicas.is_none());
    }
}
