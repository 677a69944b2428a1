// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `manifest`

#[cfg(test)]
mod tests {
    use crate::controller_resources::synthesize_controller;
    use crate::manifest::{load_cluster, parse_cluster, render_yaml, DEFAULT_NAMESPACE};
    use crate::test_fixtures::create_test_cluster;
    use std::io::Write;

    const MANIFEST: &str = r#"
apiVersion: pravega.pravega.io/v1alpha1
kind: PravegaCluster
metadata:
  name: demo
  namespace: streaming
spec:
  version: "0.4.0"
  zookeeperUri: zk-client:2181
  externalAccess:
    enabled: true
    type: NodePort
  pravega:
    controllerReplicas: 3
    controllerResources:
      requests:
        cpu: 500m
        memory: 1Gi
    options:
      controller.retention.frequencyMinutes: "10"
"#;

    const MANIFEST_NO_NAMESPACE: &str = r#"
apiVersion: pravega.pravega.io/v1alpha1
kind: PravegaCluster
metadata:
  name: demo
spec:
  version: "0.4.0"
  zookeeperUri: zk-client:2181
"#;

    #[test]
    fn test_parse_cluster_keeps_manifest_namespace() {
        let cluster = parse_cluster(MANIFEST, None).unwrap();

        assert_eq!(cluster.metadata.name.as_deref(), Some("demo"));
        assert_eq!(cluster.metadata.namespace.as_deref(), Some("streaming"));
        assert_eq!(cluster.spec.pravega.controller_replicas, 3);
        assert_eq!(
            cluster.spec.pravega.options["controller.retention.frequencyMinutes"],
            "10"
        );
    }

    #[test]
    fn test_parse_cluster_override_wins() {
        let cluster = parse_cluster(MANIFEST, Some("other")).unwrap();
        assert_eq!(cluster.metadata.namespace.as_deref(), Some("other"));
    }

    #[test]
    fn test_parse_cluster_defaults_namespace() {
        let cluster = parse_cluster(MANIFEST_NO_NAMESPACE, None).unwrap();
        assert_eq!(
            cluster.metadata.namespace.as_deref(),
            Some(DEFAULT_NAMESPACE)
        );
        assert_eq!(cluster.spec.pravega.controller_replicas, 1);
    }

    #[test]
    fn test_parse_cluster_rejects_invalid_yaml() {
        assert!(parse_cluster("spec: [unterminated", None).is_err());
    }

    #[test]
    fn test_parse_cluster_rejects_missing_required_fields() {
        let yaml = r#"
apiVersion: pravega.pravega.io/v1alpha1
kind: PravegaCluster
metadata:
  name: demo
spec:
  version: "0.4.0"
"#;
        let err = parse_cluster(yaml, None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse PravegaCluster manifest"));
    }

    #[test]
    fn test_load_cluster_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();

        let cluster = load_cluster(file.path(), None).unwrap();
        assert_eq!(cluster.metadata.name.as_deref(), Some("demo"));
    }

    #[test]
    fn test_load_cluster_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = load_cluster(&path, None).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }

    #[test]
    fn test_render_yaml_document_order() {
        let resources = synthesize_controller(&create_test_cluster("demo")).unwrap();
        let yaml = render_yaml(&resources).unwrap();

        let documents: Vec<&str> = yaml.split("---\n").collect();
        assert_eq!(documents.len(), 4);
        assert!(documents[0].contains("kind: ConfigMap"));
        assert!(documents[1].contains("kind: Service"));
        assert!(documents[2].contains("kind: Deployment"));
        assert!(documents[3].contains("kind: PodDisruptionBudget"));
    }

    #[test]
    fn test_render_yaml_is_stable() {
        let resources = synthesize_controller(&create_test_cluster("demo")).unwrap();
        assert_eq!(
            render_yaml(&resources).unwrap(),
            render_yaml(&resources).unwrap()
        );
    }
}
