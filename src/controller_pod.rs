// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Controller pod template builders
//!
//! The pod spec is assembled in steps that each take the previous value by move and
//! return the next one: the base spec from [`build_controller_pod_spec_base`], then the
//! optional TLS step [`with_controller_tls`]. Nothing is shared between calls.

use crate::constants::{CONTAINER_NAME_CONTROLLER, CONTROLLER_RUN_MODE_ARG, VERSION_ANNOTATION};
use crate::crd::{ImageSpec, PravegaCluster, PravegaClusterSpec, TlsSpec};
use crate::errors::SynthesisError;
use crate::labels::{COMPONENT_CONTROLLER, COMPONENT_LABEL, PRAVEGA_CLUSTER_LABEL};
use crate::naming::{build_component_labels, component_resource_name};
use crate::settings::{ControllerSettings, ProbeTiming};
use k8s_openapi::api::core::v1::{
    Affinity, ConfigMapEnvSource, Container, ContainerPort, EnvFromSource, ExecAction,
    PodAffinityTerm, PodAntiAffinity, PodSpec, PodTemplateSpec, Probe, ResourceRequirements,
    SecretVolumeSource, Volume, VolumeMount, WeightedPodAffinityTerm,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    LabelSelector, LabelSelectorRequirement, ObjectMeta,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Health-check command run by both probes: succeeds when something listens on `port`.
#[must_use]
pub fn healthcheck_command(port: i32) -> Vec<String> {
    vec![
        "/bin/sh".into(),
        "-c".into(),
        format!("netstat -ltn 2> /dev/null | grep {port} || ss -ltn 2> /dev/null | grep {port}"),
    ]
}

fn build_exec_probe(port: i32, timing: ProbeTiming) -> Probe {
    Probe {
        exec: Some(ExecAction {
            command: Some(healthcheck_command(port)),
        }),
        initial_delay_seconds: timing.initial_delay_seconds,
        period_seconds: Some(timing.period_seconds),
        failure_threshold: Some(timing.failure_threshold),
        ..Default::default()
    }
}

/// Builds a preferred anti-affinity keeping pods of one component of one cluster on
/// different hosts.
///
/// # Arguments
///
/// * `role` - Component role, matched against the `component` label
/// * `cluster_name` - Cluster name, matched against the `pravega_cluster` label
/// * `settings` - Weight and topology key
#[must_use]
pub fn build_pod_anti_affinity(
    role: &str,
    cluster_name: &str,
    settings: &ControllerSettings,
) -> Affinity {
    let requirement = |key: &str, value: &str| LabelSelectorRequirement {
        key: key.into(),
        operator: "In".into(),
        values: Some(vec![value.into()]),
    };

    Affinity {
        pod_anti_affinity: Some(PodAntiAffinity {
            preferred_during_scheduling_ignored_during_execution: Some(vec![
                WeightedPodAffinityTerm {
                    weight: settings.anti_affinity_weight,
                    pod_affinity_term: PodAffinityTerm {
                        label_selector: Some(LabelSelector {
                            match_expressions: Some(vec![
                                requirement(COMPONENT_LABEL, role),
                                requirement(PRAVEGA_CLUSTER_LABEL, cluster_name),
                            ]),
                            ..Default::default()
                        }),
                        topology_key: settings.anti_affinity_topology_key.clone(),
                        ..Default::default()
                    },
                },
            ]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Builds the controller container.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if `spec.pravega.controllerResources` is unset
pub fn build_controller_container(
    cluster_name: &str,
    spec: &PravegaClusterSpec,
    settings: &ControllerSettings,
) -> Result<Container, SynthesisError> {
    let resources = spec
        .pravega
        .controller_resources
        .clone()
        .ok_or_else(|| SynthesisError::MissingField {
            cluster: cluster_name.to_string(),
            field: "spec.pravega.controllerResources",
        })?;

    let image = spec.pravega.image.clone().unwrap_or_default();
    let image_ref = image.reference(&spec.version);
    debug!(image = %image_ref, "Controller container image");

    Ok(build_container(cluster_name, &image, image_ref, resources, settings))
}

fn build_container(
    cluster_name: &str,
    image: &ImageSpec,
    image_ref: String,
    resources: ResourceRequirements,
    settings: &ControllerSettings,
) -> Container {
    let health_port = settings.grpc_port.port;

    Container {
        name: CONTAINER_NAME_CONTROLLER.into(),
        image: Some(image_ref),
        image_pull_policy: Some(image.pull_policy()),
        args: Some(vec![CONTROLLER_RUN_MODE_ARG.into()]),
        ports: Some(
            settings
                .ports()
                .iter()
                .map(|p| ContainerPort {
                    name: Some(p.name.clone()),
                    container_port: p.port,
                    ..Default::default()
                })
                .collect(),
        ),
        env_from: Some(vec![EnvFromSource {
            config_map_ref: Some(ConfigMapEnvSource {
                name: component_resource_name(cluster_name, COMPONENT_CONTROLLER),
                ..Default::default()
            }),
            ..Default::default()
        }]),
        resources: Some(resources),
        readiness_probe: Some(build_exec_probe(health_port, settings.readiness)),
        liveness_probe: Some(build_exec_probe(health_port, settings.liveness)),
        ..Default::default()
    }
}

/// Builds the controller pod spec without TLS material.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if the container cannot be built
pub fn build_controller_pod_spec_base(
    cluster_name: &str,
    spec: &PravegaClusterSpec,
    settings: &ControllerSettings,
) -> Result<PodSpec, SynthesisError> {
    let container = build_controller_container(cluster_name, spec, settings)?;

    let service_account_name = spec
        .pravega
        .controller_service_account_name
        .clone()
        .filter(|sa| !sa.is_empty());

    Ok(PodSpec {
        containers: vec![container],
        affinity: Some(build_pod_anti_affinity(
            COMPONENT_CONTROLLER,
            cluster_name,
            settings,
        )),
        service_account_name,
        ..Default::default()
    })
}

/// Adds the controller TLS secret volume and mount when TLS is enabled.
///
/// The volume is appended to the pod and mounted into the first container. With TLS
/// disabled or unset the pod spec is returned unchanged.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if TLS is enabled without a controller secret
pub fn with_controller_tls(
    mut pod_spec: PodSpec,
    cluster_name: &str,
    tls: Option<&TlsSpec>,
    settings: &ControllerSettings,
) -> Result<PodSpec, SynthesisError> {
    let Some(tls) = tls.filter(|tls| tls.enabled) else {
        return Ok(pod_spec);
    };

    let secret_name = tls
        .controller_secret_name()
        .ok_or_else(|| SynthesisError::MissingField {
            cluster: cluster_name.to_string(),
            field: "spec.tls.controllerSecret",
        })?;

    debug!(
        secret = %secret_name,
        mount_path = %settings.tls_mount_path,
        "Mounting controller TLS secret"
    );

    pod_spec.volumes.get_or_insert_with(Vec::new).push(Volume {
        name: settings.tls_volume_name.clone(),
        secret: Some(SecretVolumeSource {
            secret_name: Some(secret_name.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    });

    if let Some(container) = pod_spec.containers.first_mut() {
        container
            .volume_mounts
            .get_or_insert_with(Vec::new)
            .push(VolumeMount {
                name: settings.tls_volume_name.clone(),
                mount_path: settings.tls_mount_path.clone(),
                ..Default::default()
            });
    }

    Ok(pod_spec)
}

/// Builds the complete controller pod spec, TLS included.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] for a missing name, resources or TLS secret
pub fn build_controller_pod_spec(
    cluster: &PravegaCluster,
    settings: &ControllerSettings,
) -> Result<PodSpec, SynthesisError> {
    let cluster_name = cluster.cluster_name()?;
    let base = build_controller_pod_spec_base(cluster_name, &cluster.spec, settings)?;
    with_controller_tls(base, cluster_name, cluster.spec.tls.as_ref(), settings)
}

/// Builds the controller pod template: labels, version annotation and pod spec.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if the pod spec cannot be built
pub fn build_controller_pod_template(
    cluster: &PravegaCluster,
    settings: &ControllerSettings,
) -> Result<PodTemplateSpec, SynthesisError> {
    let cluster_name = cluster.cluster_name()?;
    debug!(cluster_name = %cluster_name, "Building controller pod template");

    let mut annotations = BTreeMap::new();
    annotations.insert(VERSION_ANNOTATION.to_string(), cluster.spec.version.clone());

    Ok(PodTemplateSpec {
        metadata: Some(ObjectMeta {
            labels: Some(build_component_labels(cluster_name, COMPONENT_CONTROLLER)),
            annotations: Some(annotations),
            ..Default::default()
        }),
        spec: Some(build_controller_pod_spec(cluster, settings)?),
    })
}
