// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pravega controller Kubernetes resource builders
//!
//! This module builds the Kubernetes resources (`Deployment`, `ConfigMap`, `Service`,
//! `PodDisruptionBudget`) for the controller of a `PravegaCluster`. All functions are
//! pure: the same cluster always yields the same resources, and each builder may be
//! called independently, in any order or concurrently.
//!
//! Every resource carries the label set from [`crate::naming::build_component_labels`],
//! and every selector matches exactly that set.
//!
//! # Example
//!
//! ```rust,no_run
//! use pravega_operator::controller_resources::synthesize_controller;
//! use pravega_operator::crd::PravegaCluster;
//!
//! # fn example(cluster: PravegaCluster) -> Result<(), pravega_operator::errors::SynthesisError> {
//! let resources = synthesize_controller(&cluster)?;
//! assert_eq!(resources.deployment.metadata.name, resources.service.metadata.name);
//! # Ok(())
//! # }
//! ```

use crate::controller_config::build_config_data;
use crate::controller_pod::build_controller_pod_template;
use crate::crd::{PravegaCluster, ServiceType};
use crate::errors::SynthesisError;
use crate::labels::COMPONENT_CONTROLLER;
use crate::naming::{
    build_component_labels, build_component_metadata, build_component_selector,
};
use crate::settings::ControllerSettings;
use k8s_openapi::api::{
    apps::v1::{Deployment, DeploymentSpec},
    core::v1::{ConfigMap, Service, ServicePort, ServiceSpec},
    policy::v1::{PodDisruptionBudget, PodDisruptionBudgetSpec},
};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use tracing::debug;

/// The complete set of resources for one controller.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerResources {
    pub config_map: ConfigMap,
    pub service: Service,
    pub deployment: Deployment,
    pub pod_disruption_budget: PodDisruptionBudget,
}

/// Builds the controller `Deployment`.
///
/// The replica count is taken verbatim from `spec.pravega.controllerReplicas`.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if the name, namespace, controller resources,
/// or an enabled TLS secret is missing
pub fn build_controller_deployment(
    cluster: &PravegaCluster,
    settings: &ControllerSettings,
) -> Result<Deployment, SynthesisError> {
    let cluster_name = cluster.cluster_name()?;
    let namespace = cluster.cluster_namespace()?;
    let replicas = cluster.spec.pravega.controller_replicas;

    debug!(
        cluster_name = %cluster_name,
        namespace = %namespace,
        replicas,
        "Building controller Deployment"
    );

    Ok(Deployment {
        metadata: build_component_metadata(cluster_name, namespace, COMPONENT_CONTROLLER),
        spec: Some(DeploymentSpec {
            replicas: Some(replicas),
            selector: build_component_selector(cluster_name, COMPONENT_CONTROLLER),
            template: build_controller_pod_template(cluster, settings)?,
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Builds the controller `ConfigMap`, exported to the container as environment.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if the name or namespace is missing
pub fn build_controller_configmap(
    cluster: &PravegaCluster,
    settings: &ControllerSettings,
) -> Result<ConfigMap, SynthesisError> {
    let cluster_name = cluster.cluster_name()?;
    let namespace = cluster.cluster_namespace()?;

    debug!(
        cluster_name = %cluster_name,
        namespace = %namespace,
        "Building controller ConfigMap"
    );

    Ok(ConfigMap {
        metadata: build_component_metadata(cluster_name, namespace, COMPONENT_CONTROLLER),
        data: Some(build_config_data(cluster_name, &cluster.spec, settings)),
        ..Default::default()
    })
}

/// Builds the controller `Service`.
///
/// The Service is `ClusterIP` unless external access is enabled, in which case the
/// requested type is used. The type in `externalAccess` is ignored while access is
/// disabled. Both controller ports are always published.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if the name or namespace is missing
pub fn build_controller_service(
    cluster: &PravegaCluster,
    settings: &ControllerSettings,
) -> Result<Service, SynthesisError> {
    let cluster_name = cluster.cluster_name()?;
    let namespace = cluster.cluster_namespace()?;
    let service_type = cluster
        .external_service_type()
        .unwrap_or(ServiceType::ClusterIP);

    debug!(
        cluster_name = %cluster_name,
        namespace = %namespace,
        service_type = %service_type,
        "Building controller Service"
    );

    Ok(Service {
        metadata: build_component_metadata(cluster_name, namespace, COMPONENT_CONTROLLER),
        spec: Some(ServiceSpec {
            type_: Some(service_type.to_string()),
            ports: Some(
                settings
                    .ports()
                    .iter()
                    .map(|p| ServicePort {
                        name: Some(p.name.clone()),
                        port: p.port,
                        ..Default::default()
                    })
                    .collect(),
            ),
            selector: Some(build_component_labels(cluster_name, COMPONENT_CONTROLLER)),
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Builds the controller `PodDisruptionBudget`.
///
/// At least one controller pod must stay available during voluntary disruption,
/// whatever the replica count.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingField`] if the name or namespace is missing
pub fn build_controller_pod_disruption_budget(
    cluster: &PravegaCluster,
    settings: &ControllerSettings,
) -> Result<PodDisruptionBudget, SynthesisError> {
    let cluster_name = cluster.cluster_name()?;
    let namespace = cluster.cluster_namespace()?;

    debug!(
        cluster_name = %cluster_name,
        namespace = %namespace,
        min_available = settings.pdb_min_available,
        "Building controller PodDisruptionBudget"
    );

    Ok(PodDisruptionBudget {
        metadata: build_component_metadata(cluster_name, namespace, COMPONENT_CONTROLLER),
        spec: Some(PodDisruptionBudgetSpec {
            min_available: Some(IntOrString::Int(settings.pdb_min_available)),
            selector: Some(build_component_selector(cluster_name, COMPONENT_CONTROLLER)),
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Builds all controller resources with injected settings.
///
/// Fails as a whole: if any resource cannot be built, none is returned.
///
/// # Errors
///
/// Returns the first [`SynthesisError`] raised by any builder
pub fn synthesize_controller_with(
    cluster: &PravegaCluster,
    settings: &ControllerSettings,
) -> Result<ControllerResources, SynthesisError> {
    Ok(ControllerResources {
        config_map: build_controller_configmap(cluster, settings)?,
        service: build_controller_service(cluster, settings)?,
        deployment: build_controller_deployment(cluster, settings)?,
        pod_disruption_budget: build_controller_pod_disruption_budget(cluster, settings)?,
    })
}

/// Builds all controller resources with the default [`ControllerSettings`].
///
/// # Errors
///
/// Returns the first [`SynthesisError`] raised by any builder
pub fn synthesize_controller(cluster: &PravegaCluster) -> Result<ControllerResources, SynthesisError> {
    synthesize_controller_with(cluster, &ControllerSettings::default())
}
