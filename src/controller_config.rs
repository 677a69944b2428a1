// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Controller configuration assembly.
//!
//! Builds the flat key/value data exported to the controller container through its
//! `ConfigMap`, including the `JAVA_OPTS` string.
//!
//! `JAVA_OPTS` is assembled in a fixed order so the resulting string is reproducible:
//! 1. baseline JVM flags
//! 2. `-Dpravegaservice.clusterName=<cluster>`
//! 3. container memory-limit flags, only for Pravega >= 0.4.0
//! 4. one `-D<name>=<value>` per `spec.pravega.options` entry, sorted by option name

use crate::constants::{
    CONFIG_KEY_AUTHORIZATION_ENABLED, CONFIG_KEY_CLUSTER_NAME, CONFIG_KEY_CONTROLLER_SERVER_PORT,
    CONFIG_KEY_JAVA_OPTS, CONFIG_KEY_REST_SERVER_PORT, CONFIG_KEY_TLS_ENABLED,
    CONFIG_KEY_TOKEN_SIGNING_KEY, CONFIG_KEY_USER_PASSWORD_FILE, CONFIG_KEY_WAIT_FOR,
    CONFIG_KEY_ZK_URL,
};
use crate::crd::PravegaClusterSpec;
use crate::settings::ControllerSettings;
use crate::version::{version_gate_applies, VersionOperator};
use std::collections::BTreeMap;
use tracing::debug;

/// Builds the ordered list of JVM flags for the controller.
///
/// # Arguments
///
/// * `cluster_name` - Name of the `PravegaCluster`
/// * `spec` - Cluster spec providing the version and free-form options
/// * `settings` - Fixed JVM flag blocks
///
/// # Returns
///
/// The flags in the order they appear in `JAVA_OPTS`
#[must_use]
pub fn build_java_opts(
    cluster_name: &str,
    spec: &PravegaClusterSpec,
    settings: &ControllerSettings,
) -> Vec<String> {
    let jvm = &settings.jvm;

    let mut java_opts = jvm.baseline.clone();
    java_opts.push(format!("-D{}={cluster_name}", jvm.cluster_name_property));

    let gated = version_gate_applies(
        &spec.version,
        &jvm.gated_min_version,
        VersionOperator::GreaterOrEqual,
    );
    debug!(
        version = %spec.version,
        threshold = %jvm.gated_min_version,
        gated,
        "Evaluated version-gated JVM options"
    );
    if gated {
        java_opts.extend(jvm.gated.iter().cloned());
    }

    // BTreeMap iterates in option-name order
    java_opts.extend(
        spec.pravega
            .options
            .iter()
            .map(|(name, value)| format!("-D{name}={value}")),
    );

    java_opts
}

/// Builds the controller configuration data.
///
/// The key set is always the same; only the cluster name, the Zookeeper address and
/// `JAVA_OPTS` depend on the cluster. The security entries are static defaults.
///
/// # Arguments
///
/// * `cluster_name` - Name of the `PravegaCluster`
/// * `spec` - Cluster spec
/// * `settings` - Ports and security defaults
///
/// # Returns
///
/// A `BTreeMap` suitable for `ConfigMap.data`
#[must_use]
pub fn build_config_data(
    cluster_name: &str,
    spec: &PravegaClusterSpec,
    settings: &ControllerSettings,
) -> BTreeMap<String, String> {
    debug!(
        cluster_name = %cluster_name,
        option_count = spec.pravega.options.len(),
        "Building controller configuration data"
    );

    let java_opts = build_java_opts(cluster_name, spec, settings).join(" ");
    let security = &settings.security;

    let mut data = BTreeMap::new();
    data.insert(CONFIG_KEY_CLUSTER_NAME.into(), cluster_name.into());
    data.insert(CONFIG_KEY_ZK_URL.into(), spec.zookeeper_uri.clone());
    data.insert(CONFIG_KEY_JAVA_OPTS.into(), java_opts);
    data.insert(
        CONFIG_KEY_REST_SERVER_PORT.into(),
        settings.rest_port.port.to_string(),
    );
    data.insert(
        CONFIG_KEY_CONTROLLER_SERVER_PORT.into(),
        settings.grpc_port.port.to_string(),
    );
    data.insert(
        CONFIG_KEY_AUTHORIZATION_ENABLED.into(),
        security.authorization_enabled.clone(),
    );
    data.insert(
        CONFIG_KEY_TOKEN_SIGNING_KEY.into(),
        security.token_signing_key.clone(),
    );
    data.insert(
        CONFIG_KEY_USER_PASSWORD_FILE.into(),
        security.user_password_file.clone(),
    );
    data.insert(CONFIG_KEY_TLS_ENABLED.into(), security.tls_enabled.clone());
    data.insert(CONFIG_KEY_WAIT_FOR.into(), spec.zookeeper_uri.clone());
    data
}
