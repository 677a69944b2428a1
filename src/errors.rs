// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for resource synthesis.
//!
//! Two families exist:
//! - [`VersionError`] - a version string or comparison operator could not be parsed.
//!   Callers of the version gate recover from it locally by disabling the gated feature.
//! - [`SynthesisError`] - the cluster descriptor lacks something a resource cannot be
//!   built without. These are surfaced to the caller; nothing is produced for that resource.

use thiserror::Error;

/// Errors raised while parsing or comparing versions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The string is not a dotted numeric version
    #[error("'{version}' is not a valid version: {reason}")]
    MalformedVersion {
        /// The offending version string
        version: String,
        /// Parser message
        reason: String,
    },

    /// The comparison operator is not one of `=`, `==`, `!=`, `>`, `>=`, `<`, `<=`
    #[error("'{operator}' is not a supported version comparison operator")]
    UnknownOperator {
        /// The offending operator
        operator: String,
    },
}

/// Errors that abort synthesis of a resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// A field required to build the resource is absent or empty
    ///
    /// The descriptor is expected to be validated before synthesis; this is returned
    /// instead of producing a partial resource.
    #[error("PravegaCluster '{cluster}' is missing required field '{field}'")]
    MissingField {
        /// Name of the cluster, or `<unnamed>` when the name itself is missing
        cluster: String,
        /// Dotted path of the missing field, e.g. `spec.pravega.controllerResources`
        field: &'static str,
    },
}
