// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Version comparison used to gate version-specific configuration.
//!
//! Versions are dotted numeric tuples (`major[.minor[.patch]]`) with an optional leading
//! `v` and optional `-prerelease` / `+build` suffixes. Missing components count as zero.
//! Ordering follows semver: major, then minor, then patch, and a pre-release sorts before
//! its release.
//!
//! # Example
//!
//! ```rust
//! use pravega_operator::version::{compare_versions, version_gate_applies, VersionOperator};
//!
//! assert_eq!(compare_versions("0.4.0", "0.4.0", ">="), Ok(true));
//! assert_eq!(compare_versions("0.3.9", "0.4.0", ">="), Ok(false));
//!
//! // A malformed version never fails loudly through the gate
//! assert!(!version_gate_applies("latest", "0.4.0", VersionOperator::GreaterOrEqual));
//! ```

use crate::errors::VersionError;
use semver::Version;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Comparison applied between a version and a threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionOperator {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl VersionOperator {
    /// Returns whether `version.cmp(threshold)` satisfies this operator.
    #[must_use]
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
            Self::Greater => ordering == Ordering::Greater,
            Self::GreaterOrEqual => ordering != Ordering::Less,
            Self::Less => ordering == Ordering::Less,
            Self::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for VersionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
        };
        f.write_str(val)
    }
}

impl FromStr for VersionOperator {
    type Err = VersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "=" | "==" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            ">" => Ok(Self::Greater),
            ">=" => Ok(Self::GreaterOrEqual),
            "<" => Ok(Self::Less),
            "<=" => Ok(Self::LessOrEqual),
            _ => Err(VersionError::UnknownOperator {
                operator: value.to_string(),
            }),
        }
    }
}

/// Parses a dotted numeric version, padding missing minor/patch components with zero.
///
/// # Errors
///
/// Returns [`VersionError::MalformedVersion`] if the string is not a dotted numeric version
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let core_end = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(core_end);

    let normalized = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => trimmed.to_string(),
    };

    Version::parse(&normalized).map_err(|e| VersionError::MalformedVersion {
        version: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Compares `version` against `threshold` with a typed operator.
///
/// # Errors
///
/// Returns [`VersionError::MalformedVersion`] if either string fails to parse
pub fn compare_with(
    version: &str,
    threshold: &str,
    operator: VersionOperator,
) -> Result<bool, VersionError> {
    let version = parse_version(version)?;
    let threshold = parse_version(threshold)?;
    Ok(operator.matches(version.cmp_precedence(&threshold)))
}

/// Compares `version` against `threshold` using an operator such as `">="`.
///
/// # Errors
///
/// Returns [`VersionError::UnknownOperator`] for an unsupported operator, or
/// [`VersionError::MalformedVersion`] if either version fails to parse
pub fn compare_versions(version: &str, threshold: &str, operator: &str) -> Result<bool, VersionError> {
    let operator = operator.parse::<VersionOperator>()?;
    compare_with(version, threshold, operator)
}

/// Decides whether a version-gated feature applies.
///
/// Any parse failure means "not applicable": a malformed version only disables the
/// gated extras, it never aborts synthesis.
#[must_use]
pub fn version_gate_applies(version: &str, threshold: &str, operator: VersionOperator) -> bool {
    match compare_with(version, threshold, operator) {
        Ok(applies) => applies,
        Err(e) => {
            warn!(
                version = %version,
                threshold = %threshold,
                operator = %operator,
                error = %e,
                "Version gate not applicable, skipping gated configuration"
            );
            false
        }
    }
}
