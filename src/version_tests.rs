// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `version`

#[cfg(test)]
mod tests {
    use crate::errors::VersionError;
    use crate::version::{
        compare_versions, parse_version, version_gate_applies, VersionOperator,
    };

    #[test]
    fn test_greater_or_equal_at_threshold() {
        assert_eq!(compare_versions("0.4.0", "0.4.0", ">="), Ok(true));
    }

    #[test]
    fn test_greater_or_equal_below_threshold() {
        assert_eq!(compare_versions("0.3.9", "0.4.0", ">="), Ok(false));
    }

    #[test]
    fn test_components_compare_numerically() {
        // 0.10.0 is newer than 0.4.0 even though "1" < "4" as text
        assert_eq!(compare_versions("0.10.0", "0.4.0", ">"), Ok(true));
        assert_eq!(compare_versions("1.0.0", "0.99.99", ">"), Ok(true));
        assert_eq!(compare_versions("0.4.1", "0.4.0", "<"), Ok(false));
    }

    #[test]
    fn test_all_operators() {
        assert_eq!(compare_versions("0.4.0", "0.4.0", "="), Ok(true));
        assert_eq!(compare_versions("0.4.0", "0.4.0", "=="), Ok(true));
        assert_eq!(compare_versions("0.4.0", "0.4.0", "!="), Ok(false));
        assert_eq!(compare_versions("0.5.0", "0.4.0", ">"), Ok(true));
        assert_eq!(compare_versions("0.3.0", "0.4.0", "<"), Ok(true));
        assert_eq!(compare_versions("0.4.0", "0.4.0", "<="), Ok(true));
        assert_eq!(compare_versions("0.4.1", "0.4.0", "<="), Ok(false));
    }

    #[test]
    fn test_short_versions_are_padded() {
        assert_eq!(compare_versions("0.4", "0.4.0", "="), Ok(true));
        assert_eq!(compare_versions("1", "1.0.0", "="), Ok(true));
        assert_eq!(parse_version("0.5").unwrap().to_string(), "0.5.0");
    }

    #[test]
    fn test_leading_v_is_accepted() {
        assert_eq!(compare_versions("v0.4.0", "0.4.0", ">="), Ok(true));
    }

    #[test]
    fn test_prerelease_sorts_before_release() {
        assert_eq!(compare_versions("0.4.0-rc1", "0.4.0", ">="), Ok(false));
        assert_eq!(compare_versions("0.5.0-2032.b3f6d25", "0.4.0", ">="), Ok(true));
        assert_eq!(compare_versions("0.4-rc1", "0.4.0", "<"), Ok(true));
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        assert_eq!(compare_versions("0.4.0+build.7", "0.4.0", "="), Ok(true));
    }

    #[test]
    fn test_malformed_version_is_an_error() {
        for bad in ["", "latest", "0.4.x", "1.2.3.4", "0..1"] {
            let result = compare_versions(bad, "0.4.0", ">=");
            assert!(
                matches!(result, Err(VersionError::MalformedVersion { .. })),
                "expected MalformedVersion for {bad:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_malformed_threshold_is_an_error() {
        assert!(matches!(
            compare_versions("0.4.0", "next", ">="),
            Err(VersionError::MalformedVersion { .. })
        ));
    }

    #[test]
    fn test_unknown_operator_is_an_error() {
        assert_eq!(
            compare_versions("0.4.0", "0.4.0", "~>"),
            Err(VersionError::UnknownOperator {
                operator: "~>".to_string()
            })
        );
    }

    #[test]
    fn test_operator_display_round_trips() {
        for op in [
            VersionOperator::Equal,
            VersionOperator::NotEqual,
            VersionOperator::Greater,
            VersionOperator::GreaterOrEqual,
            VersionOperator::Less,
            VersionOperator::LessOrEqual,
        ] {
            assert_eq!(op.to_string().parse::<VersionOperator>(), Ok(op));
        }
    }

    #[test]
    fn test_gate_applies() {
        assert!(version_gate_applies(
            "0.4.0",
            "0.4.0",
            VersionOperator::GreaterOrEqual
        ));
        assert!(!version_gate_applies(
            "0.3.9",
            "0.4.0",
            VersionOperator::GreaterOrEqual
        ));
    }

    #[test]
    fn test_gate_is_not_applicable_on_malformed_version() {
        assert!(!version_gate_applies(
            "not-a-version",
            "0.4.0",
            VersionOperator::GreaterOrEqual
        ));
        // Fail safe holds for operators that would otherwise be true
        assert!(!version_gate_applies(
            "garbage",
            "0.4.0",
            VersionOperator::NotEqual
        ));
    }
}
