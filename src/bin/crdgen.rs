// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRD YAML Generator
//!
//! Generates the `PravegaCluster` CRD YAML from the Rust types in src/crd.rs.
//!
//! Usage:
//!   cargo run --bin crdgen
//!
//! The generated file is written to deploy/crds/ with the license header.

use kube::CustomResourceExt;
use pravega_operator::crd::PravegaCluster;
use std::fs;
use std::path::Path;

const COPYRIGHT_HEADER: &str = "# Copyright (c) 2025 Erick Bourgeois, firestoned
# SPDX-License-Identifier: MIT
#
# This file is AUTO-GENERATED from src/crd.rs
# DO NOT EDIT MANUALLY - Run `cargo run --bin crdgen` to regenerate
#
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("deploy/crds");
    fs::create_dir_all(output_dir)?;

    let filename = "pravegaclusters.crd.yaml";
    let yaml = serde_yaml::to_string(&PravegaCluster::crd())?;
    fs::write(output_dir.join(filename), format!("{COPYRIGHT_HEADER}{yaml}"))?;

    println!("✓ Generated {filename} in {}", output_dir.display());
    Ok(())
}
