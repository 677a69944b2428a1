// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pravega operator CLI
//!
//! Renders the controller resources of a `PravegaCluster` manifest to stdout.
//!
//! Usage:
//!   pravega-operator render -f cluster.yaml | kubectl apply -f -

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use pravega_operator::controller_resources::synthesize_controller;
use pravega_operator::manifest::{load_cluster, render_yaml};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Synthesizes Kubernetes resources for the Pravega controller.
#[derive(Parser)]
#[command(name = "pravega-operator", author, version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the controller resources of a PravegaCluster manifest as YAML.
    Render {
        /// Path to the PravegaCluster manifest.
        #[clap(long = "file", short = 'f')]
        file: PathBuf,

        /// Namespace overriding `metadata.namespace`.
        #[clap(long = "namespace", short = 'n', env = "PRAVEGA_NAMESPACE")]
        namespace: Option<String>,
    },

    /// Generate a shell completion script.
    Completions { shell: clap_complete::Shell },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render { file, namespace } => render(&file, namespace.as_deref()),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "pravega-operator", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn render(file: &Path, namespace: Option<&str>) -> Result<()> {
    let cluster = load_cluster(file, namespace)?;
    debug!(file = %file.display(), "Synthesizing controller resources");

    let resources = synthesize_controller(&cluster)
        .with_context(|| format!("Failed to synthesize resources from {}", file.display()))?;
    let yaml = render_yaml(&resources)?;

    std::io::stdout()
        .lock()
        .write_all(yaml.as_bytes())
        .context("Failed to write rendered resources")?;

    info!(
        name = ?cluster.metadata.name,
        namespace = ?cluster.metadata.namespace,
        "Rendered controller resources"
    );
    Ok(())
}

/// Logs go to stderr so stdout only carries rendered YAML.
///
/// Respects `RUST_LOG` (default `info`) and `RUST_LOG_FORMAT=json|text`.
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .compact()
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
