//! Handing the resolved configuration to the project generator
//!
//! Generation itself (download, render, install) is done by an external
//! program. This module only invokes it once and maps the outcome to an exit status.

use crate::config::GeneratorCommand;
use crate::resolve::ResolvedConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::{debug, info};

/// Exit status on success
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status on validation or generation failure
pub const EXIT_FAILURE: u8 = 1;

/// The project generation capability
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, config: &ResolvedConfig) -> Result<()>;
}

/// Generator backed by an external command
pub struct ProcessGenerator {
    command: GeneratorCommand,
}

impl ProcessGenerator {
    pub fn new(command: GeneratorCommand) -> Self {
        Self { command }
    }

    /// Arguments passed after the command's own leading arguments
    pub fn arguments(config: &ResolvedConfig) -> Vec<String> {
        let mut args = vec![config.directory.clone()];

        if let Some(url) = &config.offering_url {
            args.push(config.offering.generator_flag().to_string());
            args.push(url.clone());
        }

        if config.quickstart {
            args.push("--quickstart".to_string());
        }

        args.extend(config.passthrough.to_args());
        args
    }
}

#[async_trait]
impl Generator for ProcessGenerator {
    async fn generate(&self, config: &ResolvedConfig) -> Result<()> {
        let program = &self.command.program;
        debug!(program = %program, directory = %config.directory, "starting generator");

        let status = TokioCommand::new(program)
            .args(&self.command.leading_args)
            .args(Self::arguments(config))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("Failed to run project generator '{}'", program))?;

        if !status.success() {
            match status.code() {
                Some(code) => {
                    anyhow::bail!("Project generator '{}' exited with code {}", program, code)
                }
                None => {
                    anyhow::bail!("Project generator '{}' was terminated by a signal", program)
                }
            }
        }

        Ok(())
    }
}

/// Invoke the generator exactly once and map its outcome to an exit status
pub async fn dispatch<G: Generator + ?Sized>(generator: &G, config: &ResolvedConfig) -> u8 {
    match generator.generate(config).await {
        Ok(()) => {
            info!(directory = %config.directory, "project generated");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{}", format!("{:#}", e).red());
            EXIT_FAILURE
        }
    }
}
