//! CLI for inspecting pkgfeed defaults and configuration.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pkgfeed_core::config;

use commands::{run_completions, run_config_path, run_output_dir, run_repository_url, run_show};

/// Top-level CLI for pkgfeed.
#[derive(Debug, Parser)]
#[command(name = "pkgfeed")]
#[command(about = "pkgfeed: package feed URL and output directory defaults", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the built-in package repository URL.
    RepositoryUrl,

    /// Print the built-in output directory.
    OutputDir {
        /// Print as a native relative path instead of the exact literal.
        #[arg(long)]
        native: bool,
    },

    /// Show the effective configuration (defaults plus config file overrides).
    Show {
        /// Emit JSON instead of aligned text.
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the configuration file.
    ConfigPath,

    /// Generate a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("command: {:?}", cli.command);

        match cli.command {
            CliCommand::RepositoryUrl => run_repository_url(),
            CliCommand::OutputDir { native } => run_output_dir(native),
            CliCommand::Show { json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_show(&cfg, json)?;
            }
            CliCommand::ConfigPath => run_config_path()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
