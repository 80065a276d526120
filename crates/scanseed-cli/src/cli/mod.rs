//! CLI for scanseed.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use scanseed_core::config::{self, OutputFormat};
use std::path::PathBuf;

use commands::{run_completions, run_config, run_man, run_nmap, NmapArgs};

/// Top-level CLI for scanseed.
#[derive(Debug, Parser)]
#[command(name = "scanseed")]
#[command(about = "scanseed: turn scan reports into candidate web URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// `--format` values; mirrors `OutputFormat` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract web URLs from an nmap XML report (`nmap -oX`).
    Nmap {
        /// Path to the XML report, or `-` for stdin.
        path: String,

        /// Comma-separated port allow-list (e.g. 80,443,8080). Overrides the config file.
        #[arg(long, value_name = "LIST")]
        ports: Option<String>,

        /// Always include :80 / :443 in http / https URLs.
        #[arg(long)]
        show_default_ports: bool,

        /// Output format. Overrides the config file.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Write URLs to this file instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the config file path and effective settings.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Nmap {
                path,
                ports,
                show_default_ports,
                format,
                output,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = NmapArgs {
                    path,
                    ports,
                    show_default_ports,
                    format: format.map(OutputFormat::from),
                    output,
                };
                run_nmap(&cfg, &args)?;
            }
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
