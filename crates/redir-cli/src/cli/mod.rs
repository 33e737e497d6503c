//! CLI for the redir callback resolver.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use redir_core::config;

use commands::{run_config, run_extract, run_merge, run_resolve};

/// Top-level CLI for the redir callback resolver.
#[derive(Debug, Parser)]
#[command(name = "redir")]
#[command(about = "redir: see where a callback link would redirect", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the simulated page lives and which parameter carries the callback.
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Full URL of the page carrying the callback parameter.
    pub href: String,

    /// Origin to resolve against (default: the origin of HREF).
    #[arg(long)]
    pub origin: Option<String>,

    /// Query parameter holding the callback (default: from config).
    #[arg(long, value_name = "NAME")]
    pub param: Option<String>,

    /// Fallback destination (default: from config).
    #[arg(long, value_name = "PATH")]
    pub default_path: Option<String>,

    /// Print JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Redirect option overrides; unset flags keep the config value.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionFlags {
    /// Navigate with replace instead of assign.
    #[arg(long)]
    pub replace: bool,

    /// Drop the fragment from the destination.
    #[arg(long)]
    pub erase_hash: bool,

    /// Rewrite %20 in the resolved path to +.
    #[arg(long, conflicts_with = "encode_plus")]
    pub decode_plus: bool,

    /// Rewrite + in the resolved path to %20 (deprecated).
    #[arg(long)]
    pub encode_plus: bool,

    /// Raw query string merged into the destination.
    #[arg(long, value_name = "QUERY")]
    pub extra_query_params: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run a full redirect and print the resulting navigation.
    Resolve {
        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        flags: OptionFlags,
    },

    /// Print the extracted path, query and fragment without navigating.
    Extract {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Merge extra query parameters into an origin-relative URL.
    Merge {
        /// Origin-relative URL, e.g. `/x?a=1`.
        base: String,

        /// Query string to append, e.g. `?b=2`.
        extra: String,

        /// Origin the base is relative to.
        #[arg(long)]
        origin: String,
    },

    /// Show the config file location and its effective contents.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let output = match cli.command {
            CliCommand::Resolve { page, flags } => run_resolve(&cfg, &page, &flags)?,
            CliCommand::Extract { page } => run_extract(&cfg, &page)?,
            CliCommand::Merge {
                base,
                extra,
                origin,
            } => run_merge(&base, &extra, &origin)?,
            CliCommand::Config => run_config(&cfg, &config::config_path()?)?,
        };
        println!("{output}");

        Ok(())
    }
}

#[cfg(test)]
mod tests;
