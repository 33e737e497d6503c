//! CLI parse and command tests.

use super::{Cli, CliCommand, PageArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn page(href: &str) -> PageArgs {
    PageArgs {
        href: href.to_string(),
        origin: None,
        param: None,
        default_path: None,
        json: false,
    }
}
