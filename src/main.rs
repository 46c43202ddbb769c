mod api;
mod cli;
mod commands;
mod error;
mod util;

use std::{io, process::ExitCode};

use clap::{CommandFactory, Parser};
use cli::{Args, Commands};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::{api::{gateway::HttpGateway, modrinth::ModrinthAPI}, error::Result};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let Args { api_key, api_url, dryrun, subcommand, .. } = args;
    let api = || HttpGateway::new(&api_url, &api_key).map(ModrinthAPI::new);

    match subcommand {
        Commands::CreateVersion(create_args) => commands::create_version::create_version(&api()?, create_args, dryrun),
        Commands::Project { id } => commands::show::show_project(&api()?, &id),
        Commands::Version { id } => commands::show::show_version(&api()?, &id),
        Commands::Welcome => commands::show::welcome(&api()?),
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Args::command(), env!("CARGO_PKG_NAME"), &mut io::stdout());
            Ok(())
        }
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_PKG_NAME"))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_is_dispatched_like_any_command() {
        let args = Args::try_parse_from(["mrup", "completion", "bash"]).unwrap();
        assert!(run(args).is_ok());
    }
}
