//! rebarmap - Rebar3 project inspector
//!
//! A command line tool that discovers the OTP applications of a Rebar3
//! project (project apps, checkouts, build deps, release aggregates) and
//! reports how their declared dependencies resolve against each other and
//! an OTP installation.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod discovery;
mod error;
mod progress;
mod resolver;
mod term;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::run(args, cli.verbose),
        Commands::Deps(args) => commands::deps::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
