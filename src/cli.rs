//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rebarmap - Rebar3 project inspector
///
/// Discover the OTP applications of a Rebar3 project and link their dependencies.
#[derive(Parser, Debug)]
#[command(
    name = "rebarmap",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inspect Rebar3 projects: OTP applications and their dependencies",
    long_about = "rebarmap walks a Rebar3 project tree, discovers its OTP applications \
                  (project apps, checkouts, build deps, release aggregates) and reports \
                  how each application's declared dependencies resolve against the \
                  project and an OTP installation.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  rebarmap scan\n    \
                  rebarmap scan ./my_project --examples\n    \
                  rebarmap deps --otp-lib /usr/lib/erlang/lib\n    \
                  rebarmap deps --only myapp --auto-resolve\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/asyrjasalo/rebarmap"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover the OTP applications of a project
    Scan(ScanArgs),

    /// Link discovered applications and report their dependencies
    Deps(DepsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the scan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Scan the current directory:\n    rebarmap scan\n\n\
                  Scan another project:\n    rebarmap scan ../other_project\n\n\
                  Include applications under examples/:\n    rebarmap scan --examples\n\n\
                  Machine-readable output:\n    rebarmap scan --json")]
pub struct ScanArgs {
    /// Project root to scan (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Also scan the examples directory
    #[arg(long)]
    pub examples: bool,

    /// Print the discovered applications as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the deps command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Link everything that was discovered:\n    rebarmap deps\n\n\
                  Count OTP-bundled applications as satisfied:\n    \
                  rebarmap deps --otp-lib /usr/lib/erlang/lib\n\n\
                  Link a subset of the discovered applications:\n    \
                  rebarmap deps --only myapp --only myapp_web\n\n\
                  Keep the project app when names collide:\n    rebarmap deps --auto-resolve")]
pub struct DepsArgs {
    /// Project root to scan (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Also scan the examples directory
    #[arg(long)]
    pub examples: bool,

    /// Print the link report as JSON
    #[arg(long)]
    pub json: bool,

    /// OTP installation lib directory whose bundled applications satisfy
    /// dependencies (repeatable)
    #[arg(long = "otp-lib", value_name = "DIR")]
    pub otp_lib: Vec<PathBuf>,

    /// Limit the selection to the named applications (repeatable)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Resolve name conflicts by keeping the project-typed application
    #[arg(long)]
    pub auto_resolve: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rebarmap completions --shell bash > ~/.bash_completion.d/rebarmap\n\n\
                  Generate zsh completions:\n    rebarmap completions --shell zsh > ~/.zfunc/_rebarmap\n\n\
                  Generate fish completions:\n    rebarmap completions --shell fish > ~/.config/fish/completions/rebarmap.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
