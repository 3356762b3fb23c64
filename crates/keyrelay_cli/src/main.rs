//! # Commands
//!
//! - `keyrelay detect` - Detect API keys and secrets in text
//! - `keyrelay patterns` - List detection patterns
//! - `keyrelay check` - Verify the native host and `op` session
//! - `keyrelay list` - List stored API credentials
//! - `keyrelay read` - Read a secret by reference
//! - `keyrelay completions` - Generate shell completions

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod client;
mod commands;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/keyrelay/keyrelay";

#[derive(Debug, Parser)]
#[command(
    name = "keyrelay",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "d")]
    Detect(DetectArgs),

    #[command(visible_alias = "p")]
    Patterns(PatternsArgs),

    Check(CheckArgs),

    #[command(visible_alias = "l")]
    List(ListArgs),

    Read(ReadArgs),

    Completions(CompletionsArgs),
}

/// Output format for detect and list results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Arguments for the `keyrelay detect` command.
#[derive(Debug, Parser)]
pub struct DetectArgs {
    /// Text to scan. Reads stdin when omitted.
    pub text: Option<String>,

    /// URL of the page the text came from (enables context-gated patterns).
    #[arg(short = 'u', long, value_name = "URL")]
    pub source_url: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Print raw secret values instead of masked ones.
    #[arg(long)]
    pub show_values: bool,

    /// Always exit with code 0, even when secrets are found.
    #[arg(long)]
    pub exit_zero: bool,
}

/// Arguments for the `keyrelay patterns` command.
#[derive(Debug, Parser)]
pub struct PatternsArgs {
    /// Filter patterns by group name (e.g. `ai`, `payments`).
    #[arg(short, long)]
    pub group: Option<String>,

    /// Show pattern details including regex and keywords.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments shared by commands that talk to the native host.
#[derive(Debug, Parser)]
pub struct HostArgs {
    /// Path to the `keyrelay-host` binary. Defaults to a sibling of this
    /// executable.
    #[arg(long, value_name = "PATH")]
    pub host: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}

/// Arguments for the `keyrelay check` command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Host connection options.
    #[command(flatten)]
    pub host: HostArgs,
}

/// Arguments for the `keyrelay list` command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Host connection options.
    #[command(flatten)]
    pub host: HostArgs,

    /// Vault to list from.
    #[arg(long)]
    pub vault: Option<String>,

    /// Filter by tags (comma-separated).
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the `keyrelay read` command.
#[derive(Debug, Parser)]
pub struct ReadArgs {
    /// Host connection options.
    #[command(flatten)]
    pub host: HostArgs,

    /// Secret reference (e.g. `op://Work/OpenAI/credential`).
    pub reference: String,
}

/// Arguments for the `keyrelay completions` command.
#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Detect(args) => commands::detect::run(&args),
        Command::Patterns(args) => commands::patterns::run(args.group.as_deref(), args.verbose),
        Command::Check(args) => commands::check::run(&args.host),
        Command::List(args) => commands::list::run(&args),
        Command::Read(args) => commands::read::run(&args),
        Command::Completions(args) => commands::completions::run(args.shell),
    }
}

fn build_about() -> String {
    format!(
        r"
  {} detects API keys in copied text and stores them in 1Password.

  Scans text against a catalog of provider patterns, masks what it
  finds, and talks to the `op` CLI through a native messaging host.",
        colors::accent().apply_to("keyrelay").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    keyrelay detect 'OPENAI_API_KEY=sk-...'   Scan a string
    cat .env | keyrelay detect                Scan stdin
    keyrelay detect --format json             Output as JSON
    keyrelay patterns                         List detection patterns
    keyrelay check                            Verify host and op session
    keyrelay list --vault Work                List stored credentials
    keyrelay read op://Work/OpenAI/credential Print a secret

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
