//! Command-line interface definitions for justcms.
//!
//! This module defines the CLI structure using clap derives and dispatches the
//! parsed command to its handler.

use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use url::Url;

use crate::cms::{PROJECT_ENV, TOKEN_ENV};
use crate::color::ColorScheme;
use crate::commands::completions::handle_completions_command;
use crate::commands::version::handle_version_command;
use crate::commands::{self, connect};

/// justcms - Query the JustCMS public API
#[derive(Debug, Parser)]
#[command(
  name = "justcms",
  version,
  about = "Query the JustCMS public content API",
  long_about = "A command-line client for the JustCMS headless CMS.\n\
                Lists categories and pages, and fetches pages, menus and layouts as text or JSON.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Command,

  /// Authentication options
  #[command(flatten)]
  pub auth: AuthOptions,

  /// Output options
  #[command(flatten)]
  pub output: OutputOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
  /// List all categories of the project
  Categories,

  /// List pages, optionally filtered by category
  Pages {
    /// Only include pages in this category
    #[arg(long, value_name = "SLUG")]
    category: Option<String>,

    /// Index of the first page to return
    #[arg(long, value_name = "N")]
    start: Option<u64>,

    /// Maximum number of pages to return
    #[arg(long, value_name = "N")]
    offset: Option<u64>,
  },

  /// Fetch a single page by slug
  Page {
    /// Page slug (e.g. about-us)
    #[arg(value_name = "SLUG")]
    slug: String,

    /// Page version to fetch (e.g. draft)
    #[arg(long = "page-version", value_name = "VERSION")]
    version: Option<String>,
  },

  /// Print a menu tree
  Menu {
    /// Menu identifier
    #[arg(value_name = "ID")]
    id: String,
  },

  /// Fetch one or more layouts
  Layout {
    /// Layout identifiers; several ids are fetched in a single request
    #[arg(value_name = "ID", required = true, num_args = 1..)]
    ids: Vec<String>,
  },

  /// Display version and build information
  Version {
    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: Shell,
  },
}

/// Shells supported by `justcms completions`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
  Bash,
  Zsh,
  Fish,
  Powershell,
  Elvish,
}

/// Normalize a URL by adding https:// if no scheme is present
fn normalize_url(url: &str) -> Result<String, String> {
  let trimmed = url.trim();

  let parsed = match Url::parse(trimmed) {
    Ok(parsed) => parsed,
    Err(_) => {
      let with_https = format!("https://{trimmed}");
      Url::parse(&with_https).map_err(|e| format!("Invalid URL: {e}"))?
    }
  };

  let mut url_str = parsed.to_string();
  if url_str.ends_with('/') && url_str.len() > 1 {
    url_str.pop();
  }

  Ok(url_str)
}

/// Authentication options
#[derive(Debug, Parser)]
pub struct AuthOptions {
  /// JustCMS API token
  #[arg(long, global = true, env = TOKEN_ENV, value_name = "TOKEN", hide_env_values = true)]
  pub token: Option<String>,

  /// JustCMS project identifier
  #[arg(long, global = true, env = PROJECT_ENV, value_name = "PROJECT_ID")]
  pub project: Option<String>,

  /// Override the API root (for proxies and local testing)
  #[arg(long, global = true, env = "JUSTCMS_BASE_URL", value_name = "URL", value_parser = normalize_url, hide = true)]
  pub base_url: Option<String>,

  /// Request timeout in seconds
  #[arg(long, global = true, default_value = "30", value_name = "SECONDS")]
  pub timeout: u64,
}

/// Output options
#[derive(Debug, Parser)]
pub struct OutputOptions {
  /// Print responses as pretty JSON instead of text
  #[arg(long, global = true)]
  pub json: bool,
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, global = true, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, global = true, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

impl Cli {
  /// Validate CLI arguments
  ///
  /// Returns an error if the CLI configuration is invalid.
  pub fn validate(&self) -> Result<(), String> {
    match &self.command {
      Command::Page { slug, .. } if slug.trim().is_empty() => Err("page slug must not be empty".to_string()),
      Command::Menu { id } if id.trim().is_empty() => Err("menu id must not be empty".to_string()),
      Command::Layout { ids } if ids.iter().any(|id| id.trim().is_empty()) => {
        Err("layout ids must not be empty".to_string())
      }
      _ if self.auth.timeout == 0 => Err("--timeout must be at least 1 second".to_string()),
      _ => Ok(()),
    }
  }
}

/// Parse CLI arguments, initialize shared services, and dispatch to the chosen
/// command.
pub async fn run() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) => {
      let code = parse_error_exit_code(&e);
      let _ = e.print();
      process::exit(code);
    }
  };

  init_tracing(&cli.behavior);

  let colors = ColorScheme::new(cli.behavior.color);

  if let Err(e) = cli.validate() {
    eprintln!("{} {}", colors.error("Error:"), e);
    process::exit(4); // Invalid arguments exit code
  }

  match &cli.command {
    Command::Version { short } => handle_version_command(cli.output.json, *short, &colors),
    Command::Completions { shell } => handle_completions_command(*shell),
    command => {
      let client = match connect(&cli.auth) {
        Ok(client) => client,
        Err(e) => {
          eprintln!("{} {}", colors.error("✗"), colors.error("Failed to create API client"));
          eprintln!("  {e}");
          if e.is_config() {
            eprintln!("\n{}", colors.info("Provide credentials via:"));
            eprintln!("  • CLI flags: --token and --project");
            eprintln!("  • Environment variables: {TOKEN_ENV} and {PROJECT_ENV}");
            process::exit(2);
          }
          process::exit(1);
        }
      };

      if let Err(e) = commands::dispatch(command, &client, &cli.output, &colors).await {
        eprintln!("{} {}", colors.error("✗"), colors.error("Request failed"));
        eprintln!("  {}: {:#}", colors.emphasis("Error"), e);
        process::exit(1);
      }
    }
  }
}

/// Help and version output exit cleanly; every other parse failure is an
/// invalid-arguments error.
fn parse_error_exit_code(err: &clap::Error) -> i32 {
  match err.kind() {
    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
    _ => 4,
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
