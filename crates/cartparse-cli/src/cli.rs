//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Cartparse CLI - validate and parse shopping-cart CSV documents
///
/// Checks cart documents against the fixed cart schema, turns valid ones into
/// item lists with a computed total, and cross-checks serialized carts.
#[derive(Parser, Debug)]
#[command(
    name = "cartparse",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CARTPARSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: from config, else human]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a cart CSV document and list every error
    Validate(ValidateArgs),

    /// Parse a valid cart CSV document into items and a total
    Parse(ParseArgs),

    /// Check a serialized cart JSON document for consistency
    Check(CheckArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the cart CSV document
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Stop reporting after this many errors (0 reports all)
    #[arg(long, value_name = "N")]
    pub max_errors: Option<usize>,

    /// Cell delimiter, one ASCII character [default: from config, else ',']
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Show errors as a table with a per-kind summary
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Path to the cart CSV document
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Cell delimiter, one ASCII character [default: from config, else ',']
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Write the parsed cart as a JSON document to this file
    #[arg(long = "save-to", value_name = "FILE")]
    pub save_to: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the cart JSON document
    #[arg(value_name = "JSON")]
    pub document: PathBuf,

    /// Also compare the document with the cart parsed from this CSV file
    #[arg(long, value_name = "CSV")]
    pub against: Option<PathBuf>,

    /// Allowed difference between amounts [default: from config, else 0.01]
    #[arg(long)]
    pub tolerance: Option<f64>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// Write a configuration file with default values
    Init(ConfigInitArgs),

    /// List the locations searched for configuration files
    Paths,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file; the extension picks the format
    #[arg(long, default_value = ".cartparse.toml")]
    pub path: PathBuf,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl OutputFormat {
    /// Parse a format name as written in a config file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

/// Parse a `--delimiter` value into the byte cells are split on
fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(delimiter), None) => {
            crate::config::delimiter_byte(delimiter).map_err(|reason| format!("delimiter {}", reason))
        }
        _ => Err(format!("expected a single character, got {:?}", value)),
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["cartparse", "-vv", "validate", "cart.csv"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["cartparse", "--quiet", "validate", "cart.csv"]);
        assert_eq!(cli.verbosity_level(), 0);

        assert!(Cli::try_parse_from(["cartparse", "-q", "-v", "validate", "cart.csv"]).is_err());
    }

    #[test]
    fn test_validate_args() {
        let cli = Cli::parse_from([
            "cartparse",
            "validate",
            "cart.csv",
            "--max-errors",
            "3",
            "-d",
            ";",
            "--detailed",
        ]);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.csv, PathBuf::from("cart.csv"));
                assert_eq!(args.max_errors, Some(3));
                assert_eq!(args.delimiter, Some(b';'));
                assert!(args.detailed);
            }
            other => panic!("Expected validate command, got {:?}", other),
        }
    }

    #[test]
    fn test_delimiter_must_be_one_ascii_character() {
        assert_eq!(parse_delimiter("|"), Ok(b'|'));
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("é").is_err());

        assert!(Cli::try_parse_from(["cartparse", "parse", "cart.csv", "-d", "é"]).is_err());
    }

    #[test]
    fn test_global_output_after_subcommand() {
        let cli = Cli::parse_from(["cartparse", "check", "cart.json", "-o", "json-pretty"]);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));
        assert!(matches!(cli.command, Commands::Check(ref args) if args.against.is_none()));
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("yaml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_name("JSON-PRETTY"), Some(OutputFormat::JsonPretty));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }
}
