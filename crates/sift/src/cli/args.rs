//! Clap argument definitions for the `sift` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Parse search queries into syntax trees")]
pub struct Cli {
    #[command(flatten)]
    /// Options shared by every subcommand.
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbosity level (-v for debug logs, -vv for parser traces)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read settings from this file instead of discovering .sift.toml files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Flags that override the configured parser settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ParserArgs {
    /// Maximum nesting of groups, phrases and field values [default: 64]
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Maximum height of the parsed tree, which bounds the number of chained terms
    /// [default: 1024]
    #[arg(long)]
    pub max_height: Option<usize>,

    /// Accept AND/OR in any case as keywords
    #[arg(long)]
    pub ignore_keyword_case: bool,
}

/// How a parsed tree is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented tree, one node per line
    #[default]
    Tree,
    /// Single-line node notation
    Compact,
    /// Query text that parses back to the same tree
    Query,
    /// Rust debug representation
    Debug,
}

/// Arguments for `sift parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseCommand {
    /// Queries to parse
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Tree)]
    pub format: Format,

    #[command(flatten)]
    /// Parser setting overrides.
    pub parser: ParserArgs,
}

/// Arguments for `sift check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Queries to validate
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Only report invalid queries
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(flatten)]
    /// Parser setting overrides.
    pub parser: ParserArgs,
}

/// Supported `sift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse queries and print their syntax trees
    #[command(after_help = "\
QUERY SYNTAX:
  term              Bare search term
  term1 term2       Both terms (implicit and)
  term1 and term2   Both terms
  term1 or term2    Either term
  \"phrase\"          Exact phrase match
  (expr)            Grouping
  key:term          Term scoped to a field
  key:\"phrase\"      Phrase scoped to a field
  key:(expr)        Expression scoped to a field

'and' and 'or' share one precedence level and group from the left:
'a or b c' means '(a or b) and c'.

EXAMPLES:
  sift parse 'rust async'
  sift parse 'title:guide (rust or golang)'
  sift parse --format query 'a or b and c'")]
    Parse(ParseCommand),

    /// Validate queries, reporting syntax errors
    Check(CheckCommand),

    /// Show effective settings and the configuration files they came from
    Config,
}

/// Parses CLI arguments, exiting with usage information on failure.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use sift_query::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT};

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    /// Verifies that CLI help text contains the parser's default limits.
    #[test]
    fn cli_help_defaults_match_constants() {
        let cmd = Cli::command();
        for subcmd in ["parse", "check"] {
            for (arg, default) in [
                ("max_depth", DEFAULT_MAX_DEPTH),
                ("max_height", DEFAULT_MAX_HEIGHT),
            ] {
                let help = get_arg_help(&cmd, subcmd, arg);
                assert!(
                    help.contains(&format!("[default: {default}]")),
                    "{subcmd} {arg} help should contain default {default}: {help}"
                );
            }
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_arguments() {
        let cli = Cli::try_parse_from([
            "sift",
            "-vv",
            "parse",
            "--format",
            "query",
            "--max-depth",
            "3",
            "a b",
        ])
        .unwrap();
        assert_eq!(cli.global.verbose, 2);
        let Commands::Parse(cmd) = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(cmd.queries, vec!["a b".to_string()]);
        assert_eq!(cmd.format, Format::Query);
        assert_eq!(cmd.parser.max_depth, Some(3));
        assert!(!cmd.parser.ignore_keyword_case);
    }
}
