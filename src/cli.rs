//! Command-line surface for the `lorelink` binary.

use std::num::NonZero;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lorelink_core::MentionKind;

#[derive(Debug, Parser)]
#[command(name = "lorelink")]
#[command(about = "Resolve @mentions in campaign notes against a target catalog")]
#[command(version)]
pub struct Cli {
    /// Configuration file to use instead of ./lorelink.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Split text into plain-text and mention tokens.
    Tokenize(TokenizeArgs),

    /// Print the text with every mention turned into a Markdown link.
    Render(RenderArgs),

    /// List targets matching an autocomplete query.
    Suggest(SuggestArgs),

    /// List the distinct targets a text mentions.
    Extract(ExtractArgs),

    /// Show the autocomplete state at a cursor and optionally accept a target.
    Compose(ComposeArgs),

    /// Report targets whose names collide.
    Lint(LintArgs),
}

/// JSON target catalog shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct TargetsArg {
    /// JSON array of {id, name, kind, href} records.
    #[arg(long, short = 't', value_name = "FILE")]
    pub targets: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub targets: TargetsArg,

    /// Text to tokenize; read from stdin when omitted.
    pub text: Option<String>,

    /// Print the token array as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub targets: TargetsArg,

    /// Text to render; read from stdin when omitted.
    pub text: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub targets: TargetsArg,

    /// Query typed after `@`; empty lists the first targets.
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of suggestions (defaults to `suggestions.limit`).
    #[arg(long, short = 'l')]
    pub limit: Option<NonZero<usize>>,

    /// Print the suggestions as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub targets: TargetsArg,

    /// Text to scan; read from stdin when omitted.
    pub text: Option<String>,

    /// Only report targets of this kind.
    #[arg(long, short = 'k')]
    pub kind: Option<MentionKind>,

    /// Print the targets as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub targets: TargetsArg,

    /// Current contents of the input.
    #[arg(long)]
    pub text: String,

    /// Cursor as a byte offset into the text (defaults to the end).
    #[arg(long)]
    pub cursor: Option<usize>,

    /// Accept the target with this id at the cursor.
    #[arg(long, value_name = "ID")]
    pub accept: Option<String>,

    /// Print the state as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct LintArgs {
    #[command(flatten)]
    pub targets: TargetsArg,

    /// Print the collisions as JSON.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_kind_filter_case_insensitively() {
        let cli = Cli::try_parse_from([
            "lorelink", "extract", "-t", "t.json", "--kind", "Location", "hi",
        ])
        .expect("parse");
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.kind, Some(MentionKind::Location));
                assert_eq!(args.text.as_deref(), Some("hi"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_limit() {
        let result = Cli::try_parse_from(["lorelink", "suggest", "-t", "t.json", "--limit", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from([
            "lorelink", "lint", "-t", "t.json", "--config", "custom.toml",
        ])
        .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
