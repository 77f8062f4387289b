//! CLI argument definitions for Email Burst.

use std::path::PathBuf;

use burst_model::{InsertStyle, SourceKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "email-burst",
    version,
    about = "Email Burst - placeholder completion for mail-merge templates",
    long_about = "Load delimited distribution lists and complete {{document.field}}\n\
                  placeholders the way the Email Burst composer does.\n\n\
                  Documents come from the settings file and from --doc NAME=PATH."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include buffer text and field values in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every document field offered as a suggestion.
    Vocab(VocabArgs),

    /// Show the popup for a buffer and cursor position.
    Suggest(SuggestArgs),

    /// Accept a suggestion and print the rewritten buffer.
    Insert(InsertArgs),

    /// Show or initialize the settings file.
    Config(ConfigArgs),
}

/// Documents given on the command line.
#[derive(Args)]
pub struct DocumentArgs {
    /// Document to load, as NAME=PATH. Repeatable; later names win.
    #[arg(long = "doc", value_name = "NAME=PATH")]
    pub docs: Vec<String>,

    /// Treat the first line of --doc sources as a record, not a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Mark --doc sources as distribution lists.
    #[arg(long = "distribution-list")]
    pub distribution_list: bool,
}

impl DocumentArgs {
    pub fn has_header_row(&self) -> bool {
        !self.no_header
    }

    pub fn kind(&self) -> SourceKind {
        if self.distribution_list {
            SourceKind::DistributionList
        } else {
            SourceKind::Generic
        }
    }
}

#[derive(Args)]
pub struct VocabArgs {
    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Print the vocabulary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Buffer contents.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: String,

    /// Cursor position in characters (default: end of text).
    #[arg(long = "cursor", value_name = "N")]
    pub cursor: Option<usize>,

    /// Open the popup even when the current word is too short.
    #[arg(long = "force")]
    pub force: bool,

    /// Widget flavor of the buffer.
    #[arg(long = "style", value_enum, default_value = "editor")]
    pub style: StyleArg,

    /// Print the popup as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct InsertArgs {
    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Buffer contents.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: String,

    /// Cursor position in characters (default: end of text).
    #[arg(long = "cursor", value_name = "N")]
    pub cursor: Option<usize>,

    /// Entry to insert, as document.field. Need not be a known suggestion.
    #[arg(long = "entry", value_name = "DOC.FIELD", conflicts_with = "index")]
    pub entry: Option<String>,

    /// Accept candidate N of the popup instead of an explicit entry.
    #[arg(long = "index", value_name = "N")]
    pub index: Option<usize>,

    /// Widget flavor of the buffer.
    #[arg(long = "style", value_enum, default_value = "editor")]
    pub style: StyleArg,

    /// Print the insertion as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the current settings (defaults if none) to the settings file.
    #[arg(long = "init")]
    pub init: bool,
}

/// CLI widget flavor choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Line,
    Editor,
}

impl From<StyleArg> for InsertStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Line => InsertStyle::Line,
            StyleArg::Editor => InsertStyle::Editor,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
