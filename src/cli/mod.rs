//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - local notes with soft delete and a scriptable editing session
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides JOT_DIR and the config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, most recently updated first
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Create a new note
    New(NewArgs),

    /// Change a note's title or content
    Edit(EditArgs),

    /// Move a note to the trash
    Rm(RmArgs),

    /// Bring a note back from the trash
    Restore(RestoreArgs),

    /// Search note titles
    Search(SearchArgs),

    /// Interactive editing session
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// List the trash instead of live notes
    #[arg(long)]
    pub deleted: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID (or prefix) or title
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title ("Untitled" when omitted)
    #[arg(default_value = "")]
    pub title: String,

    /// Note content
    #[arg(short, long, conflicts_with = "stdin")]
    pub content: Option<String>,

    /// Read content from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
///
/// Without `--title`, `--content` or `--stdin` the content is opened in
/// the configured editor.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID (or prefix) or title
    pub note: String,

    /// New title (blank keeps the current one)
    #[arg(short, long)]
    pub title: Option<String>,

    /// New content
    #[arg(short, long, conflicts_with = "stdin")]
    pub content: Option<String>,

    /// Read new content from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note ID (or prefix) or title
    pub note: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `restore` command
#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Deleted note ID (or prefix) or title
    pub note: String,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in titles
    pub query: String,

    /// Include notes in the trash
    #[arg(long)]
    pub deleted: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
