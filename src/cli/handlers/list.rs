//! List and search command handlers.

use anyhow::{Context, Result};
use std::io::{self, Write};

use super::{controller_for, refreshed_list, truncate_str};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::NoteSummary;
use crate::store::NoteStore;

pub async fn handle_list<S: NoteStore>(args: &ListArgs, store: S) -> Result<()> {
    let notes = if args.deleted {
        let mut notes = store
            .list(true)
            .await
            .context("failed to list deleted notes")?;
        notes.retain(NoteSummary::is_deleted);
        notes
    } else {
        refreshed_list(&controller_for(store)).await?
    };

    let empty = if args.deleted {
        "Trash is empty."
    } else {
        "No notes found."
    };
    write_notes(&mut io::stdout().lock(), &notes, args.format, empty)
}

pub async fn handle_search<S: NoteStore>(args: &SearchArgs, store: S) -> Result<()> {
    let notes = store
        .search_titles(&args.query, args.deleted)
        .await
        .with_context(|| format!("failed to search for '{}'", args.query))?;

    let empty = format!("No notes match '{}'.", args.query);
    write_notes(&mut io::stdout().lock(), &notes, args.format, &empty)
}

/// Writes a note listing as a table or JSON.
pub(crate) fn write_notes<W: Write>(
    out: &mut W,
    notes: &[NoteSummary],
    format: OutputFormat,
    empty_message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                writeln!(out, "{empty_message}")?;
                return Ok(());
            }

            writeln!(out, "{:<10}  {:<50}  {:>6}  {:>10}", "ID", "Title", "Words", "Updated")?;
            writeln!(
                out,
                "{:<10}  {:<50}  {:>6}  {:>10}",
                "----------",
                "--------------------------------------------------",
                "------",
                "----------"
            )?;

            for note in notes {
                let title = if note.is_deleted() {
                    format!("{} (deleted)", note.title())
                } else {
                    note.title().to_string()
                };
                writeln!(
                    out,
                    "{:<10}  {:<50}  {:>6}  {:>10}",
                    note.id().prefix(),
                    truncate_str(&title, 50),
                    note.word_count(),
                    note.updated_at().format("%Y-%m-%d")
                )?;
            }

            writeln!(out)?;
            writeln!(out, "{} note(s)", notes.len())?;
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}
