//! Show command handler.

use anyhow::{Context, Result};
use std::io::{self, Write};

use super::resolve::pick_note;
use super::{controller_for, ensure_applied, refreshed_list};
use crate::cli::ShowArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::LoadedNote;
use crate::store::NoteStore;

pub async fn handle_show<S: NoteStore>(args: &ShowArgs, store: S) -> Result<()> {
    let controller = controller_for(store);
    let notes = refreshed_list(&controller).await?;
    let id = pick_note(&notes, &args.note)?.id().clone();

    let outcome = controller.on_note_clicked(&id).await;
    ensure_applied(&controller, outcome).with_context(|| format!("failed to open note {id}"))?;

    let view = controller.current_view();
    let summary = view
        .bound
        .with_context(|| format!("note {id} did not open"))?;
    let note = LoadedNote::new(summary, view.fields.content);
    write_note(&mut io::stdout().lock(), &note, args.format)
}

/// Writes one note with its metadata header.
pub(crate) fn write_note<W: Write>(out: &mut W, note: &LoadedNote, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let summary = note.summary();
            writeln!(out, "# {}", summary.title())?;
            writeln!(out)?;
            writeln!(
                out,
                "ID: {}  Created: {}  Modified: {}  Words: {}",
                summary.id().prefix(),
                summary.created_at().format("%Y-%m-%d"),
                summary.updated_at().format("%Y-%m-%d"),
                summary.word_count()
            )?;
            writeln!(out)?;

            if !note.content().is_empty() {
                writeln!(out, "{}", note.content())?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(note))?)?;
        }
    }
    Ok(())
}
