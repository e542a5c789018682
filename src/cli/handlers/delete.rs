//! Rm and Restore command handlers.

use anyhow::{Context, Result};
use std::io;

use super::prompt::Prompt;
use super::resolve::pick_note;
use super::{controller_for, ensure_applied, refreshed_list};
use crate::cli::{RestoreArgs, RmArgs};
use crate::domain::NoteSummary;
use crate::session::Outcome;
use crate::store::NoteStore;

pub async fn handle_rm<S: NoteStore>(args: &RmArgs, store: S) -> Result<()> {
    let controller = controller_for(store);
    let notes = refreshed_list(&controller).await?;
    let note = pick_note(&notes, &args.note)?;
    let (id, title) = (note.id().clone(), note.title().to_string());

    let outcome = controller.on_note_clicked(&id).await;
    ensure_applied(&controller, outcome).with_context(|| format!("failed to open note {id}"))?;

    let outcome = if args.yes {
        controller.on_delete_clicked(&|_: &NoteSummary| true).await
    } else {
        controller
            .on_delete_clicked(&Prompt::new(io::stdin().lock()))
            .await
    };
    ensure_applied(&controller, outcome).with_context(|| format!("failed to delete note {id}"))?;

    if outcome == Outcome::Cancelled {
        println!("Aborted.");
    } else {
        println!("Deleted: {} [{}]", title, id.prefix());
    }
    Ok(())
}

pub async fn handle_restore<S: NoteStore>(args: &RestoreArgs, store: S) -> Result<()> {
    let mut trash = store
        .list(true)
        .await
        .context("failed to list deleted notes")?;
    trash.retain(NoteSummary::is_deleted);
    let note = pick_note(&trash, &args.note)?;
    let (id, title) = (note.id().clone(), note.title().to_string());

    let controller = controller_for(store);
    let outcome = controller.on_restore_clicked(&id).await;
    ensure_applied(&controller, outcome).with_context(|| format!("failed to restore note {id}"))?;

    println!("Restored: {} [{}]", title, id.prefix());
    Ok(())
}
