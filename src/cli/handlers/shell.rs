//! Interactive shell: one line per gesture against a live session.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::controller_for;
use super::list::write_notes;
use super::prompt::Prompt;
use super::resolve::{ResolveResult, resolve_note};
use crate::cli::output::OutputFormat;
use crate::domain::NoteId;
use crate::session::{Controller, EditorFields, Outcome, SlotKind};
use crate::store::NoteStore;

const HELP: &str = "\
commands:
  ls               list notes
  open <note>      open a note by id prefix or title
  new              start a new draft
  title <text>     set the title
  write <text>     append a line to the content
  clear            clear the content
  show             print the editor contents
  save             save the editor
  rm               delete the open note (asks first)
  restore <id>     bring a deleted note back
  refresh          reload the note list
  status           print the status line
  quit             leave the shell";

pub async fn handle_shell<S: NoteStore>(store: S) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_shell(store, stdin.lock(), &mut stdout).await
}

/// Runs shell commands read from `input` until EOF or `quit`.
pub async fn run_shell<S, R, W>(store: S, input: R, out: &mut W) -> Result<()>
where
    S: NoteStore,
    R: BufRead,
    W: Write,
{
    let controller = controller_for(store);
    let prompt = Prompt::new(input);

    writeln!(out, "jot shell. Type 'help' for commands.")?;
    let outcome = controller.on_refresh_clicked().await;
    report(out, &controller, outcome, false)?;

    while let Some(line) = prompt.read_line()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        log::debug!("shell command: {command}");

        let fields = controller.current_editor_fields();
        let (outcome, announce) = match command {
            "quit" | "exit" => break,
            "help" => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            "ls" => {
                let notes = controller.current_list_snapshot();
                write_notes(out, &notes, OutputFormat::Human, "No notes found.")?;
                continue;
            }
            "status" => {
                writeln!(out, "{}", controller.current_status())?;
                continue;
            }
            "show" => {
                write_editor(out, &controller)?;
                continue;
            }
            "new" => (controller.on_new_clicked(), true),
            "open" => {
                let notes = controller.current_list_snapshot();
                let id = match resolve_note(&notes, rest) {
                    ResolveResult::Unique(note) => note.id().clone(),
                    ResolveResult::Ambiguous(candidates) => {
                        writeln!(out, "'{rest}' matches {} notes:", candidates.len())?;
                        for note in candidates {
                            writeln!(out, "  {} - {}", note.id().prefix(), note.title())?;
                        }
                        continue;
                    }
                    ResolveResult::NotFound => {
                        writeln!(out, "no note matches '{rest}'")?;
                        continue;
                    }
                };
                (controller.on_note_clicked(&id).await, true)
            }
            "title" => (controller.on_edit(rest, fields.content), false),
            "write" => {
                let EditorFields { title, mut content } = fields;
                if !content.is_empty() {
                    content.push('\n');
                }
                content.push_str(rest);
                (controller.on_edit(title, content), false)
            }
            "clear" => (controller.on_edit(fields.title, ""), false),
            "save" => (controller.on_save_clicked(fields.title, fields.content).await, true),
            "rm" => (controller.on_delete_clicked(&prompt).await, true),
            "restore" => {
                let Ok(id) = rest.parse::<NoteId>() else {
                    writeln!(out, "usage: restore <id>")?;
                    continue;
                };
                (controller.on_restore_clicked(&id).await, false)
            }
            "refresh" => (controller.on_refresh_clicked().await, false),
            other => {
                writeln!(out, "unknown command: {other} (try 'help')")?;
                continue;
            }
        };
        report(out, &controller, outcome, announce)?;
    }

    Ok(())
}

fn report<S: NoteStore, W: Write>(
    out: &mut W,
    controller: &Controller<S>,
    outcome: Outcome,
    announce: bool,
) -> Result<()> {
    match outcome {
        Outcome::Applied if announce => {
            let view = controller.current_view();
            match (&view.state, &view.bound) {
                (SlotKind::Bound, Some(note)) => {
                    writeln!(out, "[{}] {}", note.id().prefix(), note.title())?
                }
                _ => writeln!(out, "[draft]")?,
            }
        }
        Outcome::Applied => {}
        Outcome::Failed(_) => writeln!(out, "{}", controller.current_status())?,
        Outcome::Rejected => writeln!(out, "busy, try again")?,
        Outcome::Ignored => writeln!(out, "nothing to delete: the draft was never saved")?,
        Outcome::Cancelled => writeln!(out, "cancelled")?,
    }
    Ok(())
}

fn write_editor<S: NoteStore, W: Write>(out: &mut W, controller: &Controller<S>) -> Result<()> {
    let view = controller.current_view();
    let marker = if view.dirty { " (modified)" } else { "" };
    match &view.bound {
        Some(note) => writeln!(out, "[{}]{marker}", note.id().prefix())?,
        None => writeln!(out, "[draft]{marker}")?,
    }
    writeln!(out, "title: {}", view.fields.title)?;
    writeln!(out, "{}", view.fields.content)?;
    Ok(())
}
