//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use std::process::Command;

use super::resolve::pick_note;
use super::{controller_for, ensure_applied, read_stdin, refreshed_list};
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::store::NoteStore;

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Runs the configured editor command on a file and waits for it.
struct CommandEditor<'a>(&'a Config);

impl EditorLauncher for CommandEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        let editor = self.0.editor();

        // Parse editor command (may include args like "code --wait")
        let parts: Vec<&str> = editor.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            bail!("editor command is empty");
        };

        let status = Command::new(cmd)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", editor))?;

        if !status.success() {
            bail!("editor '{}' exited with non-zero status", editor);
        }
        Ok(())
    }
}

/// Writes `content` to a temp file, lets the editor change it, and reads
/// it back.
fn edit_in_editor<E: EditorLauncher>(editor: &E, content: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("jot-")
        .suffix(".md")
        .tempfile()
        .context("failed to create temp file for editing")?;
    file.write_all(content.as_bytes())?;
    file.flush()?;

    editor.open(file.path())?;

    std::fs::read_to_string(file.path()).context("failed to read edited content")
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) async fn handle_edit_impl<S: NoteStore, E: EditorLauncher>(
    args: &EditArgs,
    store: S,
    editor: &E,
) -> Result<()> {
    let controller = controller_for(store);
    let notes = refreshed_list(&controller).await?;
    let id = pick_note(&notes, &args.note)?.id().clone();

    let outcome = controller.on_note_clicked(&id).await;
    ensure_applied(&controller, outcome).with_context(|| format!("failed to open note {id}"))?;
    let current = controller.current_editor_fields();

    let content = match (&args.content, args.stdin, &args.title) {
        (Some(content), _, _) => content.clone(),
        (None, true, _) => read_stdin()?,
        (None, false, Some(_)) => current.content.clone(),
        (None, false, None) => edit_in_editor(editor, &current.content)?,
    };
    let title = args.title.clone().unwrap_or_else(|| current.title.clone());

    controller.on_edit(title.as_str(), content.as_str());
    if !controller.current_view().dirty {
        println!("No changes: {} [{}]", current.title, id.prefix());
        return Ok(());
    }

    let outcome = controller.on_save_clicked(title, content).await;
    ensure_applied(&controller, outcome).with_context(|| format!("failed to save note {id}"))?;

    let saved = controller
        .current_view()
        .bound
        .map(|note| note.title().to_string())
        .unwrap_or(current.title);
    println!("Saved: {} [{}]", saved, id.prefix());
    Ok(())
}

pub async fn handle_edit<S: NoteStore>(args: &EditArgs, store: S, config: &Config) -> Result<()> {
    handle_edit_impl(args, store, &CommandEditor(config)).await
}
