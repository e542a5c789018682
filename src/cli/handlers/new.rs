//! New note command handler.

use anyhow::{Context, Result};

use super::{controller_for, ensure_applied, read_stdin};
use crate::cli::NewArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::store::NoteStore;

pub async fn handle_new<S: NoteStore>(args: &NewArgs, store: S) -> Result<()> {
    let content = match (&args.content, args.stdin) {
        (Some(content), _) => content.clone(),
        (None, true) => read_stdin()?,
        (None, false) => String::new(),
    };

    // Saving from a fresh draft is a create.
    let controller = controller_for(store);
    let outcome = controller.on_save_clicked(args.title.as_str(), content).await;
    ensure_applied(&controller, outcome).context("failed to create note")?;

    let created = controller
        .current_view()
        .bound
        .context("created note was not opened")?;

    match args.format {
        OutputFormat::Human => {
            println!("Created: {} [{}]", created.title(), created.id().prefix());
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(&created));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
