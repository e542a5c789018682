//! jot - a local note manager built around an editing session
//!
//! The [`session`] module holds the editing-session controller: a
//! Draft/Bound state machine over a [`store::NoteStore`], with a cached note
//! list and a status line. The CLI in [`cli`] drives it one gesture at a
//! time.

pub mod cli;
pub mod domain;
pub mod infra;
pub mod session;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::path::Path;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_edit, handle_list, handle_new, handle_restore, handle_rm, handle_search,
        handle_shell, handle_show, open_store,
    },
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(cli.verbose, config.log_level.as_deref());

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(
            args.shell,
            &mut Cli::command(),
            "jot",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let data_dir = config.data_dir(cli.dir.as_ref());
    log::debug!("data dir: {}", data_dir.display());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(dispatch(&cli.command, &config, &data_dir))
}

async fn dispatch(command: &Command, config: &Config, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;

    match command {
        Command::List(args) => handle_list(args, store).await,
        Command::Show(args) => handle_show(args, store).await,
        Command::New(args) => handle_new(args, store).await,
        Command::Edit(args) => handle_edit(args, store, config).await,
        Command::Rm(args) => handle_rm(args, store).await,
        Command::Restore(args) => handle_restore(args, store).await,
        Command::Search(args) => handle_search(args, store).await,
        Command::Shell => handle_shell(store).await,
        Command::Completions(_) => Ok(()),
    }
}
