//! Terminal entry point for yanote.
//!
//! # Responsibility
//! - Parse options, start file logging, then hand the terminal to the UI.
//! - Report fatal errors on stderr after the terminal is restored.

mod args;
mod error;
mod tui;

use args::Args;
use clap::Parser;
use error::CliError;
use log::info;
use std::process::ExitCode;
use yanote_core::{init_logging, NotesApp};

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("yanote: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    init_logging(&args.logging_config())?;

    let app = NotesApp::with_composer(args.initial_board(), args.initial_composer());
    info!(
        "event=ui_start module=cli status=ok notes={} version={}",
        app.board().len(),
        yanote_core::core_version()
    );
    tui::run(app)?;
    info!("event=ui_exit module=cli status=ok");
    Ok(())
}
