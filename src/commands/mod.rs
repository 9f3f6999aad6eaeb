//! Command dispatch and handlers.

pub mod check;
pub mod link;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::LinkerConfig;
use crate::context::ServiceContext;

/// Environment variable that turns on cassette recording.
pub const RECORD_ENV: &str = "INVLINK_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `INVLINK_RECORD` is set to a directory path, every filesystem call
/// is recorded to a cassette in a timestamped directory below it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let target = command.target();
    let config = LinkerConfig::resolve(target.inventory.as_deref(), target.root.as_deref());
    log::debug!("inventory {}, root {}", config.inventory.display(), config.root.display());

    let (ctx, session) = if let Ok(dir) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(dir), &config.inventory)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = dispatch_with_context(command, &ctx, &config);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &LinkerConfig,
) -> Result<(), String> {
    match command {
        Command::Link { dry_run, .. } => link::run(ctx, config, *dry_run),
        Command::Check { .. } => check::run(ctx, config),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
