//! Command dispatch and handlers.

pub mod derive;
pub mod generate;
pub mod word;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Configuration comes from `WALLSTAG_*` variables, overridden by the
/// command's flags. When `WALLSTAG_RECORD` is set to a directory path, all
/// port interactions are recorded to per-port cassette files below it.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = effective_config(command, GeneratorConfig::from_env()?);

    let (ctx, session) = if let Ok(path) = env::var("WALLSTAG_RECORD") {
        let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(path), &config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    let result = dispatch_with_context(command, &ctx, &config);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Applies the command's flags on top of the environment configuration.
#[must_use]
pub fn effective_config(command: &Command, mut config: GeneratorConfig) -> GeneratorConfig {
    match command {
        Command::Generate { seed, max_attempts, taken, .. } => {
            config.seed = seed.or(config.seed);
            config.max_attempts = max_attempts.unwrap_or(config.max_attempts);
            if let Some(path) = taken {
                config.taken_file = Some(path.clone());
            }
        }
        Command::Derive { seed, .. } | Command::Word { seed } => {
            config.seed = seed.or(config.seed);
            // These commands never consult the taken store.
            config.taken_file = None;
        }
    }
    config
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &GeneratorConfig,
) -> Result<(), String> {
    match command {
        Command::Generate { name, shape, json, strict, .. } => {
            let output = generate::Output { json: *json, strict: *strict };
            generate::run(ctx, config, name, *shape, output)
        }
        Command::Derive { name, shape, .. } => derive::run(ctx, config, name, *shape),
        Command::Word { .. } => word::run(ctx, config),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
