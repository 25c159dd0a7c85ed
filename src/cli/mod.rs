mod context;
mod flags;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};

pub use context::Context;
pub use flags::CliFlags;

use crate::exits;
use crate::logging;
use crate::settings::Settings;

/// Parse arguments, generate, and map the outcome to an exit code.
pub fn run() -> ExitCode {
    let flags = CliFlags::parse();
    let settings = Settings::try_from(flags);

    let level = settings
        .as_ref()
        .map(|s| s.log_level)
        .unwrap_or_default();
    logging::init(level);

    info!("starting password generator");
    debug!("log level: {level}");

    let context = match settings.and_then(Context::new) {
        Ok(context) => context,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(exits::CONFIG_ERROR);
        }
    };

    let stdout = std::io::stdout();
    match context.generate_output(&mut rand::rng(), stdout.lock()) {
        Ok(summary) => {
            info!(
                written = summary.written,
                failed = summary.failed,
                "generation finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to write passwords: {e}");
            ExitCode::from(exits::OUTPUT_ERROR)
        }
    }
}
