use std::process::ExitCode;

use passgen::{cli, exits};

fn main() -> ExitCode {
    exits::harden();
    cli::run()
}
