//! bisq_jpackage_args - prints the macOS jpackage arguments for the Bisq 2 installer.
//!
//! The output is meant to be appended to a jpackage invocation by the build.

use std::process;

use bisq_jpackage_args::cli;

fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
