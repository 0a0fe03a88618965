//! jpp entry point
//!
//! Parses the command line, runs the render and reports failures with
//! [`user_friendly_error`], exiting with status 1.

use anyhow::Result;
use jpp_cli::cli;
use jpp_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse_normalized();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
