//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::HabitrError;

/// Generate a shell completion script for the given shell.
///
/// # Errors
///
/// Returns `HabitrError::InvalidInput` if the generated script is not
/// valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, HabitrError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "habitr", &mut buf);
    String::from_utf8(buf).map_err(|e| HabitrError::InvalidInput(format!("UTF-8 error: {e}")))
}
