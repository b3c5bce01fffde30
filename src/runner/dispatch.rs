// dispatch.rs - Spawn Snakemake and wait for it

use crate::runner::command::{SnakemakeCommand, SNAKEMAKE};
use std::process::Command;

/// Run the assembled Snakemake invocation to completion.
///
/// The child inherits the current environment and standard streams; its exit
/// code is returned so the caller can surface it as our own. A child killed
/// by a signal maps to exit code 1.
pub fn dispatch(command: &SnakemakeCommand) -> Result<i32, String> {
    let status = Command::new(SNAKEMAKE)
        .args(command.args())
        .status()
        .map_err(|e| format!("Failed to launch {}: {}", SNAKEMAKE, e))?;

    Ok(status.code().unwrap_or(1))
}
