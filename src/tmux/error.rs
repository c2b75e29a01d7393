// ABOUTME: Error type for tmux provider operations

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while talking to the tmux server
#[derive(Error, Debug)]
pub enum TmuxError {
    /// The tmux binary is not on PATH
    #[error("tmux executable not found: {0}")]
    NotInstalled(#[source] which::Error),

    /// The tmux process could not be started
    #[error("Failed to run `tmux {command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// tmux ran but reported failure
    #[error("`tmux {command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}
