// ABOUTME: SessionProvider backed by the tmux command line client
//
// Every call runs tmux synchronously and waits for it to exit; there is no
// timeout, so a hung tmux server hangs the caller.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use super::parse::{parse_sessions, parse_windows, SESSION_FORMAT, WINDOW_FORMAT};
use super::{SessionProvider, TmuxError};
use crate::models::{SessionInfo, SwitchTarget};

#[derive(Debug, Clone)]
pub struct TmuxClient {
    program: PathBuf,
}

impl TmuxClient {
    /// Resolve the tmux binary on PATH
    pub fn locate() -> Result<Self, TmuxError> {
        let program = which::which("tmux").map_err(TmuxError::NotInstalled)?;
        debug!("Using tmux binary at {}", program.display());
        Ok(Self { program })
    }

    /// Use an explicit tmux binary
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let command = args.join(" ");
        debug!("Running tmux {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| TmuxError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TmuxError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl SessionProvider for TmuxClient {
    fn list_sessions(&self) -> Result<Vec<SessionInfo>, TmuxError> {
        let output = self.run(&["list-sessions", "-F", SESSION_FORMAT])?;
        Ok(parse_sessions(&output))
    }

    fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError> {
        let output = self.run(&["list-windows", "-t", session, "-F", WINDOW_FORMAT])?;
        Ok(parse_windows(&output))
    }

    fn switch_to(&self, target: &SwitchTarget) -> Result<(), TmuxError> {
        self.run(&["switch-client", "-t", target.as_str()])?;
        info!("Switched tmux client to {}", target);
        Ok(())
    }
}
