// ABOUTME: Shared test fixtures and utilities for behavioral tests
//
// Provides:
// - tmux_available(): Check if tmux is installed
// - require_tmux!(): Skip test if tmux unavailable
// - ScratchSession: detached tmux session killed on drop
// - lock_tmux(): serialize tests that touch the tmux server

use anyhow::Result;
use std::process::Command;
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

/// Serializes tests that create sessions, so one test's cleanup cannot make a
/// session vanish while another test is listing windows
static TMUX_LOCK: Mutex<()> = Mutex::new(());

pub fn lock_tmux() -> MutexGuard<'static, ()> {
    TMUX_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Check if tmux is available on the system
pub fn tmux_available() -> bool {
    Command::new("tmux")
        .args(["-V"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Macro to skip test if tmux is not available
#[macro_export]
macro_rules! require_tmux {
    () => {
        if !super::fixtures::tmux_available() {
            eprintln!("Skipping test: tmux not available");
            return Ok(());
        }
    };
}

/// Generate a session name unlikely to collide with real sessions
pub fn unique_session_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("picker_test_{prefix}_{}_{nanos}", std::process::id())
}

/// Detached tmux session that is killed when dropped
pub struct ScratchSession {
    pub name: String,
}

impl ScratchSession {
    /// Start a detached session with `windows` windows (at least one)
    pub fn start(name: String, windows: usize) -> Result<Self> {
        let output = Command::new("tmux")
            .args(["new-session", "-d", "-s", &name, "-n", "win1"])
            .output()?;
        if !output.status.success() {
            anyhow::bail!("tmux new-session failed: {}", String::from_utf8_lossy(&output.stderr));
        }
        let session = Self { name };

        for position in 2..=windows {
            let output = Command::new("tmux")
                .args(["new-window", "-d", "-t", &session.name, "-n", &format!("win{position}")])
                .output()?;
            if !output.status.success() {
                anyhow::bail!("tmux new-window failed: {}", String::from_utf8_lossy(&output.stderr));
            }
        }

        Ok(session)
    }
}

impl Drop for ScratchSession {
    fn drop(&mut self) {
        let _ = Command::new("tmux")
            .args(["kill-session", "-t", &self.name])
            .output();
    }
}
