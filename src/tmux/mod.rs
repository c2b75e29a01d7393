// ABOUTME: Session/window provider module
//
// Defines the provider seam the picker talks to and the tmux-backed
// implementation used by the binary:
// - Enumerate sessions (id, name, attached flag)
// - Enumerate a session's windows in display order
// - Switch the current client to a session or window

pub mod client;
pub mod error;
pub mod parse;

pub use client::TmuxClient;
pub use error::TmuxError;

use crate::models::{SessionInfo, SwitchTarget};

/// Source of sessions and windows, and the action that switches between them
#[cfg_attr(test, mockall::automock)]
pub trait SessionProvider {
    /// List all sessions in provider order
    fn list_sessions(&self) -> Result<Vec<SessionInfo>, TmuxError>;

    /// List the window names of one session, in display order
    fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError>;

    /// Switch the active client to `target`
    fn switch_to(&self, target: &SwitchTarget) -> Result<(), TmuxError>;
}

impl<P: SessionProvider + ?Sized> SessionProvider for &P {
    fn list_sessions(&self) -> Result<Vec<SessionInfo>, TmuxError> {
        (**self).list_sessions()
    }

    fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError> {
        (**self).list_windows(session)
    }

    fn switch_to(&self, target: &SwitchTarget) -> Result<(), TmuxError> {
        (**self).switch_to(target)
    }
}
