// ABOUTME: Session loader that queries the provider for sessions and windows
// and turns them into picker rows

use tracing::{debug, info};

use crate::models::{RowModel, TmuxSession};
use crate::tmux::{SessionProvider, TmuxError};

pub struct SessionLoader<'a, P: SessionProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: SessionProvider + ?Sized> SessionLoader<'a, P> {
    pub const fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Load every session with its windows. Any provider failure aborts the load.
    pub fn load_sessions(&self) -> Result<Vec<TmuxSession>, TmuxError> {
        let infos = self.provider.list_sessions()?;
        info!("Found {} tmux sessions", infos.len());

        let mut sessions = Vec::with_capacity(infos.len());
        for info in infos {
            let windows = self.provider.list_windows(&info.name)?;
            debug!("Session '{}' has {} windows", info.name, windows.len());
            sessions.push(TmuxSession::new(info, windows));
        }

        Ok(sessions)
    }

    pub fn load_rows(&self) -> Result<RowModel, TmuxError> {
        let sessions = self.load_sessions()?;
        Ok(RowModel::build(&sessions))
    }
}
