// ABOUTME: Model for tmux sessions and their windows as reported by the tmux server

/// One line of `tmux list-sessions` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Numeric part of the tmux session id (`$3` -> 3), used for ordering
    pub index: u32,
    /// The tmux session name
    pub name: String,
    /// Whether a client is currently attached to this session
    pub attached: bool,
}

impl SessionInfo {
    pub fn new(index: u32, name: impl Into<String>, attached: bool) -> Self {
        Self {
            index,
            name: name.into(),
            attached,
        }
    }
}

/// A tmux session together with its windows, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxSession {
    pub info: SessionInfo,
    pub windows: Vec<String>,
}

impl TmuxSession {
    pub fn new(info: SessionInfo, windows: Vec<String>) -> Self {
        Self { info, windows }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn index(&self) -> u32 {
        self.info.index
    }

    pub fn is_attached(&self) -> bool {
        self.info.attached
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Suffix appended to a session's row label
    pub fn attached_suffix(&self) -> &'static str {
        if self.info.attached {
            " (attached)"
        } else {
            ""
        }
    }
}
