// ABOUTME: Flattened, display-ordered rows built from the session/window hierarchy
//
// Each row carries the target it switches to, so the target sequence is always
// index-aligned with the row sequence.

use std::fmt;

use super::TmuxSession;

/// Target identifier understood by `tmux switch-client -t`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwitchTarget(String);

impl SwitchTarget {
    /// Target the session itself
    pub fn session(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Target a window by its 1-based position within the session
    pub fn window(session: &str, position: usize) -> Self {
        Self(format!("{session}:{position}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SwitchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Session with exactly one window, shown on a single line
    Single,
    /// Session line introducing its window rows
    Header,
    /// Window belonging to the preceding header
    Window,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub target: SwitchTarget,
    pub kind: RowKind,
}

/// The rows of one listing, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowModel {
    rows: Vec<Row>,
}

impl RowModel {
    /// Build rows from sessions.
    ///
    /// Sessions are ordered by ascending index (ties keep their input order).
    /// A single-window session becomes one row targeting the session. Any other
    /// session becomes a header row targeting the session followed by one row
    /// per window targeting `session:position`.
    pub fn build(sessions: &[TmuxSession]) -> Self {
        let mut ordered: Vec<&TmuxSession> = sessions.iter().collect();
        ordered.sort_by_key(|session| session.index());

        let mut rows = Vec::new();
        for session in ordered {
            let name = session.name();

            if let [window] = session.windows.as_slice() {
                rows.push(Row {
                    label: format!("- {name} -> {window}{}", session.attached_suffix()),
                    target: SwitchTarget::session(name),
                    kind: RowKind::Single,
                });
                continue;
            }

            rows.push(Row {
                label: format!(
                    "-{name}: {} windows{}",
                    session.window_count(),
                    session.attached_suffix()
                ),
                target: SwitchTarget::session(name),
                kind: RowKind::Header,
            });

            for (position, window) in session.windows.iter().enumerate() {
                rows.push(Row {
                    label: format!("--> {window}"),
                    target: SwitchTarget::window(name, position + 1),
                    kind: RowKind::Window,
                });
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn target(&self, index: usize) -> Option<&SwitchTarget> {
        self.rows.get(index).map(|row| &row.target)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.label.as_str())
    }

    pub fn targets(&self) -> impl Iterator<Item = &SwitchTarget> {
        self.rows.iter().map(|row| &row.target)
    }
}
