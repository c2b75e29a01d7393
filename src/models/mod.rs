// ABOUTME: Core data models for tmux sessions and the flattened picker rows

pub mod row;
pub mod tmux_session;

pub use row::{Row, RowKind, RowModel, SwitchTarget};
pub use tmux_session::{SessionInfo, TmuxSession};
