// ABOUTME: Behavioral tests for listing tmux sessions and windows through TmuxClient

use super::fixtures::{lock_tmux, unique_session_name, ScratchSession};
use crate::require_tmux;
use anyhow::Result;
use tmux_picker::app::SessionLoader;
use tmux_picker::models::SwitchTarget;
use tmux_picker::tmux::{SessionProvider, TmuxClient, TmuxError};

#[test]
fn test_lists_created_session() -> Result<()> {
    require_tmux!();
    let _guard = lock_tmux();

    let scratch = ScratchSession::start(unique_session_name("list"), 1)?;
    let client = TmuxClient::locate()?;

    let sessions = client.list_sessions()?;
    let found = sessions.iter().find(|s| s.name == scratch.name);

    assert!(found.is_some(), "session {} missing from {:?}", scratch.name, sessions);
    assert!(!found.is_some_and(|s| s.attached), "detached session reported as attached");
    Ok(())
}

#[test]
fn test_lists_windows_in_order() -> Result<()> {
    require_tmux!();
    let _guard = lock_tmux();

    let scratch = ScratchSession::start(unique_session_name("windows"), 3)?;
    let client = TmuxClient::locate()?;

    assert_eq!(client.list_windows(&scratch.name)?, vec!["win1", "win2", "win3"]);
    Ok(())
}

#[test]
fn test_rows_for_multi_window_session() -> Result<()> {
    require_tmux!();
    let _guard = lock_tmux();

    let scratch = ScratchSession::start(unique_session_name("rows"), 2)?;
    let client = TmuxClient::locate()?;
    let rows = SessionLoader::new(&client).load_rows()?;

    let targets: Vec<String> = rows.targets().map(ToString::to_string).collect();
    let header = format!("-{}: 2 windows", scratch.name);
    let expected = vec![
        scratch.name.clone(),
        format!("{}:1", scratch.name),
        format!("{}:2", scratch.name),
    ];

    let start = rows
        .labels()
        .position(|label| label == header)
        .expect("header row for scratch session");
    assert_eq!(targets[start..start + 3].to_vec(), expected);
    Ok(())
}

#[test]
fn test_switch_to_missing_target_fails() -> Result<()> {
    require_tmux!();
    let _guard = lock_tmux();

    let client = TmuxClient::locate()?;
    let result = client.switch_to(&SwitchTarget::session(&unique_session_name("missing")));

    assert!(matches!(result, Err(TmuxError::CommandFailed { .. })));
    Ok(())
}
