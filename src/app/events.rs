// ABOUTME: Event handling system for keyboard input and picker actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::app::state::{AppState, PendingAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    NextRow,
    PreviousRow,
    GoToTop,
    GoToBottom,
    SwitchToSelected,
    Refresh,
}

pub struct EventHandler;

impl EventHandler {
    /// Map a key press to an app event. Returns `None` for keys the picker ignores.
    pub fn handle_key_event(key_event: KeyEvent, _state: &AppState) -> Option<AppEvent> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        let event = match key_event.code {
            KeyCode::Char('c') if ctrl => Some(AppEvent::Quit),
            KeyCode::Char('n') if ctrl => Some(AppEvent::NextRow),
            KeyCode::Char('p' | 'k') if ctrl => Some(AppEvent::PreviousRow),
            _ if ctrl => None,

            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::PreviousRow),
            KeyCode::Char('g') | KeyCode::Home => Some(AppEvent::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(AppEvent::GoToBottom),
            KeyCode::Enter => Some(AppEvent::SwitchToSelected),
            KeyCode::Char('r') => Some(AppEvent::Refresh),
            _ => None,
        };

        debug!("Key {:?} -> {:?}", key_event.code, event);
        event
    }

    /// Apply an event to the state. Actions that need the provider are queued
    /// as `pending_action` for `App::tick`.
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::NextRow => state.navigator.next(),
            AppEvent::PreviousRow => state.navigator.prev(),
            AppEvent::GoToTop => state.navigator.first(),
            AppEvent::GoToBottom => state.navigator.last(),
            AppEvent::SwitchToSelected => {
                if let Some(target) = state.selected_target().cloned() {
                    state.pending_action = Some(PendingAction::Switch(target));
                } else {
                    debug!("Nothing selected, ignoring switch");
                }
            }
            AppEvent::Refresh => state.pending_action = Some(PendingAction::Refresh),
        }
    }
}
