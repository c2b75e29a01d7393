// ABOUTME: Picker state and the App that executes provider-backed actions

use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use tracing::{error, info};

use crate::app::events::EventHandler;
use crate::app::navigator::ListNavigator;
use crate::app::session_loader::SessionLoader;
use crate::models::{Row, RowModel, SwitchTarget};
use crate::tmux::SessionProvider;

/// Actions queued by key handling that need the session provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Switch(SwitchTarget),
    Refresh,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub rows: RowModel,
    pub navigator: ListNavigator,
    pub should_quit: bool,
    pub pending_action: Option<PendingAction>,
    /// Target the client was switched to before exiting
    pub switched_to: Option<SwitchTarget>,
}

impl AppState {
    pub fn new(rows: RowModel) -> Self {
        let navigator = ListNavigator::new(rows.len());
        Self {
            rows,
            navigator,
            ..Self::default()
        }
    }

    /// Swap in a freshly loaded listing, keeping the cursor in range
    pub fn replace_rows(&mut self, rows: RowModel) {
        self.navigator.reset(rows.len());
        self.rows = rows;
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.navigator.selected().and_then(|index| self.rows.get(index))
    }

    pub fn selected_target(&self) -> Option<&SwitchTarget> {
        self.selected_row().map(|row| &row.target)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

pub struct App<P: SessionProvider> {
    pub state: AppState,
    provider: P,
}

impl<P: SessionProvider> App<P> {
    pub fn new(provider: P) -> Self {
        Self {
            state: AppState::default(),
            provider,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Query the provider and replace the listing
    pub fn load(&mut self) -> Result<()> {
        let rows = SessionLoader::new(&self.provider)
            .load_rows()
            .context("Failed to list tmux sessions")?;
        info!("Loaded {} picker rows", rows.len());
        self.state.replace_rows(rows);
        Ok(())
    }

    /// Handle one key press, then run whatever action it queued
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if let Some(event) = EventHandler::handle_key_event(key_event, &self.state) {
            EventHandler::process_event(event, &mut self.state);
        }
        self.tick()
    }

    /// Execute the pending action, if any
    pub fn tick(&mut self) -> Result<()> {
        let Some(action) = self.state.pending_action.take() else {
            return Ok(());
        };

        match action {
            PendingAction::Refresh => self.load(),
            PendingAction::Switch(target) => {
                // Exiting regardless of how the switch goes
                self.state.quit();
                info!("Switching to {}", target);
                if let Err(e) = self.provider.switch_to(&target) {
                    error!("Switch to {} failed: {}", target, e);
                    return Err(e).with_context(|| format!("Failed to switch to '{target}'"));
                }
                self.state.switched_to = Some(target);
                Ok(())
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }
}
