// ABOUTME: Picker application state, key handling and provider-backed actions

pub mod events;
pub mod navigator;
pub mod session_loader;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use navigator::ListNavigator;
pub use session_loader::SessionLoader;
pub use state::{App, AppState, PendingAction};
