// ABOUTME: UI components for the picker screen

pub mod session_list;

pub use session_list::{SessionList, SessionListComponent};
