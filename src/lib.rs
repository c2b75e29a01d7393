// ABOUTME: Library crate for tmux-picker exposing the picker engine for testing

#![allow(missing_docs)]

pub mod app;
pub mod components;
pub mod models;
pub mod tmux;
