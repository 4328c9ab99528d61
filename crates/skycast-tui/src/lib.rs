//! skycast-tui - Terminal UI for Skycast
//!
//! This crate provides the ratatui-based terminal interface: widgets, the
//! view function, terminal event polling, and the main event loop driving
//! the state machine from skycast-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, run_with_provider};
