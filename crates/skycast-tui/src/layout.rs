//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Main header area (title + date + keybindings)
    pub header: Rect,

    /// Search bar (the suggestion dropdown overlays below it)
    pub search: Rect,

    /// Popular-city quick-select row
    pub cities: Rect,

    /// Dashboard / skeleton / error banner area
    pub content: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Length(3), // Search bar (bordered)
        Constraint::Length(1), // Popular-city row
        Constraint::Min(10),   // Content
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        cities: chunks[2],
        content: chunks[3],
    }
}
