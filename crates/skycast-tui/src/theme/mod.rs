//! Centralized theme system for the dashboard.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Condition glyphs and spinner frames

pub mod icons;
pub mod palette;
pub mod styles;
