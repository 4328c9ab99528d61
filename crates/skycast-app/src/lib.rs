//! skycast-app - Application state and orchestration for Skycast
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: an [`AppState`] model, a tagged [`Message`] enum, a pure
//! `update` dispatch, and an action layer that runs the fetch side effect.
//! It also owns configuration loading and the injected telemetry seam.

pub mod actions;
pub mod cities;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod telemetry;

// Re-export primary types
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, RequestId};
pub use process::process_message;
pub use state::AppState;
pub use telemetry::{LogTelemetry, NoopTelemetry, SharedTelemetry, Telemetry};
