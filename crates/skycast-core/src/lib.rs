//! # skycast-core - Core Domain Types
//!
//! Foundation crate for Skycast. Provides the weather snapshot domain type,
//! the pure display-metrics formatter, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`snapshot`)
//! - [`WeatherSnapshot`] - One current-conditions observation for a city
//! - [`Condition`] - Closed primary-condition set with an Unknown fallback
//!
//! ### Derived Metrics (`metrics`)
//! - [`DerivedMetrics`] - Display-ready fields computed from a snapshot
//! - [`compass_point()`] - 16-point compass lookup from wind degrees
//! - [`ConditionTheme`], [`ThemeColor`] - Per-condition visual theme
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use skycast_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod metrics;
pub mod snapshot;

/// Prelude for common imports used throughout all Skycast crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use metrics::{compass_point, condition_theme, ConditionTheme, DerivedMetrics, ThemeColor};
pub use snapshot::{Condition, WeatherSnapshot};
