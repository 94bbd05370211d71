//! # Wallclock
//!
//! A minimal 24-hour wall clock with minute resolution.
//!
//! ## Core Concepts
//!
//! - **Clock**: an hour/minute pair. `advance` moves it forward one minute,
//!   rolling minutes over into hours at 60 and wrapping hours to midnight at 24.
//! - **Loop styles**: the demo driver runs a clock with a `for` loop, a
//!   `while` loop, or a body-first (do-while) loop; all three print the same
//!   output.
//! - **Configuration-Driven**: the demo's seed, advance count, and loop styles
//!   come from a `DemoConfig`, optionally loaded from `wallclock.toml` and
//!   `WALLCLOCK_*` environment variables.
//!
//! ## Example Usage
//!
//! ```rust
//! use wallclock::prelude::*;
//!
//! let mut clock = Clock::new(23, 59);
//! assert_eq!(clock.format(), "23:59");
//!
//! clock.advance();
//! assert_eq!(clock.format(), "00:00");
//! ```

pub const CLOCK_NAME: &str = "Wallclock";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Declare all the modules in the crate.
pub mod clock;
pub mod common;
pub mod config;
pub mod demo;

/// A prelude module for easy importing of the most common wallclock types.
pub mod prelude {
    pub use crate::clock::Clock;
    pub use crate::common::ClockError;
    pub use crate::config::{DemoConfig, LoopStyle};
}
