//! # Media Organizer
//!
//! Sorts photos and other media into a date-based directory tree.
//!
//! ## How a file is placed
//! - Its date comes from EXIF metadata, a date in its name, or its
//!   modification time, in that order, as far as each is enabled
//! - The target mask (`Y/Y-m-d` by default) turns that date into a directory
//! - An existing file of the same name is never replaced unless the profile
//!   says so; the newcomer gets a `_0`, `_1`, ... suffix instead
//!
//! ## Architecture
//! - `core` - The engine: profiles, scanning, dating, moving, running
//! - `events` - Event-driven progress reporting (GUI-ready)
//! - `logging` - The log sink seam and its built-in sinks
//! - `error` - Error types with the offending path in every message

pub mod core;
pub mod error;
pub mod events;
pub mod logging;

// Re-export commonly used types at the crate root
pub use crate::core::{MediaOrganizer, Profile, ProfileOverrides, ProfileSet, RunReport};
pub use error::{OrganizerError, Result};
pub use logging::{FnSink, LogLevel, LogSink, MemorySink, TracingSink};

/// Initialize tracing for the library
///
/// Installs a `fmt` subscriber. `RUST_LOG` narrows it when set; otherwise
/// every event passes and the sink's minimum level is the only filter.
/// Should be called by the application; does nothing if a subscriber is
/// already installed.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
