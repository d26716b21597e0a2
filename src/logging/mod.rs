//! # Logging Module
//!
//! Leveled log events emitted by the organizer.
//!
//! The core never decides where messages go. It hands `(level, message)`
//! pairs to a [`LogSink`]; filtering, formatting and destination belong to
//! the sink.
//!
//! ## Example
//! ```rust,ignore
//! let sink = TracingSink::new(LogLevel::Info);
//! let organizer = MediaOrganizer::new(profiles, sink);
//! ```

mod sinks;

pub use sinks::{MemorySink, TracingSink};

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log event, ascending.
///
/// `None` is only meaningful as a minimum level: it suppresses everything.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
    None,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
            LogLevel::None => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "none" => Ok(LogLevel::None),
            _ => Err(ConfigError::UnknownLogLevel {
                value: s.to_string(),
            }),
        }
    }
}

/// Anything that accepts leveled messages.
///
/// Sinks are shared by every profile in a run, so `accept` takes `&self`
/// and must tolerate being called any number of times.
pub trait LogSink {
    fn accept(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.accept(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.accept(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.accept(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.accept(LogLevel::Error, message);
    }
}

/// Adapts a closure into a [`LogSink`].
pub struct FnSink<F>(pub F);

impl<F> LogSink for FnSink<F>
where
    F: Fn(LogLevel, &str),
{
    fn accept(&self, level: LogLevel, message: &str) {
        (self.0)(level, message)
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn accept(&self, level: LogLevel, message: &str) {
        (**self).accept(level, message)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn accept(&self, level: LogLevel, message: &str) {
        (**self).accept(level, message)
    }
}
