//! Built-in log sinks.

use super::{LogLevel, LogSink};
use std::sync::Mutex;

/// Default sink: forwards messages at or above `min_level` to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    min_level: LogLevel,
}

impl TracingSink {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether a message at `level` passes the filter
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && self.min_level != LogLevel::None && level >= self.min_level
    }
}

impl LogSink for TracingSink {
    fn accept(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        match level {
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warning => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
            LogLevel::None => {}
        }
    }
}

/// Collects every message it receives.
///
/// Useful for tests and for UIs that want a transcript of a run.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages logged at exactly `level`
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    /// Whether any message at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.messages_at(level)
            .iter()
            .any(|message| message.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn accept(&self, level: LogLevel, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
