use chrono::{DateTime, Utc};
use std::fmt;

/// Verbosity of an [`OutputRecord`], most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DetailLevel {
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl DetailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Error => "ERROR",
            DetailLevel::Warning => "WARNING",
            DetailLevel::Info => "INFO",
            DetailLevel::Debug => "DEBUG",
            DetailLevel::Trace => "TRACE",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub timestamp: DateTime<Utc>,
    pub level: DetailLevel,
    pub message: String,
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<7} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.message
        )
    }
}

/// Ordered, timestamped account of one lookup, kept for presentation.
///
/// This is separate from `tracing` output: it belongs to the result and is
/// rendered to the user whatever the log filter says.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    entries: Vec<OutputRecord>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(&mut self, level: DetailLevel, message: impl Into<String>) {
        self.entries.push(OutputRecord {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[OutputRecord] {
        &self.entries
    }

    /// Entries at `level` or more severe, in insertion order.
    pub fn at_most(&self, level: DetailLevel) -> impl Iterator<Item = &OutputRecord> + '_ {
        self.entries.iter().filter(move |entry| entry.level <= level)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
