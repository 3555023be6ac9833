use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Closed set of levels a log line may carry.
///
/// Variants are declared in ascending severity so that reports list them in a
/// stable order. Parsing only ever compares for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Case-insensitive lookup. Surrounding whitespace is not stripped, so
    /// `" INFO"` is not a level.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.into_iter().find(|level| level.as_str() == upper)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully parsed log line.
///
/// Fields are private: the only way to obtain a record is through
/// [`crate::parsers::parse_line`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LogRecord {
    timestamp: NaiveDateTime,
    level: LogLevel,
    message: String,
}

impl LogRecord {
    pub(crate) fn new(timestamp: NaiveDateTime, level: LogLevel, message: String) -> Self {
        Self {
            timestamp,
            level,
            message,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] - {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            self.level,
            self.message
        )
    }
}
