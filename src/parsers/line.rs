use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::record::{LogLevel, LogRecord};
use crate::timestamp::parse_local_timestamp;

/// `[<timestamp>] [<level>] - <message>`, anchored at both ends. The first two
/// groups cannot contain brackets, so a message containing `] [` never shifts
/// the split point.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([^\[\]]*)\] \[([^\[\]]*)\] - (.*)$").expect("line grammar is a valid regex")
});

/// Why a line did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("blank line")]
    Blank,
    #[error("line does not match expected log format: \"{0}\"")]
    MalformedFormat(String),
    #[error("could not parse timestamp: \"{0}\"")]
    InvalidTimestamp(String),
    #[error("invalid log level found: \"{0}\"")]
    InvalidLevel(String),
}

impl ParseFailure {
    /// Short category name used in summaries.
    pub fn category(&self) -> &'static str {
        match self {
            ParseFailure::Blank => "blank",
            ParseFailure::MalformedFormat(_) => "malformed_format",
            ParseFailure::InvalidTimestamp(_) => "invalid_timestamp",
            ParseFailure::InvalidLevel(_) => "invalid_level",
        }
    }

    /// The text that caused the failure (empty for blank lines).
    pub fn offending_text(&self) -> &str {
        match self {
            ParseFailure::Blank => "",
            ParseFailure::MalformedFormat(text)
            | ParseFailure::InvalidTimestamp(text)
            | ParseFailure::InvalidLevel(text) => text,
        }
    }
}

pub type ParseOutcome = Result<LogRecord, ParseFailure>;

/// Parse a single raw line into a [`LogRecord`].
///
/// `None` stands for an absent line. The function has no side effects; the
/// caller decides what to do with a failure.
pub fn parse_line(line: Option<&str>) -> ParseOutcome {
    let line = match line {
        Some(line) if !line.trim().is_empty() => line,
        _ => return Err(ParseFailure::Blank),
    };

    let caps = LINE_PATTERN
        .captures(line)
        .ok_or_else(|| ParseFailure::MalformedFormat(line.to_string()))?;

    // All three groups are mandatory in the pattern
    let (ts_str, level_str, message) = match (caps.get(1), caps.get(2), caps.get(3)) {
        (Some(ts), Some(level), Some(message)) => (ts.as_str(), level.as_str(), message.as_str()),
        _ => return Err(ParseFailure::MalformedFormat(line.to_string())),
    };

    let timestamp = parse_local_timestamp(ts_str)
        .ok_or_else(|| ParseFailure::InvalidTimestamp(ts_str.to_string()))?;
    let level = LogLevel::from_name(level_str)
        .ok_or_else(|| ParseFailure::InvalidLevel(level_str.to_string()))?;

    Ok(LogRecord::new(timestamp, level, message.to_string()))
}
