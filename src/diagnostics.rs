//! Side channel for non-fatal failures found during ingestion.
//!
//! Ingestion units push [`Diagnostic`]s into a [`DiagnosticSink`]; a single
//! [`DiagnosticReporter`] drains the stream on its own thread and prints or
//! tallies them according to the configured [`ErrorReportStyle`].

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;

use crate::parsers::ParseFailure;

const MAX_EXAMPLES_PER_CATEGORY: usize = 3;

/// How diagnostics are surfaced to the user
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorReportStyle {
    /// Print each diagnostic as it arrives
    #[default]
    Print,
    /// Print counts and a few examples per category at the end
    Summary,
    /// Only count diagnostics
    Off,
}

/// A non-fatal failure reported by an ingestion unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line that did not produce a record
    Parse {
        file: PathBuf,
        line_number: usize,
        failure: ParseFailure,
    },
    /// The file could not be opened or read; none of its records were kept
    File { file: PathBuf, error: String },
    /// The ingestion unit itself failed unexpectedly
    UnitFault { file: PathBuf, message: String },
}

impl Diagnostic {
    pub fn file(&self) -> &Path {
        match self {
            Diagnostic::Parse { file, .. }
            | Diagnostic::File { file, .. }
            | Diagnostic::UnitFault { file, .. } => file,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Diagnostic::Parse { failure, .. } => failure.category(),
            Diagnostic::File { .. } => "file_error",
            Diagnostic::UnitFault { .. } => "unit_fault",
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(
            self,
            Diagnostic::Parse {
                failure: ParseFailure::Blank,
                ..
            }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Parse {
                file,
                line_number,
                failure,
            } => write!(f, "{}:{}: {}", file.display(), line_number, failure),
            // The error text already names the file
            Diagnostic::File { error, .. } => write!(f, "{}", error),
            Diagnostic::UnitFault { file, message } => {
                write!(f, "{}: ingestion unit failed: {}", file.display(), message)
            }
        }
    }
}

/// Cloneable sending half of the diagnostics stream.
///
/// Reporting never fails: once the reporter is gone, diagnostics are dropped.
#[derive(Debug, Clone)]
pub struct DiagnosticSink {
    sender: Option<Sender<Diagnostic>>,
}

impl DiagnosticSink {
    pub fn channel() -> (Self, Receiver<Diagnostic>) {
        let (sender, receiver) = unbounded();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    /// A sink that throws everything away
    pub fn discard() -> Self {
        Self { sender: None }
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(diagnostic);
        }
    }
}

/// Counts and examples gathered by a [`DiagnosticReporter`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticSummary {
    counts: BTreeMap<&'static str, usize>,
    examples: BTreeMap<&'static str, Vec<String>>,
}

impl DiagnosticSummary {
    fn track(&mut self, diagnostic: &Diagnostic) {
        let category = diagnostic.category();
        *self.counts.entry(category).or_insert(0) += 1;

        if diagnostic.is_blank() {
            return;
        }
        let examples = self.examples.entry(category).or_default();
        if examples.len() < MAX_EXAMPLES_PER_CATEGORY {
            examples.push(diagnostic.to_string());
        }
    }

    pub fn count(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Diagnostics worth telling the user about (blank lines excluded)
    pub fn reportable(&self) -> usize {
        self.total() - self.count("blank")
    }

    pub fn render(&self) -> Option<String> {
        if self.reportable() == 0 {
            return None;
        }

        let mut out = String::from("Diagnostics summary:");
        for (category, count) in &self.counts {
            if *category == "blank" {
                continue;
            }
            out.push_str(&format!("\n  {}: {}", category, count));
            for example in self.examples.get(category).into_iter().flatten() {
                out.push_str(&format!("\n    e.g. {}", example));
            }
        }
        Some(out)
    }
}

/// Consumes diagnostics and reports them per [`ErrorReportStyle`]
pub struct DiagnosticReporter<W: Write> {
    style: ErrorReportStyle,
    summary: DiagnosticSummary,
    writer: W,
}

impl<W: Write> DiagnosticReporter<W> {
    pub fn new(style: ErrorReportStyle, writer: W) -> Self {
        Self {
            style,
            summary: DiagnosticSummary::default(),
            writer,
        }
    }

    pub fn report(&mut self, diagnostic: &Diagnostic) {
        self.summary.track(diagnostic);

        if self.style == ErrorReportStyle::Print && !diagnostic.is_blank() {
            let _ = writeln!(self.writer, "logsift: warning: {}", diagnostic);
        }
    }

    /// Drain `receiver` until every sink has been dropped
    pub fn drain(&mut self, receiver: &Receiver<Diagnostic>) {
        for diagnostic in receiver.iter() {
            self.report(&diagnostic);
        }
    }

    pub fn finish(mut self) -> DiagnosticSummary {
        if self.style == ErrorReportStyle::Summary {
            if let Some(rendered) = self.summary.render() {
                let _ = writeln!(self.writer, "{}", rendered);
            }
        }
        let _ = self.writer.flush();
        self.summary
    }
}

/// Run a reporter writing to stderr on a dedicated thread.
///
/// The thread ends once every [`DiagnosticSink`] clone has been dropped.
pub fn spawn_stderr_reporter(
    style: ErrorReportStyle,
    receiver: Receiver<Diagnostic>,
) -> io::Result<thread::JoinHandle<DiagnosticSummary>> {
    thread::Builder::new()
        .name("diagnostics".to_string())
        .spawn(move || {
            let mut reporter = DiagnosticReporter::new(style, io::stderr());
            reporter.drain(&receiver);
            reporter.finish()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(line_number: usize, text: &str) -> Diagnostic {
        Diagnostic::Parse {
            file: PathBuf::from("app.log"),
            line_number,
            failure: ParseFailure::MalformedFormat(text.to_string()),
        }
    }

    fn blank(line_number: usize) -> Diagnostic {
        Diagnostic::Parse {
            file: PathBuf::from("app.log"),
            line_number,
            failure: ParseFailure::Blank,
        }
    }

    #[test]
    fn test_diagnostic_display() {
        assert_eq!(
            malformed(3, "garbage line").to_string(),
            "app.log:3: line does not match expected log format: \"garbage line\""
        );

        let file_error = Diagnostic::File {
            file: PathBuf::from("gone.log"),
            error: "cannot open gone.log: No such file or directory".to_string(),
        };
        assert_eq!(
            file_error.to_string(),
            "cannot open gone.log: No such file or directory"
        );
        assert_eq!(file_error.category(), "file_error");
    }

    #[test]
    fn test_print_style_skips_blank_lines() {
        let mut out = Vec::new();
        let mut reporter = DiagnosticReporter::new(ErrorReportStyle::Print, &mut out);
        reporter.report(&malformed(1, "junk"));
        reporter.report(&blank(2));
        let summary = reporter.finish();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert!(printed.starts_with("logsift: warning: app.log:1:"));
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.count("blank"), 1);
        assert_eq!(summary.reportable(), 1);
    }

    #[test]
    fn test_summary_style_prints_once_with_capped_examples() {
        let mut out = Vec::new();
        let mut reporter = DiagnosticReporter::new(ErrorReportStyle::Summary, &mut out);
        for i in 1..=5 {
            reporter.report(&malformed(i, "junk"));
        }
        let summary = reporter.finish();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Diagnostics summary:"));
        assert!(printed.contains("malformed_format: 5"));
        assert_eq!(printed.matches("e.g.").count(), MAX_EXAMPLES_PER_CATEGORY);
        assert_eq!(summary.count("malformed_format"), 5);
    }

    #[test]
    fn test_off_style_is_silent() {
        let mut out = Vec::new();
        let mut reporter = DiagnosticReporter::new(ErrorReportStyle::Off, &mut out);
        reporter.report(&malformed(1, "junk"));
        let summary = reporter.finish();

        assert!(out.is_empty());
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn test_sink_channel_and_drain() {
        let (sink, receiver) = DiagnosticSink::channel();
        let other = sink.clone();
        sink.report(malformed(1, "a"));
        other.report(blank(2));
        drop(sink);
        drop(other);

        let mut reporter = DiagnosticReporter::new(ErrorReportStyle::Off, Vec::new());
        reporter.drain(&receiver);
        assert_eq!(reporter.finish().total(), 2);
    }

    #[test]
    fn test_discard_sink_and_closed_channel_never_fail() {
        DiagnosticSink::discard().report(blank(1));

        let (sink, receiver) = DiagnosticSink::channel();
        drop(receiver);
        sink.report(malformed(1, "still fine"));
    }

    #[test]
    fn test_summary_render_empty_when_only_blanks() {
        let mut summary = DiagnosticSummary::default();
        summary.track(&blank(1));
        assert!(summary.render().is_none());
    }
}
