//! Accumulating diagnostics for lexical errors.
//!
//! The reporter never interrupts control flow: the scanner appends a
//! diagnostic and keeps going, so a single scan can surface every lexical
//! problem in a file at once.
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// What went wrong, as structured data. Message text is rendered at
/// presentation time, so tests can assert on the kind and position without
/// parsing strings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// A single recoverable report of malformed input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line the offending input sits on.
    pub line: usize,
    /// 0-based column on that line.
    pub column: usize,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "error: {} [line {}, column {}]", self.kind, self.line, self.column)
    }
}

/// An append-only sink for diagnostics, held by exactly one scanner for the
/// duration of one scan. Nothing is ever discarded or deduplicated; repeated
/// identical errors accumulate independently.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic. Cannot fail.
    pub fn report(&mut self, kind: DiagnosticKind, line: usize, column: usize) {
        self.diagnostics.push(Diagnostic { kind, line, column });
    }

    /// Number of diagnostics recorded so far.
    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    /// All diagnostics, in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Renders one human-readable line per diagnostic, in insertion order.
    pub fn render_all(&self) -> String {
        if self.diagnostics.is_empty() {
            return "no errors".to_string();
        }

        self.diagnostics
            .iter()
            .map(Diagnostic::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_accumulate_in_order() {
        let mut reporter = Reporter::new();

        reporter.report(DiagnosticKind::UnexpectedCharacter('@'), 1, 0);
        reporter.report(DiagnosticKind::UnterminatedString, 2, 4);

        assert_eq!(reporter.count(), 2);
        assert_eq!(
            reporter.diagnostics()[0].kind,
            DiagnosticKind::UnexpectedCharacter('@')
        );
        assert_eq!(reporter.diagnostics()[1].kind, DiagnosticKind::UnterminatedString);
        assert_eq!(reporter.diagnostics()[1].line, 2);
        assert_eq!(reporter.diagnostics()[1].column, 4);
    }

    #[test]
    fn identical_reports_are_not_deduplicated() {
        let mut reporter = Reporter::new();

        reporter.report(DiagnosticKind::UnexpectedCharacter('$'), 1, 0);
        reporter.report(DiagnosticKind::UnexpectedCharacter('$'), 1, 0);

        assert_eq!(reporter.count(), 2);
    }

    #[test]
    fn render_all_without_diagnostics() {
        let reporter = Reporter::new();

        assert_eq!(reporter.render_all(), "no errors");
    }

    #[test]
    fn render_all_produces_one_line_per_diagnostic() {
        let mut reporter = Reporter::new();

        reporter.report(DiagnosticKind::UnexpectedCharacter('@'), 1, 0);
        reporter.report(DiagnosticKind::UnterminatedString, 3, 7);

        assert_eq!(reporter.render_all().lines().count(), 2);
    }
}
