//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties an error kind to the regions of source code it
//! originated from.

// lets `#[derive(ErrorKind)]` refer to this crate by name in the tests below
#[cfg(test)]
extern crate self as poly_error;

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display}, io::{self, Write}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading an expression.
pub trait ErrorKind: Debug + Send {
    /// A short, single-line description of the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,

    /// Whether the error is fatal. A fatal error stops any backtracking parser from trying
    /// alternative rules.
    pub fatal: bool,
}

impl Error {
    /// Creates a new, non-fatal error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), fatal: false }
    }

    /// Creates a new fatal error with the given spans and kind.
    pub fn new_fatal(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), fatal: true }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, using `source` as the text the spans
    /// point into.
    pub fn write_report(&self, src_id: &str, source: &str, writer: impl Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(source)), writer)
    }

    /// Prints the report for this error to standard error.
    pub fn report_to_stderr(&self, src_id: &str, source: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(source)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spans.first() {
            Some(span) => write!(f, "{} at {}..{}", self.kind.message(), span.start, span.end),
            None => write!(f, "{}", self.kind.message()),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use poly_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "something went wrong",
        labels = ["this part", "and this part"],
        help = "try again",
    )]
    struct TwoLabels;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("found `{}`", found),
        labels = ["here"],
    )]
    struct WithField {
        found: char,
    }

    /// Renders the error report for the given source without any color codes.
    fn render(err: &Error, source: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", source, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn report_contains_message_labels_and_help() {
        let err = Error::new(vec![0..1, 4..5], TwoLabels);
        let report = render(&err, "a + b");

        assert!(report.contains("something went wrong"));
        assert!(report.contains("this part"));
        assert!(report.contains("and this part"));
        assert!(report.contains("try again"));
    }

    #[test]
    fn message_uses_fields() {
        let err = Error::new(vec![2..3], WithField { found: '-' });
        assert_eq!(err.kind.message(), "found `-`");
        assert_eq!(err.to_string(), "found `-` at 2..3");
        assert!(!err.fatal);
    }

    #[test]
    fn fatal_errors() {
        let err = Error::new_fatal(vec![0..0], TwoLabels);
        assert!(err.fatal);
    }
}
