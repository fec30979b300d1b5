//! mez_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Lexical errors are reported as diagnostics built from a fixed message
//! catalog. A scan accumulates its diagnostics into a [`DiagnosticCollection`]
//! that is handed back to the caller together with the token sequence; there
//! is no process-wide error state.

use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
/// One entry in the `messages` catalog below.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic error code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
///
/// Locations are line numbers only: the scanner tracks no position ranges
/// beyond the 1-based line where the problem was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The 1-based source line where this diagnostic occurred, if any.
    pub line: Option<u32>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic error code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            line: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic attached to a source line.
    pub fn at_line(line: u32, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            line: Some(line),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }
        write!(f, "{} MZ{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during one scan.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Sort diagnostics by source line; unlocated diagnostics first.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by_key(|d| d.line);
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNEXPECTED_CHARACTER: DiagnosticMessage = diag!(1001, Error, "Unexpected character '{0}' at column {1}.");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(1002, Error, "Unterminated string.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message("Unexpected character '{0}' at column {1}.", &["@", "3"]),
            "Unexpected character '@' at column 3."
        );
        assert_eq!(format_message("Unterminated string.", &[]), "Unterminated string.");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::at_line(4, &messages::UNTERMINATED_STRING, &[]);
        assert_eq!(diag.to_string(), "line 4: error MZ1002: Unterminated string.");
    }

    #[test]
    fn test_collection_error_tracking() {
        let mut collection = DiagnosticCollection::new();
        assert!(!collection.has_errors());
        assert!(collection.is_empty());

        collection.add(Diagnostic::at_line(1, &messages::UNEXPECTED_CHARACTER, &["@", "1"]));
        collection.add(Diagnostic::at_line(2, &messages::UNTERMINATED_STRING, &[]));

        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 2);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_collection_sort_by_line() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::at_line(9, &messages::UNTERMINATED_STRING, &[]));
        collection.add(Diagnostic::at_line(2, &messages::UNEXPECTED_CHARACTER, &["$", "5"]));
        collection.sort();

        let lines: Vec<_> = collection.diagnostics().iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![Some(2), Some(9)]);
    }
}
