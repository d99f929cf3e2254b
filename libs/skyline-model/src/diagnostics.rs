//! Run diagnostics.
//!
//! A [`Diagnostics`] value is created by the caller and passed explicitly
//! into generation. Every entry is also emitted as a `tracing` event, so an
//! installed subscriber sees the same messages inside the producer span that
//! raised them.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Part of the model was dropped or degraded.
    Warning,
    /// Noteworthy but harmless, e.g. a fallback was used.
    Info,
}

/// A diagnostic message and the component that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub source: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            source: source.into(),
            message: message.into(),
        }
    }

    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, source, message)
    }

    pub fn info(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, source, message)
    }
}

/// Ordered collection of diagnostics for one run.
///
/// # Examples
/// ```
/// use skyline_model::Diagnostics;
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.warn("emblem", "asset missing");
/// assert!(diagnostics.has_warnings());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning and emits it as a `tracing` warning.
    pub fn warn(&mut self, source: impl Into<String>, message: impl Into<String>) {
        let entry = Diagnostic::warning(source, message);
        tracing::warn!(source = %entry.source, "{}", entry.message);
        self.entries.push(entry);
    }

    /// Records an informational note and emits it as a `tracing` info event.
    pub fn info(&mut self, source: impl Into<String>, message: impl Into<String>) {
        let entry = Diagnostic::info(source, message);
        tracing::info!(source = %entry.source, "{}", entry.message);
        self.entries.push(entry);
    }

    /// Moves every entry of `other` to the end of `self` without re-emitting.
    pub fn append(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.info("caption", "using block font");
        diagnostics.warn("emblem", "decode failed");
        let sources: Vec<_> = diagnostics.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, ["caption", "emblem"]);
        assert_eq!(diagnostics.warnings().count(), 1);
    }

    #[test]
    fn test_append_merges() {
        let mut run = Diagnostics::new();
        let mut producer = Diagnostics::new();
        producer.warn("columns", "skipped cell");
        run.append(producer);
        assert_eq!(run.len(), 1);
        assert!(run.has_warnings());
    }

    #[test]
    fn test_info_only_has_no_warnings() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.info("caption", "fallback");
        assert!(!diagnostics.has_warnings());
        assert!(!diagnostics.is_empty());
    }
}
