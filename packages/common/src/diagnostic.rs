use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Rule emitted when props are supplied without a `classes` object
pub const MISSING_CLASSES: &str = "missing-classes";

/// Rule emitted when a modifier has no matching entry in the CSS API
pub const MISSING_MODIFIER_CLASS: &str = "missing-modifier-class";

/// Rule emitted when a sub element has no matching entry in the CSS API
pub const MISSING_ELEMENT_CLASS: &str = "missing-element-class";

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Warning,
}

/// An advisory message about likely misuse of a component's CSS API.
///
/// Diagnostics never change the generated class names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// Optional suggestion for fixing the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn warning(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            rule: rule.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Destination for advisory diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn notify(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn notify(&self, diagnostic: Diagnostic) {
        tracing::warn!(rule = %diagnostic.rule, "{}", diagnostic.message);
    }
}

/// Discards every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn notify(&self, _diagnostic: Diagnostic) {}
}

/// Records diagnostics so they can be inspected after generation
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(
            &mut *self
                .diagnostics
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics().is_empty()
    }

    /// Whether any recorded diagnostic was produced by `rule`
    pub fn has_rule(&self, rule: &str) -> bool {
        self.diagnostics().iter().any(|d| d.rule == rule)
    }
}

impl DiagnosticSink for CollectingSink {
    fn notify(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}
