//! Check verdict types.
//!
//! Every completed check produces a [`CheckResult`] carrying a
//! [`CheckStatus`] and a short human-readable message, with optional
//! long-form details, a remediation suggestion, and the rendered
//! underlying error when one was captured.

use serde::{Deserialize, Serialize};

/// Status of a health check.
///
/// `Pending` and `Running` are transient display states; a completed
/// check only ever stores `Passed`, `Failed`, `Warning`, or `Skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Check is waiting to run.
    Pending,

    /// Check is currently executing.
    Running,

    /// Check completed successfully.
    Passed,

    /// Check failed.
    Failed,

    /// Check was not executed.
    Skipped,

    /// Check passed with reservations.
    Warning,
}

impl CheckStatus {
    /// Check if this is a terminal state a completed check may store.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CheckStatus::Passed | CheckStatus::Failed | CheckStatus::Warning | CheckStatus::Skipped
        )
    }

    /// Get a display symbol for this status.
    pub fn symbol(&self) -> char {
        match self {
            CheckStatus::Pending => '○',
            CheckStatus::Running => '◉',
            CheckStatus::Passed => '✓',
            CheckStatus::Failed => '✗',
            CheckStatus::Skipped => '⊘',
            CheckStatus::Warning => '⚠',
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CheckStatus::Pending => "pending",
            CheckStatus::Running => "running",
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
            CheckStatus::Skipped => "skipped",
            CheckStatus::Warning => "warning",
        };
        write!(f, "{}", s)
    }
}

/// Result of a health check.
///
/// Immutable once built. `status` and `message` are always present;
/// everything else is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Terminal status of the check.
    pub status: CheckStatus,

    /// Short human-readable summary.
    pub message: String,

    /// Long-form diagnostic text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Remediation hint for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Rendered underlying error, when one was captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl CheckResult {
    /// Create a result with the given status and message.
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            suggestion: None,
            cause: None,
        }
    }

    /// Create a passed result.
    pub fn passed(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Passed, message)
    }

    /// Create a failed result.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Failed, message)
    }

    /// Create a warning result.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warning, message)
    }

    /// Create a skipped result.
    pub fn skipped(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Skipped, message)
    }

    /// Attach long-form details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach a remediation suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach the rendered underlying error.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}
