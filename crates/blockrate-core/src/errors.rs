use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and reporting layers built on top of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    /// A comparable pair was constructed with both sides absent
    EmptyPair,
    /// A keyed pair carries two items whose keys disagree
    KeyMismatch,
    /// A property is malformed (e.g. empty path)
    InvalidProperty,

    // Comparison
    /// A leaf comparator failed while scoring an item
    ComparatorFailure,
    /// A computed rate record failed its JSON round-trip check
    DeterminismViolation,

    // Configuration
    InvalidOptions,

    // Integration
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyPair => "ERR_EMPTY_PAIR",
            ExErrorKind::KeyMismatch => "ERR_KEY_MISMATCH",
            ExErrorKind::InvalidProperty => "ERR_INVALID_PROPERTY",
            ExErrorKind::ComparatorFailure => "ERR_COMPARATOR_FAILURE",
            ExErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            ExErrorKind::InvalidOptions => "ERR_INVALID_OPTIONS",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling and optional
/// context (operation, block type, property path) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    block_type: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            block_type: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add block type context
    pub fn with_block_type(mut self, block_type: impl Into<String>) -> Self {
        self.block_type = Some(block_type.into());
        self
    }

    /// Add property path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the block type context, if any
    pub fn block_type(&self) -> Option<&str> {
        self.block_type.as_deref()
    }

    /// Get the property path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(block_type) = &self.block_type {
            write!(f, " (block_type: {})", block_type)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for comparison operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    /// Both sides of a comparable pair are absent
    #[error("Cannot build a {what} pair: both sides are absent")]
    EmptyPair { what: String },

    /// Keyed pair whose two items have different keys
    #[error("Keyed pair mismatch: left key {left} does not match right key {right}")]
    KeyMismatch { left: String, right: String },

    /// Property cannot be compared
    #[error("Invalid property at '{path}': {reason}")]
    InvalidProperty { path: String, reason: String },

    /// A leaf comparator reported a failure
    #[error("Comparator '{comparator}' failed: {reason}")]
    ComparatorFailure { comparator: String, reason: String },

    /// Comparison options could not be loaded
    #[error("Invalid comparison options: {reason}")]
    InvalidOptions { reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from CompareError to ExError
impl From<CompareError> for ExError {
    fn from(err: CompareError) -> Self {
        match err {
            CompareError::EmptyPair { what } => ExError::new(ExErrorKind::EmptyPair)
                .with_message(format!("{} pair has neither a left nor a right side", what)),

            CompareError::KeyMismatch { left, right } => ExError::new(ExErrorKind::KeyMismatch)
                .with_path(left.clone())
                .with_message(format!("left key {} does not match right key {}", left, right)),

            CompareError::InvalidProperty { path, reason } => {
                ExError::new(ExErrorKind::InvalidProperty)
                    .with_path(path)
                    .with_message(reason)
            }

            CompareError::ComparatorFailure { comparator, reason } => {
                ExError::new(ExErrorKind::ComparatorFailure)
                    .with_op(comparator)
                    .with_message(reason)
            }

            CompareError::InvalidOptions { reason } => {
                ExError::new(ExErrorKind::InvalidOptions).with_message(reason)
            }

            CompareError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            CompareError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to CompareError
impl From<serde_json::Error> for CompareError {
    fn from(err: serde_json::Error) -> Self {
        CompareError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::EmptyPair, "ERR_EMPTY_PAIR"),
            (ExErrorKind::KeyMismatch, "ERR_KEY_MISMATCH"),
            (ExErrorKind::ComparatorFailure, "ERR_COMPARATOR_FAILURE"),
            (ExErrorKind::DeterminismViolation, "ERR_DETERMINISM_VIOLATION"),
            (ExErrorKind::InvalidOptions, "ERR_INVALID_OPTIONS"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::InvalidProperty)
            .with_op("compare_property")
            .with_block_type("interfaceContainerBlock")
            .with_path("options.title")
            .with_message("path is empty");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_INVALID_PROPERTY]"));
        assert!(text.contains("compare_property"));
        assert!(text.contains("interfaceContainerBlock"));
        assert!(text.contains("options.title"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error as _;
        let inner = ExError::new(ExErrorKind::ComparatorFailure).with_message("boom");
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);
        assert!(outer.source().is_some());
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::ComparatorFailure)
        );
    }
}
