use crate::ast::Span;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// Error types for call expressions and their evaluation surfaces
///
/// The arithmetic never fails; every variant here describes input that could
/// not be turned into a call.
#[derive(Debug, Clone)]
pub enum WebcalcError {
    /// Call expression could not be parsed, with source location
    Parse(Box<ErrorDetails>),

    /// Function name is not one of the exported functions
    UnknownFunction(String),

    /// Wrong number of arguments for a function
    Arity {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// Argument does not fit a 32-bit signed integer
    OutOfRange { function: String, value: i64 },

    /// Input exceeded a configured resource limit
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Engine error without specific source location
    Engine(String),
}

impl WebcalcError {
    /// Create a parse error with source information
    pub fn parse(message: impl Into<String>, span: Span, source_text: Arc<str>) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_text,
            suggestion: None,
        }))
    }

    /// Create a parse error with suggestion
    pub fn parse_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }
}

impl fmt::Display for WebcalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebcalcError::Parse(details) => {
                write!(f, "Parse error: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(f, " at {}:{}", details.span.line, details.span.col)
            }
            WebcalcError::UnknownFunction(name) => write!(f, "Unknown function '{}'", name),
            WebcalcError::Arity {
                function,
                expected,
                actual,
            } => write!(
                f,
                "{}() takes {} argument{}, got {}",
                function,
                expected,
                if *expected == 1 { "" } else { "s" },
                actual
            ),
            WebcalcError::OutOfRange { function, value } => write!(
                f,
                "Argument {} to {}() is outside the 32-bit integer range",
                value, function
            ),
            WebcalcError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                suggestion,
            } => write!(
                f,
                "Resource limit exceeded: {} (limit: {}, actual: {}). {}",
                limit_name, limit_value, actual_value, suggestion
            ),
            WebcalcError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for WebcalcError {}
