use crate::call::{Call, Function};
use crate::error::WebcalcError;
use crate::WebcalcResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating one call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The call as text, e.g. `factorial(5)`
    pub call: String,
    pub function: Function,
    pub args: Vec<i32>,
    pub value: i32,
}

impl From<&Call> for Evaluation {
    fn from(call: &Call) -> Self {
        Self {
            call: call.to_string(),
            function: call.function(),
            args: call.args(),
            value: call.evaluate(),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.call, self.value)
    }
}

/// JSON envelope returned to browser callers of `evaluate`
///
/// Always carries all three keys: `{"success":true,"results":[...],"error":null}`
/// on success, `success: false` with `results: null` and a message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateEnvelope {
    pub success: bool,
    pub results: Option<Vec<Evaluation>>,
    pub error: Option<String>,
}

impl EvaluateEnvelope {
    pub fn from_result(result: WebcalcResult<Vec<Evaluation>>) -> Self {
        match result {
            Ok(results) => Self {
                success: true,
                results: Some(results),
                error: None,
            },
            Err(e) => Self {
                success: false,
                results: None,
                error: Some(format_error(&e)),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"results":null,"error":"Failed to serialize results"}"#
                .to_string()
        })
    }
}

/// One-line error text for callers without a terminal to render spans on
pub fn format_error(error: &WebcalcError) -> String {
    match error {
        WebcalcError::Parse(details) => match &details.suggestion {
            Some(suggestion) => format!(
                "Parse Error: {} at column {} ({})",
                details.message, details.span.col, suggestion
            ),
            None => format!("Parse Error: {} at column {}", details.message, details.span.col),
        },
        other => other.to_string(),
    }
}
