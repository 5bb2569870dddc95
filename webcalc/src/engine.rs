use crate::call::Call;
use crate::error::WebcalcError;
use crate::parser;
use crate::resource_limits::ResourceLimits;
use crate::response::Evaluation;
use crate::WebcalcResult;

/// Evaluates calls and call expressions
///
/// Holds no state besides its limits, so a single engine can be shared
/// freely between threads and requests.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    limits: ResourceLimits,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn evaluate(&self, call: &Call) -> Evaluation {
        Evaluation::from(call)
    }

    /// Parse and evaluate a batch of call expressions separated by `;` or newlines
    pub fn evaluate_str(&self, input: &str) -> WebcalcResult<Vec<Evaluation>> {
        let calls = parser::parse_calls(input, &self.limits)?;
        Ok(calls.iter().map(|call| self.evaluate(call)).collect())
    }

    /// Evaluate several independent expressions, each holding one or more calls
    pub fn evaluate_all<S: AsRef<str>>(&self, inputs: &[S]) -> WebcalcResult<Vec<Evaluation>> {
        let mut results = Vec::new();
        for input in inputs {
            results.extend(self.evaluate_str(input.as_ref())?);
            if results.len() > self.limits.max_calls {
                return Err(WebcalcError::ResourceLimitExceeded {
                    limit_name: "max_calls".to_string(),
                    limit_value: self.limits.max_calls.to_string(),
                    actual_value: format!("more than {}", self.limits.max_calls),
                    suggestion: "Split the expressions into smaller batches".to_string(),
                });
            }
        }
        Ok(results)
    }
}
