use crate::arith;
use crate::error::WebcalcError;
use crate::WebcalcResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the exported functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Add,
    Factorial,
}

impl Function {
    pub const ALL: [Function; 2] = [Function::Add, Function::Factorial];

    pub fn name(&self) -> &'static str {
        match self {
            Function::Add => "add",
            Function::Factorial => "factorial",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Function::Add => 2,
            Function::Factorial => 1,
        }
    }

    /// Parameter names, in call order
    pub fn params(&self) -> &'static [&'static str] {
        match self {
            Function::Add => &["a", "b"],
            Function::Factorial => &["n"],
        }
    }

    /// Human-readable signature, e.g. `add(a, b)`
    pub fn signature(&self) -> String {
        format!("{}({})", self.name(), self.params().join(", "))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = WebcalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|function| function.name() == s)
            .ok_or_else(|| WebcalcError::UnknownFunction(s.to_string()))
    }
}

/// A single invocation of an exported function with its arguments
///
/// Created per call and discarded once evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Add { a: i32, b: i32 },
    Factorial { n: i32 },
}

impl Call {
    /// Build a call from untyped arguments, checking arity and range.
    ///
    /// Arguments outside `i32` are rejected rather than wrapped: wrapping
    /// applies to results, not to what the caller asked for.
    pub fn new(function: Function, args: &[i64]) -> WebcalcResult<Self> {
        if args.len() != function.arity() {
            return Err(WebcalcError::Arity {
                function: function.name().to_string(),
                expected: function.arity(),
                actual: args.len(),
            });
        }

        let narrow = |value: i64| {
            i32::try_from(value).map_err(|_| WebcalcError::OutOfRange {
                function: function.name().to_string(),
                value,
            })
        };

        match function {
            Function::Add => Ok(Call::Add {
                a: narrow(args[0])?,
                b: narrow(args[1])?,
            }),
            Function::Factorial => Ok(Call::Factorial { n: narrow(args[0])? }),
        }
    }

    pub fn function(&self) -> Function {
        match self {
            Call::Add { .. } => Function::Add,
            Call::Factorial { .. } => Function::Factorial,
        }
    }

    pub fn args(&self) -> Vec<i32> {
        match *self {
            Call::Add { a, b } => vec![a, b],
            Call::Factorial { n } => vec![n],
        }
    }

    pub fn evaluate(&self) -> i32 {
        match *self {
            Call::Add { a, b } => arith::add(a, b),
            Call::Factorial { n } => arith::factorial(n),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Add { a, b } => write!(f, "add({}, {})", a, b),
            Call::Factorial { n } => write!(f, "factorial({})", n),
        }
    }
}
