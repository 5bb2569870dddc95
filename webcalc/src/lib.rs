//! # Webcalc Engine
//!
//! **Two integer functions, callable from anywhere**
//!
//! Webcalc exposes `add` and `factorial` over 32-bit signed integers. The same
//! functions back the browser build (`wasm32`) and the `webcalc` CLI.
//!
//! ## Quick Start
//!
//! ```rust
//! use webcalc::{add, factorial, Engine, WebcalcResult};
//!
//! fn main() -> WebcalcResult<()> {
//!     assert_eq!(add(2, 3), 5);
//!     assert_eq!(factorial(5), 120);
//!
//!     // Textual call expressions go through the engine
//!     let engine = Engine::new();
//!     let results = engine.evaluate_str("add(-7, 7); factorial(10)")?;
//!     assert_eq!(results[0].value, 0);
//!     assert_eq!(results[1].value, 3628800);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! Arithmetic wraps on overflow, exactly like native 32-bit integers.
//! `factorial` of a negative number is `0`; that is a sentinel, not an error.
//! The only errors in this crate come from parsing call expressions.

pub mod arith;
pub mod ast;
pub mod call;
pub mod engine;
pub mod error;
pub mod greeting;
pub mod parser;
pub mod resource_limits;
pub mod response;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use arith::{add, factorial, ZERO_FROM};
pub use ast::{CallExpr, Span};
pub use call::{Call, Function};
pub use engine::Engine;
pub use error::WebcalcError;
pub use greeting::{greeting, write_greeting, GREETING};
pub use parser::{parse_call, parse_calls};
pub use resource_limits::ResourceLimits;
pub use response::{EvaluateEnvelope, Evaluation};

/// Result type for Webcalc operations
pub type WebcalcResult<T> = Result<T, WebcalcError>;

#[cfg(test)]
mod tests;
