use crate::ast::Span;
use crate::call::{Call, Function};
use crate::error::WebcalcError;
use std::sync::Arc;

#[test]
fn test_parse_error_display_includes_position_and_suggestion() {
    let error = WebcalcError::parse_with_suggestion(
        "Unknown function 'mul'",
        Span {
            start: 0,
            end: 3,
            line: 1,
            col: 1,
        },
        Arc::from("mul(1, 2)"),
        "available functions are add(a, b), factorial(n)",
    );

    assert_eq!(
        error.to_string(),
        "Parse error: Unknown function 'mul' (suggestion: available functions are add(a, b), factorial(n)) at 1:1"
    );
}

#[test]
fn test_call_new_checks_arity() {
    let error = Call::new(Function::Factorial, &[1, 2]).unwrap_err();
    assert_eq!(error.to_string(), "factorial() takes 1 argument, got 2");
}

#[test]
fn test_call_new_rejects_out_of_range() {
    let error = Call::new(Function::Add, &[1, i64::from(i32::MAX) + 1]).unwrap_err();
    match error {
        WebcalcError::OutOfRange { function, value } => {
            assert_eq!(function, "add");
            assert_eq!(value, 2147483648);
        }
        other => panic!("expected out of range error, got {:?}", other),
    }
}

#[test]
fn test_unknown_function_display() {
    let error = WebcalcError::UnknownFunction("mul".to_string());
    assert_eq!(error.to_string(), "Unknown function 'mul'");
}
