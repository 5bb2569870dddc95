use crate::{arith, Engine, EvaluateEnvelope};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn add(a: i32, b: i32) -> i32 {
    arith::add(a, b)
}

#[wasm_bindgen]
pub fn factorial(n: i32) -> i32 {
    arith::factorial(n)
}

/// The two lines the native binary prints on start-up
#[wasm_bindgen]
pub fn greeting() -> String {
    crate::greeting::greeting()
}

/// Evaluate call expressions and return the JSON envelope
#[wasm_bindgen]
pub fn evaluate(expr: &str) -> String {
    EvaluateEnvelope::from_result(Engine::new().evaluate_str(expr)).to_json()
}
