#![no_main]

use libfuzzer_sys::fuzz_target;
use webcalc::{add, factorial};

fuzz_target!(|input: (i32, i32, i16)| {
    let (a, b, n) = input;

    assert_eq!(add(a, b), a.wrapping_add(b));
    assert_eq!(add(a, b), add(b, a));

    let n = i32::from(n);
    match n {
        n if n < 0 => assert_eq!(factorial(n), 0),
        0 => assert_eq!(factorial(n), 1),
        n => assert_eq!(factorial(n), factorial(n - 1).wrapping_mul(n)),
    }
});
