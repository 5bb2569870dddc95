use crate::greeting::{greeting, write_greeting, GREETING};

#[test]
fn test_greeting_has_two_lines() {
    let text = greeting();
    assert_eq!(text.lines().count(), 2);
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().next(), Some(GREETING[0]));
}

#[test]
fn test_write_greeting_matches_greeting() {
    let mut out = Vec::new();
    write_greeting(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), greeting());
}
