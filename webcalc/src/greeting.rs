use std::io::{self, Write};

/// Lines printed by the diagnostic entry point.
pub const GREETING: [&str; 2] = [
    "Hello from Rust running inside your browser!",
    "Use the UI controls to call factorial() and add().",
];

/// The greeting as a single newline-terminated string
pub fn greeting() -> String {
    let mut text = String::new();
    for line in GREETING {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Write the greeting, one line per entry
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    for line in GREETING {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
