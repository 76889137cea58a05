//! Console input collection with re-prompt-on-invalid semantics.
//!
//! # Responsibility
//! - Read one trimmed line per prompt from stdin.
//! - Loop until a validator accepts the input or the stream ends.
//!
//! # Invariants
//! - EOF (Ctrl-D) returns `None` and aborts the current action only; the
//!   caller decides whether the session continues.
//! - Validation failures never leave this boundary: rejected input is
//!   re-prompted, not passed on.

use std::io::{self, Write};

/// Reads one trimmed line. Returns `None` on EOF.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut buffer = String::new();
    match io::stdin().read_line(&mut buffer) {
        Ok(0) => None,
        Ok(_) => Some(buffer.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a required field, re-prompting until `validator` accepts it.
pub fn read_valid(
    prompt: &str,
    validator: impl Fn(&str) -> bool,
    error_msg: &str,
) -> Option<String> {
    loop {
        let value = read_line(prompt)?;
        if validator(&value) {
            return Some(value);
        }
        println!("{error_msg}");
    }
}

/// Reads an optional field: empty input yields `None` inside `Some`,
/// non-empty input must pass `validator`.
pub fn read_optional(
    prompt: &str,
    validator: impl Fn(&str) -> bool,
    error_msg: &str,
) -> Option<Option<String>> {
    loop {
        let value = read_line(prompt)?;
        if value.is_empty() {
            return Some(None);
        }
        if validator(&value) {
            return Some(Some(value));
        }
        println!("{error_msg}");
    }
}

/// Reads a positive integer id.
pub fn read_id(prompt: &str) -> Option<i64> {
    loop {
        let value = read_line(prompt)?;
        match value.parse::<i64>() {
            Ok(id) if id > 0 => return Some(id),
            _ => println!("Enter a numeric id"),
        }
    }
}
