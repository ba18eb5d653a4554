//! Top-level decomposition of array and object bodies.
//!
//! Both routines are deliberately lenient: member boundaries are found by
//! brace counting alone. The array splitter does not track quote state at
//! depth zero, and the object splitter does not honor escapes inside a nested
//! brace span. Well-formed data files never hit either gap, and the behavior
//! on malformed input (the scan running past the intended value) is part of
//! the compatibility contract.

use std::collections::HashMap;

use super::scanner::Scanner;

/// Splits the body of an array into its top-level `{...}` members.
///
/// Text outside any brace span (stray commas, whitespace) is discarded, and
/// each member is returned trimmed.
pub(crate) fn split_top_level_objects(body: &str) -> Vec<String> {
    let mut objects = Vec::new();
    let mut depth = 0i32;
    let mut current = String::new();

    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '{' {
            depth += 1;
            current.push(c);
        } else if c == '}' {
            depth -= 1;
            current.push(c);
            if depth == 0 {
                objects.push(current.trim().to_string());
                current = String::new();
                while let Some(&next) = chars.peek() {
                    if next == ',' || next.is_whitespace() {
                        chars.next();
                    } else {
                        break;
                    }
                }
            }
        } else if depth > 0 {
            current.push(c);
        }
    }

    objects
}

/// Splits the body of an object into named sections.
///
/// Each entry maps a quoted key to its raw value text: a balanced `{...}`
/// span for object values, or the trimmed scalar text (quotes preserved)
/// otherwise. Duplicate keys keep the last value seen.
pub(crate) fn split_sections(body: &str) -> HashMap<String, String> {
    let mut sections = HashMap::new();
    let mut s = Scanner::new(body);

    loop {
        s.skip_separators();
        let Some(c) = s.peek() else { break };
        if c != '"' {
            s.bump();
            continue;
        }
        s.bump(); // opening quote
        let key_start = s.pos();
        while matches!(s.peek(), Some(c) if c != '"') {
            s.bump();
        }
        let key_end = s.pos();
        let key = s.slice(key_start, key_end).to_string();
        s.bump(); // closing quote

        while matches!(s.peek(), Some(c) if c != ':') {
            s.bump();
        }
        s.bump(); // colon
        s.skip_whitespace();

        let Some(c) = s.peek() else { break };
        if c == '{' {
            // Balanced-brace span; the braces stay in the captured value.
            let value_start = s.pos();
            s.bump();
            let mut depth = 1i32;
            while depth > 0 {
                match s.bump() {
                    Some('{') => depth += 1,
                    Some('}') => depth -= 1,
                    Some(_) => {}
                    None => break,
                }
            }
            let value_end = s.pos();
            sections.insert(key, s.slice(value_start, value_end).to_string());
        } else {
            // Scalar: scan to the first comma or closing brace outside a string.
            let value_start = s.pos();
            let mut in_string = false;
            while let Some(c) = s.peek() {
                if c == '"' && !s.escaped() {
                    in_string = !in_string;
                } else if !in_string && (c == ',' || c == '}') {
                    break;
                }
                s.bump();
            }
            let value_end = s.pos();
            let value = s.slice(value_start, value_end).trim().to_string();
            sections.insert(key, value);
        }
    }

    sections
}
