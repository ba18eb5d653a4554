//! Flat-object decomposition into a property map.

use std::collections::HashMap;

use super::scanner::Scanner;

/// Parses the `"key": value` pairs of a single object into a map.
///
/// Keys are de-quoted; values are kept verbatim (surrounding quotes and all)
/// for the record builders to interpret per field type. Commas inside nested
/// `[...]`/`{...}` values and escaped quotes inside strings do not terminate
/// a property. Malformed content never fails: whatever was accumulated so
/// far is returned.
pub(crate) fn parse_flat_object(body: &str) -> HashMap<String, String> {
    let trimmed = body.trim();
    if trimmed.len() < 2 || !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        return HashMap::new();
    }
    let inner = &trimmed[1..trimmed.len() - 1];

    let mut properties = HashMap::new();
    let mut key = String::new();
    let mut value = String::new();
    let mut s = Scanner::new(inner);

    loop {
        let unescaped_quote = matches!(s.peek(), Some('"')) && !s.escaped();
        let Some(c) = s.step() else { break };

        if unescaped_quote {
            if !s.in_key() {
                value.push(c);
            }
        } else if c == ':' && !s.in_quotes() && s.depth() == 0 {
            s.set_in_key(false);
        } else if c == ',' && !s.in_quotes() && s.depth() == 0 {
            flush(&mut properties, &mut key, &mut value);
            s.set_in_key(true);
        } else if c == '{' || c == '[' || c == '}' || c == ']' {
            if !s.in_key() {
                value.push(c);
            }
        } else if s.in_key() {
            key.push(c);
        } else {
            value.push(c);
        }
    }
    flush(&mut properties, &mut key, &mut value);

    properties
}

/// Records the accumulated pair and resets the buffers. Pairs with a blank
/// key (trailing commas, empty bodies) are dropped.
fn flush(properties: &mut HashMap<String, String>, key: &mut String, value: &mut String) {
    let k = key.trim();
    let k = k
        .strip_prefix('"')
        .and_then(|k| k.strip_suffix('"'))
        .unwrap_or(k);
    if !k.is_empty() {
        properties.insert(k.to_string(), value.trim().to_string());
    }
    key.clear();
    value.clear();
}

/// Strips the surrounding quotes from a raw string value and resolves the
/// two escapes the scanner recognizes.
pub(crate) fn unquote(raw: &str) -> String {
    let t = raw.trim();
    let t = t
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(t);
    if t.contains('\\') {
        t.replace("\\\"", "\"").replace("\\\\", "\\")
    } else {
        t.to_string()
    }
}
