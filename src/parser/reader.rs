//! File reading and top-level document dispatch.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::LoadError;

/// Reads a data file as text, joining lines with `\n` (normalizes CRLF).
///
/// Fails with [`LoadError::Io`] when the file is missing or unreadable and
/// with [`LoadError::EmptyFile`] when it resolves to zero-length text.
pub(crate) fn read_file(path: &str) -> Result<String, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;

    let mut content = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        content.push_str(&line);
        content.push('\n');
    }

    if content.is_empty() {
        return Err(LoadError::EmptyFile {
            path: path.to_string(),
        });
    }
    Ok(content)
}

/// Shape of a document's top-level value, with the delimiters stripped.
pub(crate) enum Document<'a> {
    Array(&'a str),
    Object(&'a str),
    Other,
}

/// Dispatches on the first and last non-whitespace characters. Text shaped
/// like neither an array nor an object is not an error: it decomposes to an
/// empty result downstream.
pub(crate) fn classify(text: &str) -> Document<'_> {
    let t = text.trim();
    if t.len() >= 2 && t.starts_with('[') && t.ends_with(']') {
        Document::Array(&t[1..t.len() - 1])
    } else if t.len() >= 2 && t.starts_with('{') && t.ends_with('}') {
        Document::Object(&t[1..t.len() - 1])
    } else {
        Document::Other
    }
}
