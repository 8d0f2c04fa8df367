//! Path validation
//!
//! The `dir` rule is purely syntactic: it never touches the filesystem.

use crate::value::FieldValue;

/// Characters that can never appear in a Windows path component
#[cfg(windows)]
const RESERVED_CHARS: &[char] = &['<', '>', '"', '|', '?', '*'];

#[cfg(windows)]
fn has_illegal_chars(path: &str) -> bool {
    // A drive prefix (`C:`) is the only place a colon may appear
    let body = match path.as_bytes() {
        [drive, b':', ..] if drive.is_ascii_alphabetic() => &path[2..],
        _ => path,
    };

    body.chars()
        .any(|c| c.is_control() || c == ':' || RESERVED_CHARS.contains(&c))
}

#[cfg(not(windows))]
fn has_illegal_chars(path: &str) -> bool {
    path.contains('\0')
}

/// Validate that a string is a syntactically valid directory path
pub fn is_dir_path(path: &str) -> bool {
    !path.is_empty() && !has_illegal_chars(path)
}

pub fn dir(value: &FieldValue, _params: &[String]) -> bool {
    value.as_str().map(is_dir_path).unwrap_or(false)
}
