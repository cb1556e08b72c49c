//! Shared utility functions.

/// Shorten `s` to at most `max_chars` characters for log lines.
///
/// Newlines are flattened to spaces and an ellipsis marks a cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push('…');
    cut
}
