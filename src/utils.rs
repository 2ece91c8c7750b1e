//! Common utility functions shared across the codebase.

/// Byte offsets at which each line of `content` starts.
///
/// Line 1 starts at offset 0, line 2 after the first `'\n'`, and so on.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number of a byte offset, using a binary search over the
/// index built by [`build_line_index`].
///
/// # Examples
///
/// ```
/// use xlocalize::utils::{build_line_index, offset_to_line};
///
/// let index = build_line_index("a\nbc\nd");
/// assert_eq!(offset_to_line(&index, 0), 1);
/// assert_eq!(offset_to_line(&index, 3), 2);
/// assert_eq!(offset_to_line(&index, 5), 3);
/// ```
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Shorten `text` to at most `max` chars for single-line display.
pub fn truncate_for_display(text: &str, max: usize) -> String {
    let single_line: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let mut short: String = single_line.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}
