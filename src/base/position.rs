/// Line/column tracking for byte offsets
///
/// Outline entries carry both the raw byte offset and the 0-indexed
/// line/column pair so hosts without their own line table can navigate.
use text_size::TextSize;

/// A position in source text (0-indexed, column counted in bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Convert a byte offset into a line/column pair.
///
/// Offsets past the end of `text` are clamped to the end.
pub fn line_col(text: &str, offset: TextSize) -> LineCol {
    let offset = usize::from(offset).min(text.len());
    let before = &text.as_bytes()[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count();
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |idx| idx + 1);

    LineCol::new(line as u32, (offset - line_start) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        assert_eq!(line_col("theorem a: True", TextSize::new(8)), LineCol::new(0, 8));
    }

    #[test]
    fn test_line_col_after_newline() {
        let text = "theorem a: True\ntheorem b: False\n";
        assert_eq!(line_col(text, TextSize::new(16)), LineCol::new(1, 0));
        assert_eq!(line_col(text, TextSize::new(24)), LineCol::new(1, 8));
    }

    #[test]
    fn test_line_col_clamps_past_end() {
        assert_eq!(line_col("ab\nc", TextSize::new(99)), LineCol::new(1, 1));
    }
}
