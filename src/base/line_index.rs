//! Byte offset to line/column conversion.

use text_size::TextSize;

/// A 0-indexed line and 0-indexed character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets of a text to line/column pairs.
///
/// Columns are counted in characters, not bytes, so they line up with the
/// editor's columns for non-ASCII identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of every line.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset of `text` into a line/column pair.
    ///
    /// `text` must be the same text the index was built from.
    pub fn line_col(&self, text: &str, offset: TextSize) -> LineCol {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset).min(text.len());
        let col = text.get(start..end).map_or(0, |s| s.chars().count());
        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }

    /// Convert a 0-indexed line and character column back into a byte offset.
    ///
    /// Returns `None` when the line does not exist; columns past the end of
    /// the line clamp to the line end.
    pub fn offset(&self, text: &str, line_col: LineCol) -> Option<TextSize> {
        let start = usize::from(*self.line_starts.get(line_col.line as usize)?);
        let line_end = self
            .line_starts
            .get(line_col.line as usize + 1)
            .map_or(text.len(), |next| usize::from(*next) - 1);
        let line_text = text.get(start..line_end)?;
        let byte_col = line_text
            .char_indices()
            .nth(line_col.col as usize)
            .map_or(line_text.len(), |(i, _)| i);
        Some(TextSize::new((start + byte_col) as u32))
    }
}
