//! In-memory [`EditorHost`].

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::mode::{token_at_column, tokenize_lines};
use crate::base::{EditorRange, Position};
use crate::oracle::{EditorHost, MarkerHandle, MarkerStyle, Token};

/// A marker registered with a [`HeadlessEditor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub range: EditorRange,
    pub class: SmolStr,
    pub style: MarkerStyle,
}

/// An editor without a screen.
///
/// Holds the text, a cursor, an additive multi-range selection and a marker
/// table. Markers are keyed by handles that are never reused.
#[derive(Debug, Clone, Default)]
pub struct HeadlessEditor {
    text: String,
    lines: Vec<Vec<Token>>,
    cursor: Position,
    selection: Vec<EditorRange>,
    markers: FxHashMap<MarkerHandle, Marker>,
    next_marker: u64,
    focused: bool,
}

impl HeadlessEditor {
    pub fn new(text: impl Into<String>) -> Self {
        let mut editor = Self::default();
        editor.set_text(text);
        editor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole buffer. The cursor is clamped into the new text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.lines = tokenize_lines(&self.text);
        self.cursor = self.clamp(self.cursor);
    }

    /// Move the cursor, collapsing the selection.
    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = self.clamp(position);
        self.selection.clear();
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_tokens(&self, row: u32) -> &[Token] {
        self.lines.get(row as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selection_ranges(&self) -> &[EditorRange] {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn marker(&self, handle: MarkerHandle) -> Option<&Marker> {
        self.markers.get(&handle)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Registered markers ordered by handle.
    pub fn markers(&self) -> Vec<(MarkerHandle, &Marker)> {
        let mut markers: Vec<_> = self.markers.iter().map(|(h, m)| (*h, m)).collect();
        markers.sort_by_key(|(h, _)| *h);
        markers
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn line_len(&self, row: usize) -> u32 {
        self.lines
            .get(row)
            .and_then(|line| line.last())
            .map_or(0, Token::end)
    }

    fn clamp(&self, position: Position) -> Position {
        let last_row = self.lines.len().saturating_sub(1);
        let row = (position.row as usize).min(last_row);
        Position::new(row as u32, position.column.min(self.line_len(row)))
    }
}

impl EditorHost for HeadlessEditor {
    fn token_at(&self, row: u32, column: u32) -> Option<Token> {
        token_at_column(self.line_tokens(row), column).cloned()
    }

    fn cursor_position(&self) -> Position {
        self.cursor
    }

    fn add_selection_range(&mut self, range: EditorRange) {
        self.selection.push(range);
        self.cursor = self.clamp(range.end);
    }

    fn navigate_to(&mut self, row: u32, column: u32) {
        self.set_cursor(Position::new(row, column));
    }

    fn add_marker(&mut self, range: EditorRange, class: &str, style: MarkerStyle) -> MarkerHandle {
        let handle = MarkerHandle(self.next_marker);
        self.next_marker += 1;
        self.markers.insert(
            handle,
            Marker {
                range,
                class: SmolStr::new(class),
                style,
            },
        );
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        if self.markers.remove(&handle).is_none() {
            tracing::trace!("[EDITOR] marker {:?} already removed", handle);
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
