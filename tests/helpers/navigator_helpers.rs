//! Helpers for driving a navigator against a headless editor.

use scope_lens::base::{LanguageLevel, Position};
use scope_lens::editor::HeadlessEditor;
use scope_lens::ide::{Navigator, NavigatorConfig};
use scope_lens::lang::SourceLanguage;

/// A navigator over the reference language at the given chapter.
pub fn navigator(chapter: u8) -> Navigator<SourceLanguage> {
    Navigator::new(
        SourceLanguage,
        NavigatorConfig::default().with_level(LanguageLevel::new(chapter)),
    )
}

/// A headless editor holding `source` with the cursor at `(row, column)`.
pub fn editor_at(source: &str, row: u32, column: u32) -> HeadlessEditor {
    let mut editor = HeadlessEditor::new(source);
    editor.set_cursor(Position::new(row, column));
    editor
}
