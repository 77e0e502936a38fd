//! Headless editor tests.

use rstest::rstest;
use scope_lens::base::{EditorRange, Position};
use scope_lens::editor::HeadlessEditor;
use scope_lens::oracle::{EditorHost, MarkerStyle, TokenKind};

// ============================================================================
// token_at
// ============================================================================

#[rstest]
#[case(0, "const")]
#[case(5, "const")]
#[case(7, "value")]
#[case(11, "value")]
#[case(12, " ")]
fn test_boundary_resolves_to_left_token(#[case] column: u32, #[case] expected: &str) {
    let editor = HeadlessEditor::new("const value = 1;");
    let token = editor.token_at(0, column).unwrap();
    assert_eq!(token.value, expected);
}

#[test]
fn test_no_token_past_end_of_line_or_buffer() {
    let editor = HeadlessEditor::new("a;\nb");
    assert!(editor.token_at(0, 3).is_none());
    assert!(editor.token_at(1, 2).is_none());
    assert!(editor.token_at(5, 0).is_none());
}

#[rstest]
#[case("const", TokenKind::StorageType, "storage.type")]
#[case("fn", TokenKind::FunctionName, "entity.name.function")]
#[case("p", TokenKind::Parameter, "variable.parameter")]
#[case("return", TokenKind::Keyword, "keyword")]
#[case("42", TokenKind::Numeric, "constant.numeric")]
#[case("true", TokenKind::Language, "constant.language")]
#[case("\"s\"", TokenKind::String, "string")]
fn test_classification(#[case] value: &str, #[case] kind: TokenKind, #[case] name: &str) {
    let editor = HeadlessEditor::new("const fn2 = 0;\nfunction fn(p) { return 42 + true + \"s\"; }");
    let token = editor
        .line_tokens(1)
        .iter()
        .chain(editor.line_tokens(0))
        .find(|t| t.value == value)
        .unwrap();
    assert_eq!(token.kind, kind);
    assert_eq!(token.kind.as_str(), name);
}

#[test]
fn test_tokens_cover_each_line() {
    let source = "const s = 'a';\n  /* c */ s;";
    let editor = HeadlessEditor::new(source);
    for (row, line) in source.lines().enumerate() {
        let rebuilt: String = editor
            .line_tokens(row as u32)
            .iter()
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(rebuilt, line);
    }
}

// ============================================================================
// Selection, navigation and markers
// ============================================================================

#[test]
fn test_selection_is_additive() {
    let mut editor = HeadlessEditor::new("a + a;");
    editor.add_selection_range(EditorRange::from_coords(0, 0, 0, 1));
    editor.add_selection_range(EditorRange::from_coords(0, 4, 0, 5));
    assert_eq!(editor.selection_ranges().len(), 2);

    editor.navigate_to(0, 2);
    assert!(editor.selection_ranges().is_empty());
    assert_eq!(editor.cursor_position(), Position::new(0, 2));
}

#[test]
fn test_marker_handles_are_never_reused() {
    let mut editor = HeadlessEditor::new("x");
    let range = EditorRange::from_coords(0, 0, 0, 1);

    let first = editor.add_marker(range, "m", MarkerStyle::Text);
    editor.remove_marker(first);
    let second = editor.add_marker(range, "m", MarkerStyle::Text);

    assert_ne!(first, second);
    assert!(editor.marker(first).is_none());
    assert_eq!(editor.marker_count(), 1);
}

#[test]
fn test_focus() {
    let mut editor = HeadlessEditor::new("x");
    assert!(!editor.is_focused());
    editor.focus();
    assert!(editor.is_focused());
    editor.blur();
    assert!(!editor.is_focused());
}
