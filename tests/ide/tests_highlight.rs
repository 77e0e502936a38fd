//! Occurrence highlighting tests.

use std::time::{Duration, Instant};

use scope_lens::base::{EditorRange, LanguageLevel, Position};
use scope_lens::ide::{
    DEFAULT_MARKER_CLASS, HighlightConfig, HighlightManager, LocationTranslator, Navigator,
    NavigatorConfig, SymbolActions,
};
use scope_lens::lang::SourceLanguage;
use scope_lens::oracle::MarkerStyle;

use crate::helpers::navigator_helpers::{editor_at, navigator};
use crate::helpers::scripted_editor::ScriptedEditor;
use crate::helpers::source_fixtures::{CONST_AND_USES, UNPARSEABLE};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================================
// HIGHLIGHT - IDEMPOTENCE
// =============================================================================

#[test]
fn test_repeated_refresh_keeps_marker_count() {
    let mut editor = editor_at(CONST_AND_USES, 1, 0);
    let mut navigator = navigator(1);
    let start = Instant::now();

    navigator.on_cursor_or_text_changed(start);
    navigator.tick(start + ms(30), &mut editor, CONST_AND_USES);
    let first: Vec<_> = editor.markers().into_iter().map(|(h, _)| h).collect();
    assert_eq!(first.len(), 3);

    navigator.on_cursor_or_text_changed(start + ms(40));
    navigator.tick(start + ms(70), &mut editor, CONST_AND_USES);
    let second: Vec<_> = editor.markers().into_iter().map(|(h, _)| h).collect();
    assert_eq!(second.len(), 3);
    assert!(first.iter().all(|h| !second.contains(h)));
}

#[test]
fn test_burst_of_changes_converges() {
    let mut editor = editor_at(CONST_AND_USES, 1, 0);
    let mut navigator = navigator(1);
    let start = Instant::now();

    for step in 0..3 {
        navigator.on_cursor_or_text_changed(start + ms(10 * step));
    }

    assert_eq!(navigator.tick(start + ms(40), &mut editor, CONST_AND_USES), 2);
    assert_eq!(navigator.highlight().pending(), 1);
    assert_eq!(editor.marker_count(), 3);

    assert_eq!(navigator.tick(start + ms(50), &mut editor, CONST_AND_USES), 1);
    assert_eq!(editor.marker_count(), 3);
}

#[test]
fn test_old_markers_are_removed_before_new_ones_are_added() {
    let position = Position::new(1, 0);
    let mut editor = ScriptedEditor::new(position).with_identifier(1, 0, "n", 0);
    let actions = SymbolActions::new(&SourceLanguage, LocationTranslator::default());
    let mut manager = HighlightManager::new(HighlightConfig::default());

    manager.refresh(&actions, &mut editor, CONST_AND_USES, LanguageLevel::new(1));
    let first = manager.markers().to_vec();
    manager.refresh(&actions, &mut editor, CONST_AND_USES, LanguageLevel::new(1));

    assert_eq!(editor.removed, first);
    assert_eq!(editor.markers.len(), 3);
    assert_eq!(editor.focus_calls, 0);
    assert!(editor.selections.is_empty());
}

// =============================================================================
// HIGHLIGHT - CURRENT STATE
// =============================================================================

#[test]
fn test_refresh_reads_cursor_when_it_runs() {
    let mut editor = editor_at(CONST_AND_USES, 1, 0);
    let mut navigator = navigator(1);
    let start = Instant::now();

    navigator.on_cursor_or_text_changed(start);
    editor.set_cursor(Position::new(1, 3));
    navigator.tick(start + ms(30), &mut editor, CONST_AND_USES);

    assert_eq!(editor.marker_count(), 0);
    assert!(navigator.highlight().occurrences().is_empty());
}

#[test]
fn test_refresh_uses_current_text() {
    let mut editor = editor_at(CONST_AND_USES, 1, 0);
    let mut navigator = navigator(1);
    let start = Instant::now();

    navigator.on_cursor_or_text_changed(start);
    navigator.tick(start + ms(30), &mut editor, CONST_AND_USES);
    assert_eq!(editor.marker_count(), 3);

    let edited = "const n = 1;\nn;";
    editor.set_text(edited);
    editor.set_cursor(Position::new(1, 0));
    navigator.on_cursor_or_text_changed(start + ms(31));
    navigator.tick(start + ms(61), &mut editor, edited);
    assert_eq!(
        navigator.highlight().occurrences(),
        &[
            EditorRange::from_coords(0, 6, 0, 7),
            EditorRange::from_coords(1, 0, 1, 1),
        ]
    );
}

#[test]
fn test_unparseable_text_clears_highlights() {
    let mut editor = editor_at(CONST_AND_USES, 1, 0);
    let mut navigator = navigator(1);
    let start = Instant::now();

    navigator.on_cursor_or_text_changed(start);
    navigator.tick(start + ms(30), &mut editor, CONST_AND_USES);

    editor.set_text(UNPARSEABLE);
    editor.set_cursor(Position::new(0, 9));
    navigator.on_cursor_or_text_changed(start + ms(40));
    navigator.tick(start + ms(70), &mut editor, UNPARSEABLE);
    assert_eq!(editor.marker_count(), 0);
}

#[test]
fn test_highlight_does_not_jump_to_neighbour() {
    // Cursor on the space before `n`: explicit actions would find `n`,
    // highlighting must not.
    let mut editor = editor_at(CONST_AND_USES, 1, 4);
    let mut navigator = navigator(1);
    let start = Instant::now();

    navigator.on_cursor_or_text_changed(start);
    navigator.tick(start + ms(30), &mut editor, CONST_AND_USES);
    assert_eq!(editor.marker_count(), 0);
}

// =============================================================================
// HIGHLIGHT - CONFIGURATION
// =============================================================================

#[test]
fn test_markers_carry_configured_class_and_style() {
    let mut editor = editor_at(CONST_AND_USES, 1, 0);
    let config = NavigatorConfig::default().with_highlight(
        HighlightConfig::default()
            .with_delay(ms(5))
            .with_marker_class("occ")
            .with_style(MarkerStyle::FullLine),
    );
    let mut navigator = Navigator::new(SourceLanguage, config);
    let start = Instant::now();

    let deadline = navigator.on_cursor_or_text_changed(start);
    assert_eq!(deadline, start + ms(5));
    navigator.tick(deadline, &mut editor, CONST_AND_USES);

    for (_, marker) in editor.markers() {
        assert_eq!(marker.class, "occ");
        assert_eq!(marker.style, MarkerStyle::FullLine);
    }
}

#[test]
fn test_default_marker_class() {
    let mut editor = editor_at(CONST_AND_USES, 1, 0);
    let mut navigator = navigator(1);
    let start = Instant::now();

    navigator.on_cursor_or_text_changed(start);
    navigator.tick(start + ms(30), &mut editor, CONST_AND_USES);
    assert!(
        editor
            .markers()
            .iter()
            .all(|(_, m)| m.class == DEFAULT_MARKER_CLASS && m.style == MarkerStyle::Text)
    );
}
