//! Action menu tests.

use scope_lens::base::{Position, ScreenPoint};
use scope_lens::editor::HeadlessEditor;
use scope_lens::ide::{EMPTY_MENU_LABEL, IdeAction, MenuEntry, MenuEvent, MenuItem, MenuState};
use scope_lens::oracle::EditorHost;

use crate::helpers::navigator_helpers::{editor_at, navigator};
use crate::helpers::source_fixtures::eleven_lines;

fn alt_click(x: i32, y: i32) -> MenuEvent {
    MenuEvent::Click {
        point: ScreenPoint::new(x, y),
        modifier: true,
    }
}

// =============================================================================
// MENU - POSITION LATCHING
// =============================================================================

#[test]
fn test_selected_action_runs_at_position_captured_on_open() {
    let source = eleven_lines();
    let mut editor = editor_at(&source, 3, 5);
    let mut navigator = navigator(1);

    navigator.handle_menu_event(alt_click(120, 48), Some(&mut editor), &source);
    assert_eq!(
        navigator.menu().state(),
        MenuState::Open {
            anchor: ScreenPoint::new(120, 48),
            captured: Position::new(3, 5),
        }
    );

    editor.set_cursor(Position::new(10, 0));
    let dispatched = navigator
        .handle_menu_event(MenuEvent::Select(1), Some(&mut editor), &source)
        .unwrap();

    assert_eq!(dispatched.action, IdeAction::GoToDefinition);
    assert_eq!(dispatched.position, Position::new(3, 5));
    // `alpha` on row 3, not `gamma` on row 10
    assert_eq!(editor.cursor_position(), Position::new(0, 6));
    assert!(!navigator.menu().is_open());
}

#[test]
fn test_refactor_selects_occurrences_at_captured_position() {
    let source = eleven_lines();
    let mut editor = editor_at(&source, 3, 5);
    let mut navigator = navigator(1);

    navigator.handle_menu_event(alt_click(0, 0), Some(&mut editor), &source);
    editor.set_cursor(Position::new(10, 0));
    navigator.handle_menu_event(MenuEvent::Select(0), Some(&mut editor), &source);

    assert_eq!(editor.selection_ranges().len(), 2);
    assert_eq!(editor.selection_ranges()[0].start, Position::new(0, 6));
    assert!(editor.is_focused());
}

// =============================================================================
// MENU - OPEN AND CLOSE
// =============================================================================

#[test]
fn test_click_without_modifier_is_ignored() {
    let source = eleven_lines();
    let mut editor = editor_at(&source, 3, 5);
    let mut navigator = navigator(1);

    let click = MenuEvent::Click {
        point: ScreenPoint::new(3, 3),
        modifier: false,
    };
    assert_eq!(navigator.handle_menu_event(click, Some(&mut editor), &source), None);
    assert!(!navigator.menu().is_open());
    assert!(navigator.render_menu(Some(&editor)).is_none());
}

#[test]
fn test_no_editor_attached() {
    let mut navigator = navigator(1);
    assert_eq!(
        navigator.handle_menu_event::<HeadlessEditor>(alt_click(1, 1), None, ""),
        None
    );
    assert_eq!(navigator.menu().state(), MenuState::Closed);
}

#[test]
fn test_click_outside_dismisses_without_effect() {
    let source = eleven_lines();
    let mut editor = editor_at(&source, 3, 5);
    let mut navigator = navigator(1);

    navigator.handle_menu_event(alt_click(1, 1), Some(&mut editor), &source);
    assert_eq!(
        navigator.handle_menu_event(MenuEvent::ClickOutside, Some(&mut editor), &source),
        None
    );

    assert!(!navigator.menu().is_open());
    assert_eq!(editor.cursor_position(), Position::new(3, 5));
    assert!(editor.selection_ranges().is_empty());
}

#[test]
fn test_select_while_closed_does_nothing() {
    let source = eleven_lines();
    let mut editor = editor_at(&source, 3, 5);
    let mut navigator = navigator(1);

    assert_eq!(
        navigator.handle_menu_event(MenuEvent::Select(1), Some(&mut editor), &source),
        None
    );
    assert_eq!(editor.cursor_position(), Position::new(3, 5));
}

// =============================================================================
// MENU - RENDERING
// =============================================================================

#[test]
fn test_predicate_sees_current_cursor() {
    let source = eleven_lines();
    let mut editor = editor_at(&source, 3, 5);
    let mut navigator = navigator(1).with_menu_items(vec![
        MenuItem::new("Refactor", IdeAction::SelectAllOccurrences),
        MenuItem::new("Go to definition", IdeAction::GoToDefinition)
            .with_predicate(|cursor| cursor.is_some_and(|p| p.row < 5)),
    ]);

    navigator.handle_menu_event(alt_click(1, 1), Some(&mut editor), &source);
    assert_eq!(navigator.render_menu(Some(&editor)).unwrap().entries.len(), 2);

    editor.set_cursor(Position::new(10, 0));
    let view = navigator.render_menu(Some(&editor)).unwrap();
    assert_eq!(
        view.entries,
        vec![MenuEntry::Item {
            index: 0,
            label: "Refactor".into()
        }]
    );
}

#[test]
fn test_empty_menu_shows_placeholder() {
    let source = eleven_lines();
    let mut editor = editor_at(&source, 3, 5);
    let mut navigator = navigator(1).with_menu_items(Vec::new());

    navigator.handle_menu_event(alt_click(1, 1), Some(&mut editor), &source);
    let view = navigator.render_menu(Some(&editor)).unwrap();
    assert_eq!(view.entries, vec![MenuEntry::Placeholder(EMPTY_MENU_LABEL)]);
}
