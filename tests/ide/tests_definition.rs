//! Go to definition tests.

use rstest::rstest;
use scope_lens::base::Position;
use scope_lens::ide::IdeAction;
use scope_lens::lang::ExternalLibrary;
use scope_lens::oracle::EditorHost;

use crate::helpers::navigator_helpers::{editor_at, navigator};
use crate::helpers::source_fixtures::{
    BLOCK_COMMENT_PREFIX, DEFINITION_ACROSS_FUNCTION, REFERENCE_AFTER_BRACE, SHADOWED_PARAMETER,
    UNPARSEABLE,
};

// =============================================================================
// GOTO DEFINITION - BASIC
// =============================================================================

#[rstest]
#[case(22)]
#[case(23)]
fn test_reference_in_function_jumps_to_constant(#[case] column: u32) {
    let mut editor = editor_at(DEFINITION_ACROSS_FUNCTION, 1, column);
    let navigator = navigator(1);

    let applied = navigator.dispatch(
        IdeAction::GoToDefinition,
        &mut editor,
        DEFINITION_ACROSS_FUNCTION,
        Position::new(1, column),
    );

    assert!(applied);
    assert_eq!(editor.cursor_position(), Position::new(0, 6));
    assert!(editor.is_focused());
}

#[test]
fn test_reference_after_closing_brace_jumps_to_outer_constant() {
    let mut editor = editor_at(REFERENCE_AFTER_BRACE, 0, 40);
    let navigator = navigator(1);

    assert!(navigator.dispatch(
        IdeAction::GoToDefinition,
        &mut editor,
        REFERENCE_AFTER_BRACE,
        Position::new(0, 40),
    ));
    assert_eq!(editor.cursor_position(), Position::new(0, 6));
}

#[test]
fn test_definition_after_leading_block_comment() {
    let mut editor = editor_at(BLOCK_COMMENT_PREFIX, 1, 0);
    let navigator = navigator(1);

    assert!(navigator.dispatch(
        IdeAction::GoToDefinition,
        &mut editor,
        BLOCK_COMMENT_PREFIX,
        Position::new(1, 0),
    ));
    assert_eq!(editor.cursor_position(), Position::new(0, 16));
}

#[test]
fn test_parameter_reference_jumps_to_parameter() {
    let mut editor = editor_at(SHADOWED_PARAMETER, 2, 12);
    let navigator = navigator(1);

    navigator.dispatch(
        IdeAction::GoToDefinition,
        &mut editor,
        SHADOWED_PARAMETER,
        Position::new(2, 12),
    );
    assert_eq!(editor.cursor_position(), Position::new(1, 11));
}

#[test]
fn test_function_name_jumps_to_declaration() {
    let source = "function add(a, b) { return a + b; }\nadd(1, 2);";
    let mut editor = editor_at(source, 1, 1);
    let navigator = navigator(1);

    navigator.dispatch(IdeAction::GoToDefinition, &mut editor, source, Position::new(1, 1));
    assert_eq!(editor.cursor_position(), Position::new(0, 9));
}

// =============================================================================
// GOTO DEFINITION - NO EFFECT
// =============================================================================

#[test]
fn test_unparseable_source_does_not_move_cursor() {
    let mut editor = editor_at(UNPARSEABLE, 0, 9);
    let navigator = navigator(1);

    let applied = navigator.dispatch(
        IdeAction::GoToDefinition,
        &mut editor,
        UNPARSEABLE,
        Position::new(0, 9),
    );

    assert!(!applied);
    assert_eq!(editor.cursor_position(), Position::new(0, 9));
    assert!(!editor.is_focused());
}

#[test]
fn test_redeclaration_cannot_be_scoped() {
    let source = "const a = 1;\nconst a = 2;\na;";
    let mut editor = editor_at(source, 2, 0);
    let navigator = navigator(1);

    assert!(!navigator.dispatch(IdeAction::GoToDefinition, &mut editor, source, Position::new(2, 0)));
    assert_eq!(editor.cursor_position(), Position::new(2, 0));
}

#[test]
fn test_prelude_name_has_nowhere_to_go() {
    let source = "display(1);";
    let mut editor = editor_at(source, 0, 3);
    let navigator = navigator(1).with_external(ExternalLibrary::new(["display"]));

    assert!(!navigator.dispatch(IdeAction::GoToDefinition, &mut editor, source, Position::new(0, 3)));
    assert_eq!(editor.cursor_position(), Position::new(0, 3));
}
