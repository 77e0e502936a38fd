//! Token resolution around a cursor.

use crate::base::Position;
use crate::oracle::{EditorHost, Token, TokenKind};

/// Column offsets checked for an explicit action: center, left, right.
pub const DEFAULT_OFFSETS: &[i32] = &[0, -1, 1];

/// Column offsets checked for ambient highlighting: the cursor column only.
pub const CURSOR_ONLY_OFFSETS: &[i32] = &[0];

/// Collect the tokens of an allowed kind around `position`.
///
/// The editor is asked for the token at `position.column + offset` for every
/// offset (clamped at column 0), in offset order. A token reached from more
/// than one offset is kept once, at its first position. The cursor sitting on
/// a token boundary is why neighbours are checked at all.
///
/// An empty result is a normal outcome.
pub fn resolve_candidates<E>(
    editor: &E,
    position: Position,
    allowed: &[TokenKind],
    offsets: &[i32],
) -> Vec<Token>
where
    E: EditorHost + ?Sized,
{
    let mut candidates: Vec<Token> = Vec::with_capacity(offsets.len());

    for &offset in offsets {
        let at = position.offset_column(offset);
        let Some(token) = editor.token_at(at.row, at.column) else {
            continue;
        };
        if !allowed.contains(&token.kind) {
            continue;
        }
        if candidates
            .iter()
            .any(|c| c.start == token.start && c.value == token.value)
        {
            continue;
        }
        candidates.push(token);
    }

    candidates
}
