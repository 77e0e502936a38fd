//! Line tokenizer mirroring the browser editor's highlighting mode.

use crate::lang::{Lexer, SyntaxKind};
use crate::oracle::{Token, TokenKind};

/// Where the tokenizer is relative to a `function` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderState {
    None,
    /// After `function`, before the name or parameter list.
    Name,
    /// Directly before the parameter list.
    BeforeParams,
    InParams,
}

/// Split `text` into lines of highlighting tokens.
///
/// Every line is covered without gaps: concatenating the values of a line's
/// tokens yields the line itself.
pub fn tokenize_lines(text: &str) -> Vec<Vec<Token>> {
    let mut lines: Vec<Vec<Token>> = vec![Vec::new()];
    let mut column = 0u32;
    let mut header = HeaderState::None;

    for lexeme in Lexer::new(text) {
        let kind = classify(lexeme.kind, &mut header);

        for (i, piece) in lexeme.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
                column = 0;
            }
            let piece = piece.strip_suffix('\r').unwrap_or(piece);
            if piece.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                line.push(Token::new(kind, piece, column));
            }
            column += piece.chars().count() as u32;
        }
    }

    lines
}

fn classify(kind: SyntaxKind, header: &mut HeaderState) -> TokenKind {
    if kind.is_trivia() || kind == SyntaxKind::Error {
        return match kind {
            SyntaxKind::LineComment | SyntaxKind::BlockComment => TokenKind::Comment,
            _ => TokenKind::Text,
        };
    }

    let state = *header;
    *header = match (state, kind) {
        (_, SyntaxKind::FunctionKw) => HeaderState::Name,
        (HeaderState::Name, SyntaxKind::Ident) => HeaderState::BeforeParams,
        (HeaderState::Name | HeaderState::BeforeParams, SyntaxKind::LParen) => {
            HeaderState::InParams
        }
        (HeaderState::InParams, SyntaxKind::Ident | SyntaxKind::Comma) => HeaderState::InParams,
        _ => HeaderState::None,
    };

    match kind {
        SyntaxKind::Ident => match state {
            HeaderState::Name => TokenKind::FunctionName,
            HeaderState::InParams => TokenKind::Parameter,
            _ => TokenKind::Identifier,
        },
        SyntaxKind::ConstKw | SyntaxKind::LetKw | SyntaxKind::FunctionKw => {
            TokenKind::StorageType
        }
        SyntaxKind::TrueKw | SyntaxKind::FalseKw | SyntaxKind::NullKw | SyntaxKind::UndefinedKw => {
            TokenKind::Language
        }
        k if k.is_keyword() => TokenKind::Keyword,
        SyntaxKind::Number => TokenKind::Numeric,
        SyntaxKind::String => TokenKind::String,
        k if k.is_opening_delimiter() => TokenKind::LParen,
        k if k.is_closing_delimiter() => TokenKind::RParen,
        k if k.is_operator() => TokenKind::Operator,
        _ => TokenKind::Punctuation,
    }
}

/// The token a cursor at `column` lands on.
///
/// Returns the first token of the line that covers `column`. A cursor
/// sitting between two tokens therefore resolves to the left one.
pub fn token_at_column(line: &[Token], column: u32) -> Option<&Token> {
    line.iter().find(|token| token.covers(column))
}
