//! Token kinds of the teaching language.

use logos::Logos;

/// Every lexeme the lexer can produce, trivia included.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    String,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("const")]
    ConstKw,
    #[token("let")]
    LetKw,
    #[token("function")]
    FunctionKw,
    #[token("return")]
    ReturnKw,
    #[token("if")]
    IfKw,
    #[token("else")]
    ElseKw,
    #[token("while")]
    WhileKw,
    #[token("for")]
    ForKw,
    #[token("break")]
    BreakKw,
    #[token("continue")]
    ContinueKw,
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("null")]
    NullKw,
    #[token("undefined")]
    UndefinedKw,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("=>")]
    FatArrow,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    BangEqEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,

    /// Produced by the lexer wrapper for input no rule matches.
    Error,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::LineComment | SyntaxKind::BlockComment
        )
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::ConstKw
                | SyntaxKind::LetKw
                | SyntaxKind::FunctionKw
                | SyntaxKind::ReturnKw
                | SyntaxKind::IfKw
                | SyntaxKind::ElseKw
                | SyntaxKind::WhileKw
                | SyntaxKind::ForKw
                | SyntaxKind::BreakKw
                | SyntaxKind::ContinueKw
                | SyntaxKind::TrueKw
                | SyntaxKind::FalseKw
                | SyntaxKind::NullKw
                | SyntaxKind::UndefinedKw
        )
    }

    pub fn is_opening_delimiter(self) -> bool {
        matches!(
            self,
            SyntaxKind::LParen | SyntaxKind::LBrace | SyntaxKind::LBracket
        )
    }

    pub fn is_closing_delimiter(self) -> bool {
        matches!(
            self,
            SyntaxKind::RParen | SyntaxKind::RBrace | SyntaxKind::RBracket
        )
    }

    /// The closing delimiter matching an opening one.
    pub fn closing_pair(self) -> Option<SyntaxKind> {
        match self {
            SyntaxKind::LParen => Some(SyntaxKind::RParen),
            SyntaxKind::LBrace => Some(SyntaxKind::RBrace),
            SyntaxKind::LBracket => Some(SyntaxKind::RBracket),
            _ => None,
        }
    }

    /// Operators whose surrounding text the editor renders as `keyword.operator`.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::FatArrow
                | SyntaxKind::EqEqEq
                | SyntaxKind::BangEqEq
                | SyntaxKind::LtEq
                | SyntaxKind::GtEq
                | SyntaxKind::AmpAmp
                | SyntaxKind::PipePipe
                | SyntaxKind::Eq
                | SyntaxKind::Lt
                | SyntaxKind::Gt
                | SyntaxKind::Plus
                | SyntaxKind::Minus
                | SyntaxKind::Star
                | SyntaxKind::Slash
                | SyntaxKind::Percent
                | SyntaxKind::Bang
                | SyntaxKind::Question
        )
    }
}
