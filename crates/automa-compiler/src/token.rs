//! Lexer for postfix expressions.
//!
//! The operator alphabet is `.` `|` `*` `+` `?`; every other character is a
//! literal, including `(` and `)`. Grouping only exists in the infix layer.
//! Tokens carry byte spans so malformed input can be reported in place.

use logos::Logos;
use std::ops::Range;

/// Byte range into the source expression.
pub type Span = Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Binary concatenation.
    #[token(".")]
    Concat,
    /// Binary union.
    #[token("|")]
    Union,
    /// Zero or more.
    #[token("*")]
    Star,
    /// One or more.
    #[token("+")]
    Plus,
    /// Zero or one.
    #[token("?")]
    Optional,
    /// Any non-operator character, taken verbatim.
    #[regex(r"[^.|*+?]", |lex| lex.slice().chars().next())]
    Literal(char),
}

impl TokenKind {
    /// The character this token was lexed from.
    pub fn glyph(self) -> char {
        match self {
            TokenKind::Concat => '.',
            TokenKind::Union => '|',
            TokenKind::Star => '*',
            TokenKind::Plus => '+',
            TokenKind::Optional => '?',
            TokenKind::Literal(ch) => ch,
        }
    }
}

/// Span-carrying token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenizes a postfix expression.
///
/// The catch-all literal arm makes the lexer total: every character lexes
/// to exactly one token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (result, span) in TokenKind::lexer(source).spanned() {
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => match source[span.clone()].chars().next() {
                Some(ch) => TokenKind::Literal(ch),
                None => continue,
            },
        };
        tokens.push(Token { kind, span });
    }
    tokens
}
