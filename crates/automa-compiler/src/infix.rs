//! Infix front-end: validation and shunting-yard conversion to postfix.
//!
//! The infix surface adds grouping parentheses and implicit concatenation
//! on top of the postfix alphabet. `.` is accepted as an explicit
//! concatenation operator; the converter inserts the implicit ones before
//! running shunting-yard, so `(a|b)*c` comes out as `ab|*c.`.
//!
//! Precedence, high to low: postfix quantifiers (`*` `+` `?`), then
//! concatenation, then union. Quantifiers bind to the operand already in
//! the output, so they are emitted the moment they are read.

use logos::Logos;

use crate::token::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum InfixKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(".")]
    Concat,
    #[token("|")]
    Union,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("?")]
    Optional,
    #[regex(r"[^().|*+?]", |lex| lex.slice().chars().next())]
    Literal(char),
}

impl InfixKind {
    fn glyph(self) -> char {
        match self {
            InfixKind::LParen => '(',
            InfixKind::RParen => ')',
            InfixKind::Concat => '.',
            InfixKind::Union => '|',
            InfixKind::Star => '*',
            InfixKind::Plus => '+',
            InfixKind::Optional => '?',
            InfixKind::Literal(ch) => ch,
        }
    }

    fn is_binary(self) -> bool {
        matches!(self, InfixKind::Concat | InfixKind::Union)
    }

    fn is_quantifier(self) -> bool {
        matches!(self, InfixKind::Star | InfixKind::Plus | InfixKind::Optional)
    }

    /// Can this token end an operand (so implicit concatenation may follow)?
    fn ends_operand(self) -> bool {
        matches!(self, InfixKind::Literal(_) | InfixKind::RParen) || self.is_quantifier()
    }

    /// Can this token start an operand?
    fn starts_operand(self) -> bool {
        matches!(self, InfixKind::Literal(_) | InfixKind::LParen)
    }
}

#[derive(Debug, Clone)]
struct InfixToken {
    kind: InfixKind,
    span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InfixError {
    #[error("unmatched `(`")]
    UnclosedParen { span: Span },

    #[error("unmatched `)`")]
    UnopenedParen { span: Span },

    /// A binary operator or quantifier with no operand to apply to.
    #[error("operator `{op}` is missing an operand")]
    MisplacedOperator { op: char, span: Span },

    #[error("empty group `()`")]
    EmptyGroup { span: Span },

    #[error("empty expression")]
    Empty,
}

impl InfixError {
    pub fn span(&self) -> Option<Span> {
        match self {
            InfixError::UnclosedParen { span }
            | InfixError::UnopenedParen { span }
            | InfixError::MisplacedOperator { span, .. }
            | InfixError::EmptyGroup { span } => Some(span.clone()),
            InfixError::Empty => None,
        }
    }
}

/// Converts an infix regular expression to its postfix form.
///
/// The output contains only literals and the five postfix operators; all
/// grouping is resolved here.
pub fn to_postfix(source: &str) -> Result<String, InfixError> {
    let tokens = lex_infix(source);
    if tokens.is_empty() {
        return Err(InfixError::Empty);
    }
    validate(&tokens)?;
    let tokens = insert_concat(tokens);
    Ok(shunting_yard(&tokens))
}

fn lex_infix(source: &str) -> Vec<InfixToken> {
    let mut tokens = Vec::new();
    for (result, span) in InfixKind::lexer(source).spanned() {
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => match source[span.clone()].chars().next() {
                Some(ch) => InfixKind::Literal(ch),
                None => continue,
            },
        };
        tokens.push(InfixToken { kind, span });
    }
    tokens
}

/// Rejects unbalanced parentheses, empty groups, and operators with a
/// missing operand. Everything that survives converts to well-formed
/// postfix.
fn validate(tokens: &[InfixToken]) -> Result<(), InfixError> {
    let mut open_parens: Vec<&InfixToken> = Vec::new();
    let mut previous: Option<&InfixToken> = None;

    for token in tokens {
        match token.kind {
            InfixKind::LParen => open_parens.push(token),
            InfixKind::RParen => {
                if let Some(prev) = previous {
                    if matches!(prev.kind, InfixKind::LParen) {
                        return Err(InfixError::EmptyGroup {
                            span: prev.span.start..token.span.end,
                        });
                    }
                    if prev.kind.is_binary() {
                        return Err(misplaced(prev));
                    }
                }
                if open_parens.pop().is_none() {
                    return Err(InfixError::UnopenedParen {
                        span: token.span.clone(),
                    });
                }
            }
            kind if kind.is_binary() || kind.is_quantifier() => {
                // Both need a finished operand to their left.
                let has_operand = previous.is_some_and(|prev| prev.kind.ends_operand());
                if !has_operand {
                    return Err(misplaced(token));
                }
            }
            _ => {}
        }
        previous = Some(token);
    }

    if let Some(prev) = previous {
        if prev.kind.is_binary() {
            return Err(misplaced(prev));
        }
    }
    if let Some(open) = open_parens.pop() {
        return Err(InfixError::UnclosedParen {
            span: open.span.clone(),
        });
    }

    Ok(())
}

fn misplaced(token: &InfixToken) -> InfixError {
    InfixError::MisplacedOperator {
        op: token.kind.glyph(),
        span: token.span.clone(),
    }
}

/// Inserts explicit concatenation between adjacent operands, e.g.
/// `ab(c)` → `a·b·(c)`.
fn insert_concat(tokens: Vec<InfixToken>) -> Vec<InfixToken> {
    let mut result: Vec<InfixToken> = Vec::with_capacity(tokens.len() * 2);

    for token in tokens {
        if let Some(prev) = result.last() {
            if prev.kind.ends_operand() && token.kind.starts_operand() {
                let at = token.span.start;
                result.push(InfixToken {
                    kind: InfixKind::Concat,
                    span: at..at,
                });
            }
        }
        result.push(token);
    }

    result
}

fn precedence(kind: InfixKind) -> u8 {
    match kind {
        InfixKind::Concat => 2,
        InfixKind::Union => 1,
        _ => 0,
    }
}

fn shunting_yard(tokens: &[InfixToken]) -> String {
    let mut output = String::new();
    let mut ops: Vec<InfixKind> = Vec::new();

    for token in tokens {
        match token.kind {
            InfixKind::Literal(ch) => output.push(ch),
            // The operand is already fully in the output.
            kind if kind.is_quantifier() => output.push(kind.glyph()),
            kind if kind.is_binary() => {
                while let Some(&top) = ops.last() {
                    if top == InfixKind::LParen || precedence(top) < precedence(kind) {
                        break;
                    }
                    output.push(top.glyph());
                    ops.pop();
                }
                ops.push(kind);
            }
            InfixKind::LParen => ops.push(InfixKind::LParen),
            InfixKind::RParen => {
                while let Some(top) = ops.pop() {
                    if top == InfixKind::LParen {
                        break;
                    }
                    output.push(top.glyph());
                }
            }
            _ => {}
        }
    }

    while let Some(op) = ops.pop() {
        debug_assert!(op != InfixKind::LParen, "unbalanced parens survived validation");
        if op.is_binary() {
            output.push(op.glyph());
        }
    }

    output
}
