//! Postfix reduction: token sequence → syntax tree.
//!
//! Straight operand-stack evaluation. Binary operators pop right first,
//! then left; concatenation and union compile their branches in order, so
//! the orientation matters.

use crate::ast::Expr;
use crate::token::{Span, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostfixError {
    /// An operator found fewer operands on the stack than it consumes.
    #[error("operator `{op}` is missing an operand")]
    MissingOperand { op: char, span: Span },

    /// More than one tree was left after all tokens were consumed.
    #[error("expression leaves {count} disconnected terms")]
    ExtraOperands { count: usize },

    #[error("empty expression")]
    Empty,
}

impl PostfixError {
    /// Byte span to point at, when the error has a position.
    pub fn span(&self) -> Option<Span> {
        match self {
            PostfixError::MissingOperand { span, .. } => Some(span.clone()),
            PostfixError::ExtraOperands { .. } | PostfixError::Empty => None,
        }
    }
}

/// Reduces a postfix token sequence to a single syntax tree.
///
/// Fails when the operand/operator counts are inconsistent: an operator
/// underflows the stack, or more than one tree remains at the end. Purely
/// functional otherwise.
pub fn build_tree(tokens: &[Token]) -> Result<Expr, PostfixError> {
    let mut stack: Vec<Expr> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Literal(ch) => stack.push(Expr::Literal(ch)),
            TokenKind::Concat | TokenKind::Union => {
                let right = pop_operand(&mut stack, token)?;
                let left = pop_operand(&mut stack, token)?;
                stack.push(match token.kind {
                    TokenKind::Concat => Expr::concat(left, right),
                    _ => Expr::union(left, right),
                });
            }
            TokenKind::Star | TokenKind::Plus | TokenKind::Optional => {
                let inner = pop_operand(&mut stack, token)?;
                stack.push(match token.kind {
                    TokenKind::Star => Expr::star(inner),
                    TokenKind::Plus => Expr::plus(inner),
                    _ => Expr::optional(inner),
                });
            }
        }
    }

    if stack.len() > 1 {
        return Err(PostfixError::ExtraOperands { count: stack.len() });
    }
    stack.pop().ok_or(PostfixError::Empty)
}

fn pop_operand(stack: &mut Vec<Expr>, token: &Token) -> Result<Expr, PostfixError> {
    stack.pop().ok_or_else(|| PostfixError::MissingOperand {
        op: token.kind.glyph(),
        span: token.span.clone(),
    })
}
