//! Compiler for regular expressions in postfix form.
//!
//! Pipeline:
//!
//! ```text
//! postfix text → lex → tokens → build_tree → Expr → thompson → Nfa
//! ```
//!
//! An infix front-end ([`to_postfix`]) sits before the pipeline for human
//! input; the core consumes postfix only. Errors are local to the stage
//! that produced them: one bad expression never poisons a batch.

mod ast;
mod diagnostics;
mod infix;
mod postfix;
mod thompson;
mod token;

#[cfg(test)]
mod infix_tests;

pub use ast::Expr;
pub use diagnostics::render_error;
pub use infix::{InfixError, to_postfix};
pub use postfix::{PostfixError, build_tree};
pub use thompson::{compile, compile_fragment};
pub use token::{Span, Token, TokenKind, lex};

use automa_nfa::Nfa;

/// Any error a compilation pipeline stage can produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Postfix(#[from] PostfixError),
    #[error(transparent)]
    Infix(#[from] InfixError),
}

impl CompileError {
    /// Byte span into the originating expression, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::Postfix(e) => e.span(),
            CompileError::Infix(e) => e.span(),
        }
    }
}

/// Compiles a postfix expression into an automaton.
pub fn compile_postfix(source: &str) -> Result<Nfa, CompileError> {
    let tokens = token::lex(source);
    let tree = postfix::build_tree(&tokens)?;
    Ok(thompson::compile(&tree))
}

/// Compiles an infix expression: conversion to postfix, then the regular
/// pipeline.
pub fn compile_infix(source: &str) -> Result<Nfa, CompileError> {
    let postfix = infix::to_postfix(source)?;
    compile_postfix(&postfix)
}
