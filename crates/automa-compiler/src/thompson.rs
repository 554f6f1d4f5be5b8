//! Thompson lowering: syntax tree → NFA.
//!
//! Structural recursion over [`Expr`], one arm per variant, each calling the
//! matching builder combinator. Total over well-formed trees; a malformed
//! tree cannot arrive here once postfix reduction has succeeded.

use automa_nfa::{Fragment, Nfa, NfaBuilder};

use crate::ast::Expr;

/// Compiles a syntax tree into a finished automaton.
pub fn compile(expr: &Expr) -> Nfa {
    let mut builder = NfaBuilder::new();
    let fragment = compile_fragment(&mut builder, expr);
    builder.finish(fragment)
}

/// Compiles `expr` into `builder`, returning the resulting fragment.
///
/// Children are compiled before their operator wires them together, so
/// sibling fragments stay disjoint until composition.
pub fn compile_fragment(builder: &mut NfaBuilder, expr: &Expr) -> Fragment {
    match expr {
        Expr::Literal(ch) => builder.literal(*ch),
        Expr::Concat(left, right) => {
            let left = compile_fragment(builder, left);
            let right = compile_fragment(builder, right);
            builder.concat(left, right)
        }
        Expr::Union(left, right) => {
            let left = compile_fragment(builder, left);
            let right = compile_fragment(builder, right);
            builder.union(left, right)
        }
        Expr::Star(inner) => {
            let inner = compile_fragment(builder, inner);
            builder.star(inner)
        }
        Expr::Plus(inner) => {
            let inner = compile_fragment(builder, inner);
            builder.plus(inner)
        }
        Expr::Optional(inner) => {
            let inner = compile_fragment(builder, inner);
            builder.optional(inner)
        }
    }
}
