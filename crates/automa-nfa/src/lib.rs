//! Nondeterministic finite automata as a flat, index-addressed arena.
//!
//! This crate is the shared artifact between the compiler (which produces
//! automata via Thompson's construction) and the VM (which runs membership
//! queries against them):
//!
//! ```text
//! syntax tree (compiler) → NfaBuilder → Nfa → simulation (vm)
//! ```
//!
//! States live in a flat `Vec` and reference each other by [`StateId`], so
//! the cyclic graphs produced by `*` and `+` need no ownership gymnastics.
//! Two states are the same state iff their ids are equal; labels are
//! diagnostic only and several states may share one.
//!
//! A finished [`Nfa`] is read-only. Concurrent simulations may share a
//! reference to it freely; each run owns nothing but its active state set.

mod build;
mod dump;
mod nfa;


pub use build::{Fragment, NfaBuilder};
pub use nfa::{Nfa, State, StateId};
