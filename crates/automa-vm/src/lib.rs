//! Membership queries against compiled NFAs.
//!
//! The simulator runs the subset construction on the fly: it keeps the set
//! of states the automaton could currently be in, advances it per input
//! character, and re-closes under epsilon edges after every move. Nothing
//! is precomputed and the automaton itself is never mutated; concurrent
//! runs can share one `&Nfa`, each owning only its active set.

mod closure;
mod simulate;
mod trace;

#[cfg(test)]
mod closure_tests;
#[cfg(test)]
mod simulate_tests;

pub use closure::epsilon_closure;
pub use simulate::{Simulation, accepts, accepts_with};
pub use trace::{NoopTracer, PrintTracer, Tracer};
