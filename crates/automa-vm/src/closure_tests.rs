//! Tests for the epsilon-closure fixed point.

use automa_nfa::{Fragment, NfaBuilder, StateId};
use indexmap::IndexSet;

use super::*;

#[test]
fn closure_of_state_without_epsilon_edges_is_itself() {
    let mut b = NfaBuilder::new();
    let s0 = b.add_state();
    let s1 = b.add_state();
    b.add_transition(s0, 'a', s1);
    let nfa = b.finish(Fragment::new(s0, s1));

    let closure = epsilon_closure(&nfa, [s0]);
    let expected: IndexSet<StateId> = [s0].into_iter().collect();
    assert_eq!(closure, expected);
}

#[test]
fn mutual_epsilon_cycle_terminates() {
    let mut b = NfaBuilder::new();
    let s0 = b.add_state();
    let s1 = b.add_state();
    b.add_epsilon(s0, s1);
    b.add_epsilon(s1, s0);
    let nfa = b.finish(Fragment::new(s0, s1));

    let closure = epsilon_closure(&nfa, [s0]);
    let expected: IndexSet<StateId> = [s0, s1].into_iter().collect();
    assert_eq!(closure, expected);
}

#[test]
fn star_cycle_produces_a_finite_closure() {
    // a* wires char_accept back to char_start; the loop must not spin.
    let nfa = automa_compiler::compile_postfix("a*").unwrap();

    let closure = epsilon_closure(&nfa, [nfa.start()]);
    assert!(closure.contains(&nfa.accept()));
    assert_eq!(closure.len(), 3);
}

#[test]
fn closure_follows_chains_transitively() {
    let mut b = NfaBuilder::new();
    let s0 = b.add_state();
    let s1 = b.add_state();
    let s2 = b.add_state();
    let s3 = b.add_state();
    b.add_epsilon(s0, s1);
    b.add_epsilon(s1, s2);
    b.add_epsilon(s2, s3);
    let nfa = b.finish(Fragment::new(s0, s3));

    assert_eq!(epsilon_closure(&nfa, [s0]).len(), 4);
}

#[test]
fn closure_of_empty_seed_is_empty() {
    let nfa = automa_compiler::compile_postfix("a").unwrap();
    assert!(epsilon_closure(&nfa, std::iter::empty::<StateId>()).is_empty());
}

#[test]
fn closure_is_idempotent() {
    let nfa = automa_compiler::compile_postfix("ab|*").unwrap();

    let once = epsilon_closure(&nfa, [nfa.start()]);
    let twice = epsilon_closure(&nfa, once.iter().copied());
    assert_eq!(once, twice);
}
