//! Acceptance semantics, operator by operator.

use automa_compiler::compile_postfix;
use automa_nfa::{Fragment, Nfa, NfaBuilder};

use super::*;

fn nfa(postfix: &str) -> Nfa {
    compile_postfix(postfix).unwrap()
}

#[test]
fn literal_accepts_exactly_itself() {
    let nfa = nfa("a");
    assert!(accepts(&nfa, "a"));
    assert!(!accepts(&nfa, ""));
    assert!(!accepts(&nfa, "b"));
    assert!(!accepts(&nfa, "aa"));
}

#[test]
fn concatenation_requires_both_parts_in_order() {
    let nfa = nfa("ab.");
    assert!(accepts(&nfa, "ab"));
    assert!(!accepts(&nfa, ""));
    assert!(!accepts(&nfa, "a"));
    assert!(!accepts(&nfa, "b"));
    assert!(!accepts(&nfa, "ba"));
}

#[test]
fn union_accepts_either_branch_only() {
    let nfa = nfa("ab|");
    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "b"));
    assert!(!accepts(&nfa, "c"));
    assert!(!accepts(&nfa, "ab"));
}

#[test]
fn star_accepts_any_repetition_count() {
    let nfa = nfa("a*");
    assert!(accepts(&nfa, ""));
    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "aaaa"));
    assert!(!accepts(&nfa, "b"));
    assert!(!accepts(&nfa, "ab"));
}

#[test]
fn plus_requires_at_least_one_pass() {
    let nfa = nfa("a+");
    assert!(!accepts(&nfa, ""));
    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "aaa"));
    assert!(!accepts(&nfa, "ba"));
}

#[test]
fn plus_of_a_nullable_operand_accepts_empty() {
    let nfa = nfa("a?+");
    assert!(accepts(&nfa, ""));
    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "aa"));
}

#[test]
fn optional_accepts_empty_or_one() {
    let nfa = nfa("a?");
    assert!(accepts(&nfa, ""));
    assert!(accepts(&nfa, "a"));
    assert!(!accepts(&nfa, "aa"));
}

#[test]
fn star_of_group_repeats_the_whole_group() {
    // (ab)*
    let nfa = nfa("ab.*");
    assert!(accepts(&nfa, ""));
    assert!(accepts(&nfa, "ab"));
    assert!(accepts(&nfa, "abab"));
    assert!(!accepts(&nfa, "aba"));
}

#[test]
fn binary_string_language() {
    // (0|1)+@ : one or more binary digits, then a marker.
    let nfa = nfa("01|+@.");
    assert!(accepts(&nfa, "0@"));
    assert!(accepts(&nfa, "1011@"));
    assert!(!accepts(&nfa, "@"));
    assert!(!accepts(&nfa, "1011"));
    assert!(!accepts(&nfa, "1021@"));
}

#[test]
fn a_stuck_run_stays_stuck() {
    let nfa = nfa("ab.");
    let mut sim = Simulation::new(&nfa);

    sim.step('x');
    assert!(sim.is_stuck());
    assert!(!sim.is_accepting());

    // A later matching character cannot revive an empty active set.
    sim.step('a');
    assert!(sim.is_stuck());
}

#[test]
fn identity_not_label_decides_acceptance() {
    // Two distinct states carrying the same diagnostic label: the start is
    // still not the accept state.
    let mut b = NfaBuilder::new();
    let first = b.add_labeled("twin");
    let second = b.add_labeled("twin");
    let nfa = b.finish(Fragment::new(first, second));
    assert!(!accepts(&nfa, ""));

    // Same label again, but this time genuinely the same state.
    let mut b = NfaBuilder::new();
    let only = b.add_labeled("twin");
    let nfa = b.finish(Fragment::new(only, only));
    assert!(accepts(&nfa, ""));
}

#[test]
fn character_fan_out_tracks_every_target() {
    let mut b = NfaBuilder::new();
    let s0 = b.add_state();
    let dead_end = b.add_state();
    let goal = b.add_state();
    b.add_transition(s0, 'a', dead_end);
    b.add_transition(s0, 'a', goal);
    let nfa = b.finish(Fragment::new(s0, goal));

    assert!(accepts(&nfa, "a"));
    assert!(!accepts(&nfa, "aa"));
}

#[test]
fn trace_of_an_accepting_run() {
    let nfa = nfa("a*");
    let mut out = Vec::new();

    assert!(accepts_with(&nfa, "aa", &mut PrintTracer::new(&mut out)));
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    ε-closure(start) = {S2, S0, S3}
    'a' → {S1, S0, S3}
    'a' → {S1, S0, S3}
    accept
    ");
}

#[test]
fn trace_of_a_rejecting_run_stops_at_the_empty_set() {
    let nfa = nfa("a");
    let mut out = Vec::new();

    assert!(!accepts_with(&nfa, "ba", &mut PrintTracer::new(&mut out)));
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    ε-closure(start) = {S0}
    'b' → ∅
    reject
    ");
}
