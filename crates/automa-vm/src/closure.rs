//! Epsilon-closure as a worklist fixed point.

use automa_nfa::{Nfa, StateId};
use indexmap::IndexSet;

/// The smallest superset of `seed` closed under epsilon-reachability.
///
/// Explicit stack plus visited-by-id membership, so star/plus epsilon
/// cycles terminate and call depth stays flat no matter how pathological
/// the automaton.
pub fn epsilon_closure(nfa: &Nfa, seed: impl IntoIterator<Item = StateId>) -> IndexSet<StateId> {
    let mut closure: IndexSet<StateId> = seed.into_iter().collect();
    let mut worklist: Vec<StateId> = closure.iter().copied().collect();

    while let Some(id) = worklist.pop() {
        for &target in nfa.state(id).epsilon() {
            if closure.insert(target) {
                worklist.push(target);
            }
        }
    }

    closure
}
