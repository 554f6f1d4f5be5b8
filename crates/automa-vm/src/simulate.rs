//! On-the-fly subset simulation.

use automa_nfa::{Nfa, StateId};
use indexmap::IndexSet;

use crate::closure::epsilon_closure;
use crate::trace::{NoopTracer, Tracer};

/// One in-flight membership query.
///
/// Owns nothing but the active state set; the automaton is borrowed
/// read-only for the lifetime of the run.
pub struct Simulation<'n> {
    nfa: &'n Nfa,
    active: IndexSet<StateId>,
}

impl<'n> Simulation<'n> {
    /// Starts a run with the epsilon-closure of the start state.
    pub fn new(nfa: &'n Nfa) -> Self {
        let active = epsilon_closure(nfa, [nfa.start()]);
        Self { nfa, active }
    }

    /// States the automaton could currently be in.
    pub fn active(&self) -> &IndexSet<StateId> {
        &self.active
    }

    /// Consume one character: move on matching character edges from every
    /// active state, then re-close under epsilon edges.
    pub fn step(&mut self, ch: char) {
        let mut next = IndexSet::new();
        for &id in &self.active {
            if let Some(targets) = self.nfa.state(id).targets(ch) {
                next.extend(targets.iter().copied());
            }
        }
        self.active = epsilon_closure(self.nfa, next);
    }

    /// True when no state remains reachable. Once stuck, a run stays
    /// stuck: no later character produces states from an empty set.
    pub fn is_stuck(&self) -> bool {
        self.active.is_empty()
    }

    /// Membership by identity: is the designated accept state active?
    pub fn is_accepting(&self) -> bool {
        self.active.contains(&self.nfa.accept())
    }
}

/// Does `nfa` accept `input`?
///
/// The empty input is accepted iff the start state's closure already
/// contains the accept state. Total over any automaton/input pair: a
/// character with no outgoing edge anywhere is an ordinary rejection, not
/// a fault.
pub fn accepts(nfa: &Nfa, input: &str) -> bool {
    accepts_with(nfa, input, &mut NoopTracer)
}

/// [`accepts`], reporting each step to `tracer`.
pub fn accepts_with(nfa: &Nfa, input: &str, tracer: &mut impl Tracer) -> bool {
    let mut sim = Simulation::new(nfa);
    tracer.begin(sim.active());

    for ch in input.chars() {
        sim.step(ch);
        tracer.step(ch, sim.active());
        if sim.is_stuck() {
            tracer.finish(false);
            return false;
        }
    }

    let accepted = sim.is_accepting();
    tracer.finish(accepted);
    accepted
}
