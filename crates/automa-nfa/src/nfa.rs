//! The frozen automaton artifact and its state records.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Index into the automaton's state arena.
///
/// Identity is index equality. Never compare states by label or by their
/// transition structure.
pub type StateId = u32;

/// One state of the automaton.
///
/// Character transitions are set-valued: a character may fan out to several
/// targets. Thompson's construction only ever produces one target per
/// character, but hand-built automata (and the export surface) use the
/// general form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct State {
    /// Diagnostic label (`union_start`, `char_accept`, …). Not load-bearing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<&'static str>,
    pub(crate) transitions: IndexMap<char, IndexSet<StateId>>,
    pub(crate) epsilon: IndexSet<StateId>,
}

impl State {
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Character-transition edges in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (char, &IndexSet<StateId>)> {
        self.transitions.iter().map(|(ch, targets)| (*ch, targets))
    }

    /// Targets reachable on `ch`, if any.
    pub fn targets(&self, ch: char) -> Option<&IndexSet<StateId>> {
        self.transitions.get(&ch)
    }

    /// States reachable without consuming input.
    pub fn epsilon(&self) -> &IndexSet<StateId> {
        &self.epsilon
    }

    /// True when the state has no outgoing edges at all.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty() && self.epsilon.is_empty()
    }
}

/// A compiled automaton: the state arena plus the designated start and
/// accept states.
///
/// Immutable once built (see [`NfaBuilder::finish`](crate::NfaBuilder::finish)).
/// Simulation never mutates the graph, so a shared reference is all a run
/// needs.
#[derive(Debug, Clone, Serialize)]
pub struct Nfa {
    pub(crate) states: Vec<State>,
    pub(crate) start: StateId,
    pub(crate) accept: StateId,
}

impl Nfa {
    pub(crate) fn new(states: Vec<State>, start: StateId, accept: StateId) -> Self {
        Self {
            states,
            start,
            accept,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Get state by id.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states with their ids, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as StateId, s))
    }
}
