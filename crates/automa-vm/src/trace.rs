//! Tracing hooks for watching a simulation run.
//!
//! The tracer owns all display concerns; the simulator hands it raw data it
//! already has. With [`NoopTracer`] every hook is an inlined empty function,
//! so the untraced path pays nothing.

use std::io;

use automa_nfa::StateId;
use indexmap::IndexSet;

/// Instrumentation points of one membership query.
pub trait Tracer {
    /// Called once with the closure of the start state, before any input.
    fn begin(&mut self, active: &IndexSet<StateId>);

    /// Called after each consumed character with the new active set.
    fn step(&mut self, ch: char, active: &IndexSet<StateId>);

    /// Called once with the verdict.
    fn finish(&mut self, accepted: bool);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn begin(&mut self, _active: &IndexSet<StateId>) {}

    #[inline(always)]
    fn step(&mut self, _ch: char, _active: &IndexSet<StateId>) {}

    #[inline(always)]
    fn finish(&mut self, _accepted: bool) {}
}

/// Tracer that writes one line per event.
///
/// ```text
/// ε-closure(start) = {S2, S0, S3}
/// 'a' → {S1, S0, S3}
/// 'b' → ∅
/// reject
/// ```
pub struct PrintTracer<W> {
    out: W,
}

impl<W: io::Write> PrintTracer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: io::Write> Tracer for PrintTracer<W> {
    fn begin(&mut self, active: &IndexSet<StateId>) {
        let _ = writeln!(self.out, "ε-closure(start) = {}", format_set(active));
    }

    fn step(&mut self, ch: char, active: &IndexSet<StateId>) {
        let _ = writeln!(self.out, "'{ch}' → {}", format_set(active));
    }

    fn finish(&mut self, accepted: bool) {
        let _ = writeln!(self.out, "{}", if accepted { "accept" } else { "reject" });
    }
}

fn format_set(active: &IndexSet<StateId>) -> String {
    if active.is_empty() {
        return "∅".to_string();
    }
    let ids: Vec<String> = active.iter().map(|id| format!("S{id}")).collect();
    format!("{{{}}}", ids.join(", "))
}
