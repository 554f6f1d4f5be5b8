//! Dump helpers for automaton inspection, snapshot tests, and export.
//!
//! The text dump lists states in arena order with their edges; the DOT
//! output feeds external Graphviz-based visualization. Both are
//! deterministic: transition maps and epsilon sets iterate in insertion
//! order.

use std::fmt::Write;

use crate::nfa::Nfa;

impl Nfa {
    /// Human-readable dump of the whole automaton.
    ///
    /// ```text
    /// start = S2
    /// accept = S3
    ///
    /// S0 char_start: 'a' → S1
    /// S1 char_accept: ε → S0, S3
    /// S2 star_start: ε → S0, S3
    /// S3 star_accept: ∅
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "start = S{}", self.start)?;
        writeln!(w, "accept = S{}", self.accept)?;
        writeln!(w)?;

        for (id, state) in self.iter() {
            write!(w, "S{id}")?;
            if let Some(label) = state.label() {
                write!(w, " {label}")?;
            }
            write!(w, ": ")?;

            if state.is_terminal() {
                writeln!(w, "∅")?;
                continue;
            }

            let mut groups = Vec::new();
            for (ch, targets) in state.transitions() {
                groups.push(format!("'{ch}' → {}", join_ids(targets.iter())));
            }
            if !state.epsilon().is_empty() {
                groups.push(format!("ε → {}", join_ids(state.epsilon().iter())));
            }
            writeln!(w, "{}", groups.join("; "))?;
        }

        Ok(())
    }

    /// Graphviz DOT rendering.
    ///
    /// The start state is filled green and pointed to by an external dot,
    /// the accept state is a red double circle; everything else is blue.
    /// Layout is Graphviz's problem.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        self.format_dot(&mut out).expect("String write never fails");
        out
    }

    fn format_dot(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "digraph nfa {{")?;
        writeln!(w, "    rankdir = LR;")?;
        writeln!(
            w,
            "    node [shape = circle, style = filled, fillcolor = skyblue];"
        )?;
        writeln!(w, "    S{} [fillcolor = lightgreen];", self.start)?;
        writeln!(
            w,
            "    S{} [shape = doublecircle, fillcolor = lightcoral];",
            self.accept
        )?;
        writeln!(w, "    start [shape = point];")?;
        writeln!(w, "    start -> S{};", self.start)?;

        for (id, state) in self.iter() {
            for (ch, targets) in state.transitions() {
                for target in targets {
                    writeln!(
                        w,
                        "    S{id} -> S{target} [label = \"{}\"];",
                        dot_escape(ch)
                    )?;
                }
            }
            for target in state.epsilon() {
                writeln!(w, "    S{id} -> S{target} [label = \"ε\"];")?;
            }
        }

        writeln!(w, "}}")?;
        Ok(())
    }
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a u32>) -> String {
    ids.map(|id| format!("S{id}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn dot_escape(ch: char) -> String {
    match ch {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        _ => ch.to_string(),
    }
}
