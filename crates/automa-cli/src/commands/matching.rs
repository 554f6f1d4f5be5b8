//! `automa match`: membership queries against one expression.

use std::io::{self, BufRead};
use std::process::ExitCode;

use automa_nfa::Nfa;
use automa_vm::{PrintTracer, accepts, accepts_with};

use crate::cli::{ExprArgs, OutputArgs};
use crate::commands::compile_expression;

pub fn run(expr: &ExprArgs, inputs: &[String], trace: bool, output: &OutputArgs) -> ExitCode {
    let colored = output.color.should_colorize();
    let Ok(compiled) = compile_expression(&expr.expr, expr.postfix, colored) else {
        return ExitCode::FAILURE;
    };

    let mut all_accepted = true;

    if inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => all_accepted &= check(&compiled.nfa, &line, trace),
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        for input in inputs {
            all_accepted &= check(&compiled.nfa, input, trace);
        }
    }

    if all_accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn check(nfa: &Nfa, input: &str, trace: bool) -> bool {
    let accepted = if trace {
        accepts_with(nfa, input, &mut PrintTracer::new(io::stderr()))
    } else {
        accepts(nfa, input)
    };

    let display = if input.is_empty() { "(empty)" } else { input };
    println!("{display}: {}", if accepted { "accept" } else { "reject" });
    accepted
}
