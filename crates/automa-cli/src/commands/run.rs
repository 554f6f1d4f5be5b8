//! `automa run`: interactive session over a file of expressions.
//!
//! For each non-empty line: compile, show the postfix form and the
//! automaton, then answer membership queries from stdin until a blank line.
//! An invalid expression is reported and skipped; the batch continues.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use automa_vm::accepts;

use crate::cli::OutputArgs;
use crate::commands::compile_expression;

pub fn run(file: &Path, output: &OutputArgs) -> ExitCode {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", file.display());
            return ExitCode::FAILURE;
        }
    };

    let colored = output.color.should_colorize();
    let stdin = io::stdin();
    let mut queries = stdin.lock().lines();

    for expr in content.lines() {
        let expr = expr.trim();
        if expr.is_empty() {
            continue;
        }

        println!("expression: {expr}");
        if let Ok(compiled) = compile_expression(expr, false, colored) {
            println!("postfix: {}", compiled.postfix);
            println!();
            print!("{}", compiled.nfa.dump());

            loop {
                print!("> ");
                let _ = io::stdout().flush();
                // EOF or a read error ends the query loop for this expression.
                let Some(Ok(query)) = queries.next() else {
                    break;
                };
                if query.is_empty() {
                    break;
                }
                println!("{}", if accepts(&compiled.nfa, &query) {
                    "accept"
                } else {
                    "reject"
                });
            }
        }
        println!("{}", "=".repeat(50));
    }

    ExitCode::SUCCESS
}
