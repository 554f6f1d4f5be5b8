//! `automa compile`: print an expression's automaton.

use std::process::ExitCode;

use crate::cli::{DumpFormat, ExprArgs, OutputArgs};
use crate::commands::compile_expression;

pub fn run(expr: &ExprArgs, format: DumpFormat, output: &OutputArgs) -> ExitCode {
    let colored = output.color.should_colorize();
    let Ok(compiled) = compile_expression(&expr.expr, expr.postfix, colored) else {
        return ExitCode::FAILURE;
    };

    match format {
        DumpFormat::Text => {
            if !expr.postfix {
                println!("postfix: {}", compiled.postfix);
                println!();
            }
            print!("{}", compiled.nfa.dump());
        }
        DumpFormat::Dot => print!("{}", compiled.nfa.to_dot()),
        DumpFormat::Json => match serde_json::to_string_pretty(&compiled.nfa) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
