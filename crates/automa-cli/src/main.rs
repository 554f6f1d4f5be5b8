mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Compile {
            expr,
            format,
            output,
        } => commands::compile::run(&expr, format, &output),
        Command::Match {
            expr,
            inputs,
            trace,
            output,
        } => commands::matching::run(&expr, &inputs, trace, &output),
        Command::Run { file, output } => commands::run::run(&file, &output),
    }
}
