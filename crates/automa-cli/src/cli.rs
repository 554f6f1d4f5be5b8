use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum DumpFormat {
    #[default]
    Text,
    Dot,
    Json,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Parser)]
#[command(name = "automa", bin_name = "automa")]
#[command(about = "Compile regular expressions to NFAs and run membership queries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile an expression and print its automaton
    #[command(after_help = r#"EXAMPLES:
  automa compile '(a|b)*c'
  automa compile --postfix 'ab|*c.'
  automa compile '(0|1)+' --format dot | dot -Tpng -o nfa.png"#)]
    Compile {
        #[command(flatten)]
        expr: ExprArgs,

        /// Output format for the automaton
        #[arg(short, long, value_enum, default_value_t)]
        format: DumpFormat,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Test strings for membership; exits non-zero if any string is rejected
    #[command(after_help = r#"EXAMPLES:
  automa match 'a*b' aab b aba
  automa match --postfix 'ab|*' abba --trace
  printf 'one\ntwo\n' | automa match '(o|n|e|t|w)*'"#)]
    Match {
        #[command(flatten)]
        expr: ExprArgs,

        /// Strings to test; lines from stdin when omitted
        inputs: Vec<String>,

        /// Show the active state set after every character (stderr)
        #[arg(long)]
        trace: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Interactive session over a file of expressions, one per line
    #[command(after_help = r#"Each valid expression prints its postfix form and automaton, then
answers membership queries read from stdin until a blank line."#)]
    Run {
        /// File with one regular expression per line
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
pub struct ExprArgs {
    /// The regular expression (infix unless --postfix)
    pub expr: String,

    /// Treat the expression as already being in postfix form
    #[arg(short, long)]
    pub postfix: bool,
}

#[derive(Args)]
pub struct OutputArgs {
    /// When to color diagnostics
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorChoice,
}
