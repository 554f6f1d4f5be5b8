pub mod compile;
pub mod matching;
pub mod run;

use automa_compiler::{CompileError, compile_postfix, render_error, to_postfix};
use automa_nfa::Nfa;

/// A compiled expression together with the postfix form it went through.
pub(crate) struct Compiled {
    pub postfix: String,
    pub nfa: Nfa,
}

/// Compiles one expression, rendering any diagnostic to stderr.
///
/// Errors are reported against the text of the stage that produced them:
/// infix errors against the original input, postfix errors against the
/// postfix form.
pub(crate) fn compile_expression(
    expr: &str,
    postfix_input: bool,
    colored: bool,
) -> Result<Compiled, ()> {
    let postfix = if postfix_input {
        expr.to_string()
    } else {
        match to_postfix(expr) {
            Ok(postfix) => postfix,
            Err(err) => {
                eprintln!("{}", render_error(expr, &CompileError::from(err), colored));
                return Err(());
            }
        }
    };

    match compile_postfix(&postfix) {
        Ok(nfa) => Ok(Compiled { postfix, nfa }),
        Err(err) => {
            eprintln!("{}", render_error(&postfix, &err, colored));
            Err(())
        }
    }
}
