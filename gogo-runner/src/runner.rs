use std::process::ExitCode;

use gogo_core::lexer::Tokenizer;
use gogo_core::parser::Parser;
use gogo_interpreter::environment::Environment;
use gogo_interpreter::evaluator;
use gogo_interpreter::object::inspect;
use tracing::debug;

pub fn print_tokens(source: &str) {
    for token in Tokenizer::new(source) {
        println!("{}", token);
    }
}

/// Runs a whole source file in a fresh environment and prints the result.
pub fn execute(source: &str, show_tokens: bool) -> ExitCode {
    if show_tokens {
        print_tokens(source);
    }

    let program = match Parser::new(Tokenizer::new(source)).parse_program() {
        Ok(program) => program,
        Err(errors) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            return ExitCode::FAILURE;
        }
    };
    debug!(statements = program.statements.len(), "parsed source file");

    let environment = Environment::new();
    let result = evaluator::eval_program(&program, &environment);
    println!("{}", inspect(&result));

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
