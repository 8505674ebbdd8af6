use std::ops::ControlFlow;

use gogo_core::ast::Program;
use gogo_core::lexer::Tokenizer;
use gogo_core::parser::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::runner::print_tokens;

const PROMPT: &str = ">> ";

pub enum ReadOutput {
    ControlFlow(ControlFlow<()>),
    Value(Program),
}

pub struct Reader {
    rl: Editor<(), DefaultHistory>,
    show_tokens: bool,
}

impl Reader {
    pub fn new(rl: Editor<(), DefaultHistory>, show_tokens: bool) -> Self {
        Self { rl, show_tokens }
    }

    pub fn read(&mut self) -> ReadOutput {
        let line = match self.rl.readline(PROMPT) {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                return ReadOutput::ControlFlow(ControlFlow::Continue(()));
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                return ReadOutput::ControlFlow(ControlFlow::Break(()));
            }
            Err(err) => {
                println!("Error: {:?}", err);
                return ReadOutput::ControlFlow(ControlFlow::Break(()));
            }
            Ok(line) => line,
        };
        if line.trim().is_empty() {
            return ReadOutput::ControlFlow(ControlFlow::Continue(()));
        }
        // a history failure only costs recall of this line
        let _ = self.rl.add_history_entry(line.as_str());

        if self.show_tokens {
            print_tokens(&line);
        }

        match Parser::new(Tokenizer::new(&line)).parse_program() {
            Ok(program) => ReadOutput::Value(program),
            Err(errors) => {
                for error in errors {
                    println!("\t{}", error);
                }
                ReadOutput::ControlFlow(ControlFlow::Continue(()))
            }
        }
    }
}
