mod printer;
mod reader;

use std::ops::ControlFlow;

use anyhow::Context;
use gogo_interpreter::environment::Environment;
use gogo_interpreter::evaluator;
use rustyline::DefaultEditor;

use printer::Printer;
use reader::{ReadOutput, Reader};

struct Repl {
    reader: Reader,
    environment: Environment,
    printer: Printer,
}

impl Repl {
    fn run(mut self) {
        loop {
            match self.reader.read() {
                ReadOutput::ControlFlow(ControlFlow::Break(())) => break,
                ReadOutput::ControlFlow(ControlFlow::Continue(())) => continue,
                ReadOutput::Value(program) => {
                    let result = evaluator::eval_program(&program, &self.environment);
                    self.printer.print(&program, &result);
                }
            }
        }
    }
}

/// Reads lines until Ctrl-D. Bindings made on one line stay visible on the
/// following ones.
pub fn start(show_tokens: bool) -> anyhow::Result<()> {
    let rl = DefaultEditor::new().context("could not initialise the line editor")?;

    Repl {
        reader: Reader::new(rl, show_tokens),
        environment: Environment::new(),
        printer: Printer,
    }
    .run();
    Ok(())
}
