use gogo_core::ast::{Program, Statement};
use gogo_interpreter::object::{inspect, EvaluationError, Value};

pub struct Printer;

impl Printer {
    pub fn print(&mut self, program: &Program, result: &Result<Value, EvaluationError>) {
        // a trailing `let` has no value worth echoing
        if result.is_ok() && matches!(program.statements.last(), Some(Statement::Let(_))) {
            return;
        }
        println!("{}", inspect(result));
    }
}
