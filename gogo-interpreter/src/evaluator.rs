use tracing::{debug, trace};

use crate::builtins;
use crate::environment::Environment;
use crate::object::{EvaluationError, Function, Object, QuickReturn, Value};
use gogo_core::ast;
use gogo_core::ast::Expression;

/// Any evaluable piece of a syntax tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a ast::Program),
    Block(&'a ast::BlockStatement),
    Statement(&'a ast::Statement),
    Expression(&'a Expression),
}

/// Evaluates `node` in `environment`. A `return` that is not inside a
/// function yields its value; runtime errors come back as `Err`.
pub fn eval(node: Node<'_>, environment: &Environment) -> Result<Value, EvaluationError> {
    let result = match node {
        Node::Program(program) => return eval_program(program, environment),
        Node::Block(block) => eval_block_statement(block, environment),
        Node::Statement(statement) => eval_statement(statement, environment),
        Node::Expression(expression) => eval_expression(expression, environment),
    };
    match result {
        Ok(value) | Err(QuickReturn::Return(value)) => Ok(value),
        Err(QuickReturn::Error(error)) => Err(error),
    }
}

pub fn eval_program(
    program: &ast::Program,
    environment: &Environment,
) -> Result<Value, EvaluationError> {
    let mut output = Object::null();
    for statement in &program.statements {
        let result = eval_statement(statement, environment);

        match result {
            Err(QuickReturn::Return(value)) => return Ok(value),
            Err(QuickReturn::Error(error)) => {
                debug!(%error, "evaluation failed");
                return Err(error);
            }
            Ok(object) => output = object,
        };
    }
    Ok(output)
}

fn eval_statement(
    statement: &ast::Statement,
    environment: &Environment,
) -> Result<Value, QuickReturn> {
    match statement {
        ast::Statement::Expression(expression) => eval_expression(expression, environment),
        ast::Statement::Return(statement) => eval_return_statement(statement, environment),
        ast::Statement::Let(statement) => eval_let_statement(statement, environment),
    }
}

fn eval_let_statement(
    statement: &ast::LetStatement,
    environment: &Environment,
) -> Result<Value, QuickReturn> {
    let value = eval_expression(&statement.value, environment)?;
    environment.set(statement.identifier.name.clone(), value);
    Ok(Object::null())
}

fn eval_return_statement(
    statement: &ast::ReturnStatement,
    environment: &Environment,
) -> Result<Value, QuickReturn> {
    let value = eval_expression(&statement.value, environment)?;
    Err(QuickReturn::Return(value))
}

fn eval_block_statement(
    block: &ast::BlockStatement,
    environment: &Environment,
) -> Result<Value, QuickReturn> {
    let mut result = Object::null();
    for statement in &block.statements {
        result = eval_statement(statement, environment)?;
    }
    Ok(result)
}

fn eval_expression(expression: &Expression, environment: &Environment) -> Result<Value, QuickReturn> {
    match expression {
        Expression::IntegerLiteral(value) => Ok(Object::integer(*value)),
        Expression::BooleanLiteral(value) => Ok(Object::boolean(*value)),
        Expression::StringLiteral(value) => Ok(Object::string(value.clone())),
        Expression::ArrayLiteral(elements) => {
            Ok(Object::array(eval_expressions(elements, environment)?))
        }
        Expression::Identifier(identifier) => eval_identifier(identifier, environment),
        Expression::PrefixOperation(kind, operand) => {
            let right = eval_expression(operand, environment)?;
            eval_prefix_operation(*kind, right)
        }
        Expression::InfixOperation(kind, left, right) => {
            let left = eval_expression(left, environment)?;
            let right = eval_expression(right, environment)?;
            eval_infix_operation(*kind, left, right)
        }
        Expression::IfExpression {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expression(condition, environment)?;
            if condition.is_truthy() {
                eval_block_statement(consequence, environment)
            } else if let Some(alternative) = alternative {
                eval_block_statement(alternative, environment)
            } else {
                Ok(Object::null())
            }
        }
        Expression::FunctionLiteral { parameters, body } => Ok(Object::function(
            parameters.clone(),
            body.clone(),
            environment.clone(),
        )),
        Expression::CallExpression {
            function,
            arguments,
        } => {
            if let Some(quoted) = quoted_argument(function, arguments) {
                return Ok(Object::quote(quoted.clone()));
            }
            let function = eval_expression(function, environment)?;
            let arguments = eval_expressions(arguments, environment)?;
            apply_function(&function, arguments)
        }
        Expression::IndexExpression { left, index } => {
            let left = eval_expression(left, environment)?;
            let index = eval_expression(index, environment)?;
            eval_index_expression(&left, &index)
        }
    }
}

fn eval_identifier(
    identifier: &ast::Identifier,
    environment: &Environment,
) -> Result<Value, QuickReturn> {
    environment
        .get(&identifier.name)
        .or_else(|| builtins::lookup(&identifier.name).map(Object::builtin_function))
        .ok_or_else(|| {
            QuickReturn::Error(EvaluationError::UnknownIdentifier(
                identifier.name.clone(),
            ))
        })
}

/// `quote(expr)` is not a call: its single argument is returned unevaluated.
fn quoted_argument<'a>(function: &Expression, arguments: &'a [Expression]) -> Option<&'a Expression> {
    match (function, arguments) {
        (Expression::Identifier(identifier), [argument]) if &*identifier.name == "quote" => {
            Some(argument)
        }
        _ => None,
    }
}

fn eval_expressions(
    arguments: &[Expression],
    environment: &Environment,
) -> Result<Vec<Value>, QuickReturn> {
    let mut result = Vec::with_capacity(arguments.len());
    for argument in arguments {
        result.push(eval_expression(argument, environment)?);
    }
    Ok(result)
}

fn apply_function(function: &Value, arguments: Vec<Value>) -> Result<Value, QuickReturn> {
    match &**function {
        Object::Function(function) => call_function(function, arguments),
        Object::BuiltinFunction(builtin) => {
            trace!(name = builtin.name, arguments = arguments.len(), "calling builtin");
            Ok((builtin.func)(arguments)?)
        }
        other => Err(QuickReturn::Error(EvaluationError::CallNonFunction(
            other.kind(),
        ))),
    }
}

// Arity is not checked: arguments bind to parameters by position, surplus
// arguments are dropped and missing ones stay unbound.
fn call_function(function: &Function, arguments: Vec<Value>) -> Result<Value, QuickReturn> {
    trace!(
        parameters = function.parameters.len(),
        arguments = arguments.len(),
        "calling function"
    );
    let new_environment = Environment::new_enclosed(&function.env);
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        new_environment.set(parameter.name.clone(), argument);
    }
    match eval_block_statement(&function.body, &new_environment) {
        Ok(value) | Err(QuickReturn::Return(value)) => Ok(value),
        Err(error) => Err(error),
    }
}

fn eval_index_expression(left: &Value, index: &Value) -> Result<Value, QuickReturn> {
    match (&**left, &**index) {
        (Object::Array(array), Object::Integer(index)) => Ok(usize::try_from(*index)
            .ok()
            .and_then(|index| array.get(index))
            .cloned()
            .unwrap_or_else(Object::null)),
        (Object::Array(_), _) => Ok(Object::null()),
        (other, _) => Err(QuickReturn::Error(EvaluationError::IndexNotSupported(
            other.kind(),
        ))),
    }
}

fn eval_prefix_operation(
    kind: ast::PrefixOperationKind,
    right: Value,
) -> Result<Value, QuickReturn> {
    match (kind, &*right) {
        (ast::PrefixOperationKind::Bang, Object::Boolean(value)) => Ok(Object::boolean(!value)),
        (ast::PrefixOperationKind::Bang, Object::Null) => Ok(Object::boolean(true)),
        (ast::PrefixOperationKind::Bang, _) => Ok(Object::boolean(false)),
        (ast::PrefixOperationKind::Minus, Object::Integer(value)) => {
            Ok(Object::integer(value.wrapping_neg()))
        }
        (ast::PrefixOperationKind::Minus, other) => {
            Err(QuickReturn::Error(EvaluationError::UnknownPrefixOperator {
                operation: kind,
                right: other.kind(),
            }))
        }
    }
}

fn eval_infix_operation(
    kind: ast::InfixOperationKind,
    left: Value,
    right: Value,
) -> Result<Value, QuickReturn> {
    use ast::InfixOperationKind;
    match (&*left, &*right) {
        (Object::Integer(left), Object::Integer(right)) => {
            eval_integer_infix_operation(kind, *left, *right)
        }
        (Object::String(left), Object::String(right)) if kind == InfixOperationKind::Plus => {
            Ok(Object::string(format!("{}{}", left, right)))
        }
        (l, r) if l.kind() != r.kind() => Err(QuickReturn::Error(EvaluationError::TypeMismatch {
            left: l.kind(),
            operation: kind,
            right: r.kind(),
        })),
        (Object::String(_), Object::String(_)) => unknown_infix_operator(kind, &left, &right),
        _ => match kind {
            InfixOperationKind::Equal => Ok(Object::boolean(identical(&left, &right))),
            InfixOperationKind::NotEqual => Ok(Object::boolean(!identical(&left, &right))),
            _ => unknown_infix_operator(kind, &left, &right),
        },
    }
}

fn eval_integer_infix_operation(
    kind: ast::InfixOperationKind,
    left: i64,
    right: i64,
) -> Result<Value, QuickReturn> {
    use ast::InfixOperationKind;
    let value = match kind {
        InfixOperationKind::Plus => Object::integer(left.wrapping_add(right)),
        InfixOperationKind::Minus => Object::integer(left.wrapping_sub(right)),
        InfixOperationKind::Multiply => Object::integer(left.wrapping_mul(right)),
        InfixOperationKind::Divide => {
            if right == 0 {
                return Err(QuickReturn::Error(EvaluationError::DivisionByZero));
            }
            Object::integer(left.wrapping_div(right))
        }
        InfixOperationKind::LessThan => Object::boolean(left < right),
        InfixOperationKind::GreaterThan => Object::boolean(left > right),
        InfixOperationKind::Equal => Object::boolean(left == right),
        InfixOperationKind::NotEqual => Object::boolean(left != right),
    };
    Ok(value)
}

fn unknown_infix_operator(
    kind: ast::InfixOperationKind,
    left: &Object,
    right: &Object,
) -> Result<Value, QuickReturn> {
    Err(QuickReturn::Error(EvaluationError::UnknownInfixOperator {
        left: left.kind(),
        operation: kind,
        right: right.kind(),
    }))
}

// Booleans and null compare by value; every other kind only equals itself.
fn identical(left: &Value, right: &Value) -> bool {
    match (&**left, &**right) {
        (Object::Boolean(left), Object::Boolean(right)) => left == right,
        (Object::Null, Object::Null) => true,
        _ => gc::Gc::ptr_eq(left, right),
    }
}

#[cfg(test)]
mod tests {
    use gogo_core::lexer::Tokenizer;
    use gogo_core::parser::Parser;

    use super::{eval_program, Environment};
    use crate::object::{inspect, EvaluationError, Object, Value};

    fn run(input: &str) -> Result<Value, EvaluationError> {
        let tokenizer = Tokenizer::new(input);
        let mut parser = Parser::new(tokenizer);
        let ast = parser.parse_program().unwrap();
        eval_program(&ast, &Environment::new())
    }

    fn test_evaluation(inputs: Vec<(&str, Result<Value, EvaluationError>)>) {
        for (input, output) in inputs {
            assert_eq!(run(input), output, "input: {input}");
        }
    }

    fn test_rendering(inputs: Vec<(&str, &str)>) {
        for (input, output) in inputs {
            assert_eq!(inspect(&run(input)), output, "input: {input}");
        }
    }

    #[test]
    fn test_literal() {
        let inputs = vec![
            ("5;", Ok(Object::integer(5))),
            ("true;", Ok(Object::boolean(true))),
            ("false;", Ok(Object::boolean(false))),
            ("\"hello\";", Ok(Object::string("hello".to_owned()))),
            ("", Ok(Object::null())),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_prefix_operators() {
        let inputs = vec![
            ("--5;", Ok(Object::integer(5))),
            ("-10;", Ok(Object::integer(-10))),
            ("!false;", Ok(Object::boolean(true))),
            ("!!true;", Ok(Object::boolean(true))),
            ("!5", Ok(Object::boolean(false))),
            ("!!5", Ok(Object::boolean(true))),
            ("!0", Ok(Object::boolean(false))),
            ("!\"\"", Ok(Object::boolean(false))),
            ("!if (false) { 1 }", Ok(Object::boolean(true))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_integer_arithmetic() {
        let inputs = vec![
            ("5 + 5 + 5 + 5 - 10", Ok(Object::integer(10))),
            ("2 * 2 * 2 * 2 * 2", Ok(Object::integer(32))),
            ("-50 + 100 + -50", Ok(Object::integer(0))),
            ("20 + 2 * -10", Ok(Object::integer(0))),
            ("50 / 2 * 2 + 10", Ok(Object::integer(60))),
            ("3 * (3 * 3) + 10", Ok(Object::integer(37))),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10", Ok(Object::integer(50))),
            ("7 / 2", Ok(Object::integer(3))),
            ("-7 / 2", Ok(Object::integer(-3))),
            (
                "9223372036854775807 + 1",
                Ok(Object::integer(i64::MIN)),
            ),
            ("1 / 0", Err(EvaluationError::DivisionByZero)),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_comparisons() {
        let inputs = vec![
            ("1 < 2", Ok(Object::boolean(true))),
            ("1 > 2", Ok(Object::boolean(false))),
            ("-1 < 1", Ok(Object::boolean(true))),
            ("1 == 1", Ok(Object::boolean(true))),
            ("1 != 1", Ok(Object::boolean(false))),
            ("true == true", Ok(Object::boolean(true))),
            ("true != false", Ok(Object::boolean(true))),
            ("(1 < 2) == true", Ok(Object::boolean(true))),
            ("(1 > 2) == true", Ok(Object::boolean(false))),
            ("if (false) { 1 } == if (false) { 2 }", Ok(Object::boolean(true))),
            ("[1] == [1]", Ok(Object::boolean(false))),
            ("let a = [1]; a == a", Ok(Object::boolean(true))),
            ("let f = fn() { 1 }; f == f", Ok(Object::boolean(true))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_strings() {
        let inputs = vec![
            (
                r#""Hello" + " " + "World!""#,
                Ok(Object::string("Hello World!".to_owned())),
            ),
            (r#"len("four")"#, Ok(Object::integer(4))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_error_handling() {
        let inputs = vec![
            ("5 + true;", "ERROR: type mismatch: INTEGER + BOOLEAN"),
            ("5 + true; 5;", "ERROR: type mismatch: INTEGER + BOOLEAN"),
            ("1 == true", "ERROR: type mismatch: INTEGER == BOOLEAN"),
            ("-true", "ERROR: unknown operator: -BOOLEAN"),
            ("-\"a\"", "ERROR: unknown operator: -STRING"),
            ("true + false;", "ERROR: unknown operator: BOOLEAN + BOOLEAN"),
            ("5; true + false; 5", "ERROR: unknown operator: BOOLEAN + BOOLEAN"),
            (
                "if (10 > 1) { true + false; }",
                "ERROR: unknown operator: BOOLEAN + BOOLEAN",
            ),
            (
                "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                "ERROR: unknown operator: BOOLEAN + BOOLEAN",
            ),
            (r#""Hello" - "World""#, "ERROR: unknown operator: STRING - STRING"),
            (r#""a" == "a""#, "ERROR: unknown operator: STRING == STRING"),
            ("foobar", "ERROR: identifier not found: foobar"),
            ("5(1)", "ERROR: not a function: INTEGER"),
            ("1[0]", "ERROR: index operator not supported: INTEGER"),
            ("len(1)", "ERROR: argument to `len` not supported, got INTEGER"),
            ("len()", "ERROR: wrong number of arguments. got=0, want=1"),
            ("[1, 2 + true, 3]", "ERROR: type mismatch: INTEGER + BOOLEAN"),
            ("fn(x) { x }(1 - true)", "ERROR: type mismatch: INTEGER - BOOLEAN"),
        ];

        test_rendering(inputs);
    }

    #[test]
    fn test_errors_stop_evaluation() {
        let input = "let x = 1; let y = x + true; let z = 3;";
        let ast = Parser::new(Tokenizer::new(input)).parse_program().unwrap();
        let env = Environment::new();

        assert!(eval_program(&ast, &env).is_err());
        assert_eq!(env.get("x"), Some(Object::integer(1)));
        assert_eq!(env.get("y"), None);
        assert_eq!(env.get("z"), None);
    }

    #[test]
    fn test_conditionals() {
        let inputs = vec![
            ("if (true) { 10 }", Ok(Object::integer(10))),
            ("if (false) { 10 }", Ok(Object::null())),
            ("if (1) { 10 }", Ok(Object::integer(10))),
            ("if (0) { 10 }", Ok(Object::integer(10))),
            ("if (1 < 2) { 10 }", Ok(Object::integer(10))),
            ("if (1 > 2) { 10 }", Ok(Object::null())),
            ("if (1 > 2) { 10 } else { 20 }", Ok(Object::integer(20))),
            ("if (1 < 2) { 10 } else { 20 }", Ok(Object::integer(10))),
            ("if (true) { }", Ok(Object::null())),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_return_statements() {
        let inputs = vec![
            ("return 10;", Ok(Object::integer(10))),
            ("return 10; 9;", Ok(Object::integer(10))),
            ("return 2 * 5; 9;", Ok(Object::integer(10))),
            ("9; return 2 * 5; 9;", Ok(Object::integer(10))),
            (
                "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
                Ok(Object::integer(10)),
            ),
            (
                "let f = fn(x) { return x; x + 10; }; f(10);",
                Ok(Object::integer(10)),
            ),
            (
                "let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);",
                Ok(Object::integer(20)),
            ),
            (
                "let f = fn() { if (true) { return 1; } 2 }; f() + 10",
                Ok(Object::integer(11)),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_let_statements() {
        let inputs = vec![
            ("let a = 5; a;", Ok(Object::integer(5))),
            ("let a = 5 * 5; a;", Ok(Object::integer(25))),
            ("let a = 5; let b = a; b;", Ok(Object::integer(5))),
            (
                "let a = 5; let b = a; let c = a + b + 5; c;",
                Ok(Object::integer(15)),
            ),
            ("let a = 5;", Ok(Object::null())),
            ("let x = 5; x + 1;", Ok(Object::integer(6))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_function_object() {
        test_rendering(vec![
            ("fn(x) { x + 2; };", "fn(x) {...}"),
            ("fn() { 1 }", "fn() {...}"),
            ("len", "builtin function"),
        ]);
    }

    #[test]
    fn test_function_application() {
        let inputs = vec![
            (
                "let identity = fn(x) { x }; identity(5)",
                Ok(Object::integer(5)),
            ),
            (
                "let identity = fn(x) { return x }; identity(5)",
                Ok(Object::integer(5)),
            ),
            (
                "let double = fn(x) { x * 2 }; double(5)",
                Ok(Object::integer(10)),
            ),
            (
                "let add = fn(x, y) { x + y }; add(5, 5)",
                Ok(Object::integer(10)),
            ),
            (
                "let add = fn(x, y) { x + y }; add(5 + 5, add(5, 5))",
                Ok(Object::integer(20)),
            ),
            ("fn(x) { x }(5)", Ok(Object::integer(5))),
            ("fn(x) { x + 1; }(5);", Ok(Object::integer(6))),
            (
                "
                let factorial = fn(n) {
                    if (n < 2) { 1 }
                    else { factorial(n - 1) * n }
                };
                factorial(5)",
                Ok(Object::integer(120)),
            ),
            (
                "
                let func = fn(a) {
                    fn(b) {
                        a + b
                    }
                };
                func(5)(10)",
                Ok(Object::integer(15)),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_arity_is_not_checked() {
        let inputs = vec![
            ("fn(x) { 1 }()", Ok(Object::integer(1))),
            ("fn(x) { x }(1, 2, 3)", Ok(Object::integer(1))),
            (
                "fn(x, y) { y }(1)",
                Err(EvaluationError::UnknownIdentifier("y".into())),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_closure() {
        let inputs = vec![
            (
                "let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(3);",
                Ok(Object::integer(5)),
            ),
            (
                r#"
            let fa = fn() {
                let x = 5;
                let fb = fn() {
                    fn() { x }
                };
                fb
            };
            let temp = fa();
            let temp_ = temp();
            temp_()"#,
                Ok(Object::integer(5)),
            ),
            (
                r#"
            let fa = fn() {
                let is_even = fn(x) {
                    if (x == 0) {
                        true
                    } else {
                        is_odd(x - 1)
                    }
                };
                let is_odd = fn(x) {
                    if (x == 0) {
                        false
                    } else {
                        is_even(x - 1)
                    }
                };
                is_even
            };
            let temp = fa();
            temp(3);"#,
                Ok(Object::boolean(false)),
            ),
            // The body resolves through the defining scope, not the caller's.
            (
                "let x = 1; let f = fn() { x }; let g = fn() { let x = 2; f() }; g()",
                Ok(Object::integer(1)),
            ),
            // Captured by reference: a later binding in the captured scope
            // is visible to the closure.
            (
                "let f = fn() { later }; let later = 7; f()",
                Ok(Object::integer(7)),
            ),
        ];

        test_evaluation(inputs)
    }

    #[test]
    fn test_shadowing() {
        let input = "let x = 1; let f = fn() { let x = 2; x; }; f();";
        let ast = Parser::new(Tokenizer::new(input)).parse_program().unwrap();
        let env = Environment::new();

        assert_eq!(eval_program(&ast, &env), Ok(Object::integer(2)));
        assert_eq!(env.get("x"), Some(Object::integer(1)));
        // `f` and `x` only; the function's local `x` stays in its own scope
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_builtins_can_be_shadowed() {
        let inputs = vec![
            ("let len = fn(x) { 42 }; len([1])", Ok(Object::integer(42))),
            ("len([1, 2, 3])", Ok(Object::integer(3))),
            (
                "let a = [1, 2]; let b = push(a, 3); len(a) + len(b)",
                Ok(Object::integer(5)),
            ),
            ("first(rest([1, 2, 3]))", Ok(Object::integer(2))),
            ("last([1, 2, 3])", Ok(Object::integer(3))),
            ("puts(\"hello\", 1)", Ok(Object::null())),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_arrays() {
        let inputs = vec![
            (
                "[1, 2 * 2, 3 + 3]",
                Ok(Object::array(vec![
                    Object::integer(1),
                    Object::integer(4),
                    Object::integer(6),
                ])),
            ),
            ("[1, 2, 3][0]", Ok(Object::integer(1))),
            ("[1, 2, 3][2]", Ok(Object::integer(3))),
            ("let i = 0; [1][i];", Ok(Object::integer(1))),
            ("[1, 2, 3][1 + 1];", Ok(Object::integer(3))),
            ("let myArray = [1, 2, 3]; myArray[2];", Ok(Object::integer(3))),
            (
                "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
                Ok(Object::integer(6)),
            ),
            ("[1, 2, 3][3]", Ok(Object::null())),
            ("[1, 2, 3][5]", Ok(Object::null())),
            ("[1, 2, 3][-1]", Ok(Object::null())),
            ("[1, 2, 3][true]", Ok(Object::null())),
            ("[[1, 2], [3]][0][1]", Ok(Object::integer(2))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_quote() {
        test_rendering(vec![
            ("quote(5)", "quote(5)"),
            ("quote(5 + 8)", "quote((5 + 8))"),
            ("quote(foobar)", "quote(foobar)"),
            ("quote(foobar + barfoo)", "quote((foobar + barfoo))"),
            ("quote(1, 2)", "ERROR: identifier not found: quote"),
        ]);
    }
}
