use tracing::trace;

use crate::object::{BuiltinFunction, EvaluationError, Object, ObjectType, Value};

fn expect_arguments(args: &[Value], expected: usize) -> Result<(), EvaluationError> {
    if args.len() != expected {
        return Err(EvaluationError::WrongArgumentCount {
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn expect_array<'a>(
    function: &'static str,
    object: &'a Object,
) -> Result<&'a [Value], EvaluationError> {
    match object {
        Object::Array(elements) => Ok(elements.as_slice()),
        other => Err(EvaluationError::WrongArgumentType {
            function,
            expected: ObjectType::Array,
            actual: other.kind(),
        }),
    }
}

fn builtin_len(args: Vec<Value>) -> Result<Value, EvaluationError> {
    expect_arguments(&args, 1)?;
    match &*args[0] {
        Object::String(s) => Ok(Object::integer(s.len() as i64)),
        Object::Array(arr) => Ok(Object::integer(arr.len() as i64)),
        other => Err(EvaluationError::UnsupportedArgument {
            function: "len",
            actual: other.kind(),
        }),
    }
}

fn builtin_first(args: Vec<Value>) -> Result<Value, EvaluationError> {
    expect_arguments(&args, 1)?;
    let arr = expect_array("first", &args[0])?;
    Ok(arr.first().cloned().unwrap_or_else(Object::null))
}

fn builtin_last(args: Vec<Value>) -> Result<Value, EvaluationError> {
    expect_arguments(&args, 1)?;
    let arr = expect_array("last", &args[0])?;
    Ok(arr.last().cloned().unwrap_or_else(Object::null))
}

fn builtin_rest(args: Vec<Value>) -> Result<Value, EvaluationError> {
    expect_arguments(&args, 1)?;
    let arr = expect_array("rest", &args[0])?;
    if arr.is_empty() {
        return Ok(Object::null());
    }
    Ok(Object::array(arr[1..].to_vec()))
}

fn builtin_push(args: Vec<Value>) -> Result<Value, EvaluationError> {
    expect_arguments(&args, 2)?;
    let arr = expect_array("push", &args[0])?;
    let mut new_arr = arr.to_vec();
    new_arr.push(args[1].clone());
    Ok(Object::array(new_arr))
}

fn builtin_puts(args: Vec<Value>) -> Result<Value, EvaluationError> {
    for arg in &args {
        println!("{}", **arg);
    }
    Ok(Object::null())
}

const BUILTINS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "len",
        func: builtin_len,
    },
    BuiltinFunction {
        name: "first",
        func: builtin_first,
    },
    BuiltinFunction {
        name: "last",
        func: builtin_last,
    },
    BuiltinFunction {
        name: "rest",
        func: builtin_rest,
    },
    BuiltinFunction {
        name: "push",
        func: builtin_push,
    },
    BuiltinFunction {
        name: "puts",
        func: builtin_puts,
    },
];

/// Resolves a builtin by name. Consulted only after the environment chain
/// has no binding for the name.
pub fn lookup(name: &str) -> Option<BuiltinFunction> {
    let builtin = BUILTINS.iter().find(|builtin| builtin.name == name).copied();
    if builtin.is_some() {
        trace!(name, "resolved builtin");
    }
    builtin
}
