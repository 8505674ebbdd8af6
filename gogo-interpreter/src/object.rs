use std::fmt::Display;
use std::rc::Rc;

use gc::{Finalize, Gc, Trace};
use gogo_core::ast;
use thiserror::Error;

use crate::environment::Environment;

/// Handle to a runtime value. Cloning shares the value, so an array passed
/// around is never copied.
pub type Value = Gc<Object>;

#[derive(Debug, PartialEq, Trace, Finalize)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Array(Vec<Value>),
    Function(Function),
    BuiltinFunction(#[unsafe_ignore_trace] BuiltinFunction),
    Quote(#[unsafe_ignore_trace] Rc<ast::Expression>),
    Null,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ObjectType {
    Integer,
    Boolean,
    String,
    Array,
    Function,
    Builtin,
    Quote,
    Null,
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::String => "STRING",
            ObjectType::Array => "ARRAY",
            ObjectType::Function => "FUNCTION",
            ObjectType::Builtin => "BUILTIN",
            ObjectType::Quote => "QUOTE",
            ObjectType::Null => "NULL",
        };
        write!(f, "{}", name)
    }
}

impl Object {
    pub fn null() -> Value {
        Gc::new(Object::Null)
    }
    pub fn boolean(value: bool) -> Value {
        Gc::new(Object::Boolean(value))
    }
    pub fn integer(value: i64) -> Value {
        Gc::new(Object::Integer(value))
    }
    pub fn string(value: String) -> Value {
        Gc::new(Object::String(value))
    }
    pub fn array(array: Vec<Value>) -> Value {
        Gc::new(Object::Array(array))
    }
    pub fn function(
        parameters: Rc<[ast::Identifier]>,
        body: Rc<ast::BlockStatement>,
        env: Environment,
    ) -> Value {
        Gc::new(Object::Function(Function {
            parameters,
            body,
            env,
        }))
    }
    pub fn builtin_function(func: BuiltinFunction) -> Value {
        Gc::new(Object::BuiltinFunction(func))
    }
    pub fn quote(expression: ast::Expression) -> Value {
        Gc::new(Object::Quote(Rc::new(expression)))
    }

    pub fn kind(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::String(_) => ObjectType::String,
            Object::Array(_) => ObjectType::Array,
            Object::Function(_) => ObjectType::Function,
            Object::BuiltinFunction(_) => ObjectType::Builtin,
            Object::Quote(_) => ObjectType::Quote,
            Object::Null => ObjectType::Null,
        }
    }

    /// `false` and `null` are falsy, everything else (including `0`) is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::String(value) => write!(f, "{}", value),
            Object::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", **element)?;
                }
                write!(f, "]")
            }
            Object::Function(function) => {
                let parameters = function
                    .parameters
                    .iter()
                    .map(|parameter| parameter.name.as_ref())
                    .collect::<Vec<_>>();
                write!(f, "fn({}) {{...}}", parameters.join(", "))
            }
            Object::BuiltinFunction(_) => write!(f, "builtin function"),
            Object::Quote(expression) => write!(f, "quote({})", expression),
            Object::Null => write!(f, "null"),
        }
    }
}

/// A closure: the literal's parameters and body plus the environment that
/// was active where the literal was evaluated.
#[derive(Clone, Trace, Finalize)]
pub struct Function {
    #[unsafe_ignore_trace]
    pub parameters: Rc<[ast::Identifier]>,
    #[unsafe_ignore_trace]
    pub body: Rc<ast::BlockStatement>,
    pub env: Environment,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && self.env == other.env
    }
}

// The captured environment can reach this function again, so it is left
// out of the debug output.
impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub func: fn(Vec<Value>) -> Result<Value, EvaluationError>,
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .finish()
    }
}

/// Unwinds evaluation up to the nearest function call (`Return`) or all the
/// way out (`Error`).
#[derive(Debug, PartialEq)]
pub enum QuickReturn {
    Return(Value),
    Error(EvaluationError),
}

impl From<EvaluationError> for QuickReturn {
    fn from(value: EvaluationError) -> Self {
        QuickReturn::Error(value)
    }
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluationError {
    #[error("identifier not found: {0}")]
    UnknownIdentifier(Rc<str>),
    #[error("unknown operator: {operation}{right}")]
    UnknownPrefixOperator {
        operation: ast::PrefixOperationKind,
        right: ObjectType,
    },
    #[error("unknown operator: {left} {operation} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        operation: ast::InfixOperationKind,
        right: ObjectType,
    },
    #[error("type mismatch: {left} {operation} {right}")]
    TypeMismatch {
        left: ObjectType,
        operation: ast::InfixOperationKind,
        right: ObjectType,
    },
    #[error("not a function: {0}")]
    CallNonFunction(ObjectType),
    #[error("index operator not supported: {0}")]
    IndexNotSupported(ObjectType),
    #[error("division by zero")]
    DivisionByZero,
    #[error("wrong number of arguments. got={actual}, want={expected}")]
    WrongArgumentCount { expected: usize, actual: usize },
    #[error("argument to `{function}` must be {expected}, got {actual}")]
    WrongArgumentType {
        function: &'static str,
        expected: ObjectType,
        actual: ObjectType,
    },
    #[error("argument to `{function}` not supported, got {actual}")]
    UnsupportedArgument {
        function: &'static str,
        actual: ObjectType,
    },
}

/// Canonical text of an evaluation result, errors prefixed with `ERROR: `.
pub fn inspect(result: &Result<Value, EvaluationError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(error) => format!("ERROR: {}", error),
    }
}
